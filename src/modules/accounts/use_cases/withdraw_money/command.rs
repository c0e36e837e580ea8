// Command data type for withdrawing money.

use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawMoney {
    pub transaction_id: String,
    pub amount: Decimal,
    pub description: String,
    pub withdrawn_by: String,
}
