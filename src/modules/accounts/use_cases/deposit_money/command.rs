// Command data type for depositing money.
//
// The transaction id is generated by the caller so the decider stays pure.

use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositMoney {
    pub transaction_id: String,
    pub amount: Decimal,
    pub description: String,
    pub deposited_by: String,
}
