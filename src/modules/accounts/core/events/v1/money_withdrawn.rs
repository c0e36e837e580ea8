// Fact payload: MoneyWithdrawnV1.

use rust_decimal::Decimal;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct MoneyWithdrawnV1 {
    pub transaction_id: String,
    pub amount: Decimal,
    pub new_balance: Decimal,
    pub description: String,
    pub withdrawn_by: String,
}
