// Fact payload: MoneyDepositedV1.
//
// `new_balance` is the balance after the deposit, so replay never recomputes arithmetic.

use rust_decimal::Decimal;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct MoneyDepositedV1 {
    pub transaction_id: String,
    pub amount: Decimal,
    pub new_balance: Decimal,
    pub description: String,
    pub deposited_by: String,
}
