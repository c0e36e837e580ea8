// Fact payload: AccountClosedV1.
//
// Purpose
// - Record that an account was closed and with which balance.
//
// Notes
// - `transfer_account_id` names the account the remaining balance goes to, if any.

use rust_decimal::Decimal;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct AccountClosedV1 {
    pub final_balance: Decimal,
    pub reason: String,
    pub closed_by: String,
    pub transfer_account_id: Option<String>,
}
