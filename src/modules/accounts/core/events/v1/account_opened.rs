// Fact payload: AccountOpenedV1.
//
// Purpose
// - Record that an account was opened, with its holder, type and opening balance.
//
// Inputs and outputs
// - Inputs: values from the OpenAccount command validated by the decider.
// - Outputs: fed into evolve to produce the first active state and into projections.

use rust_decimal::Decimal;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct AccountOpenedV1 {
    pub holder_name: String,
    pub account_type: String,
    pub initial_balance: Decimal,
    pub currency: String,
}
