// Command data type for opening a bank account.
//
// Purpose
// - Express the intent to open an account with a holder, a type and an opening balance.
//
// Responsibilities
// - Carry input data for the decider to validate and convert into a fact payload.
// - The account id is not part of the command: it is the entity id the fact is recorded on.

use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAccount {
    pub holder_name: String,
    pub account_type: String,
    pub initial_balance: Decimal,
    pub currency: String,
}
