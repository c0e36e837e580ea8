// Outcome of a business operation on a bank account.
//
// Purpose
// - Return business rule violations as data instead of failing hard.
//
// Responsibilities
// - Accepted carries exactly one fact payload. Rejected carries the violated rule.
// - apply_to records an accepted payload on the account. A rejection leaves the account untouched.

use crate::modules::accounts::core::account::BankAccount;
use crate::modules::accounts::core::events::AccountEvent;
use crate::shared::core::fact::Fact;
use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DecideError {
    #[error("account already exists")]
    AlreadyOpened,

    #[error("account does not exist")]
    NotOpened,

    #[error("account is closed")]
    AccountClosed,

    #[error("amount must be positive")]
    NonPositiveAmount,

    #[error("initial balance must not be negative")]
    NegativeInitialBalance,

    #[error("insufficient funds: requested {requested}, but only {available} available")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("resulting balance is out of range")]
    BalanceOutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted { event: AccountEvent },
    Rejected { reason: DecideError },
}

impl Decision {
    pub fn apply_to(self, account: &mut BankAccount) -> Result<&Fact<AccountEvent>, DecideError> {
        match self {
            Decision::Accepted { event } => Ok(account.record(event)),
            Decision::Rejected { reason } => Err(reason),
        }
    }
}
