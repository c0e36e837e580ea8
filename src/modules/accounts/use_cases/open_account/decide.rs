// Pure decision function for opening an account.
//
// Responsibilities
// - Enforce rules: the account must not exist yet, the opening balance must not be negative.
// - Never perform input or output.

use crate::modules::accounts::core::events::AccountEvent;
use crate::modules::accounts::core::events::v1::account_opened::AccountOpenedV1;
use crate::modules::accounts::core::state::AccountState;
use crate::modules::accounts::use_cases::decision::{DecideError, Decision};
use crate::modules::accounts::use_cases::open_account::command::OpenAccount;
use rust_decimal::Decimal;

pub fn decide_open(state: &AccountState, command: OpenAccount) -> Decision {
    if !matches!(state, AccountState::None) {
        return Decision::Rejected {
            reason: DecideError::AlreadyOpened,
        };
    }
    if command.initial_balance < Decimal::ZERO {
        return Decision::Rejected {
            reason: DecideError::NegativeInitialBalance,
        };
    }
    Decision::Accepted {
        event: AccountEvent::AccountOpenedV1(AccountOpenedV1 {
            holder_name: command.holder_name,
            account_type: command.account_type,
            initial_balance: command.initial_balance,
            currency: command.currency,
        }),
    }
}
