// Pure decision function for closing an account.
//
// Responsibilities
// - Enforce rules: the account exists and is not closed yet.
// - Record the balance at closing time as the final balance.

use crate::modules::accounts::core::events::AccountEvent;
use crate::modules::accounts::core::events::v1::account_closed::AccountClosedV1;
use crate::modules::accounts::core::state::AccountState;
use crate::modules::accounts::use_cases::close_account::command::CloseAccount;
use crate::modules::accounts::use_cases::decision::{DecideError, Decision};

pub fn decide_close(state: &AccountState, command: CloseAccount) -> Decision {
    let final_balance = match state {
        AccountState::None => {
            return Decision::Rejected {
                reason: DecideError::NotOpened,
            };
        }
        AccountState::Closed { .. } => {
            return Decision::Rejected {
                reason: DecideError::AccountClosed,
            };
        }
        AccountState::Active { balance, .. } => *balance,
    };
    Decision::Accepted {
        event: AccountEvent::AccountClosedV1(AccountClosedV1 {
            final_balance,
            reason: command.reason,
            closed_by: command.closed_by,
            transfer_account_id: command.transfer_account_id,
        }),
    }
}
