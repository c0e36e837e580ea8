// Pure decision function for withdrawals.
//
// Responsibilities
// - Enforce rules: the account is open and not closed, the amount is positive and covered
//   by the current balance.

use crate::modules::accounts::core::events::AccountEvent;
use crate::modules::accounts::core::events::v1::money_withdrawn::MoneyWithdrawnV1;
use crate::modules::accounts::core::state::AccountState;
use crate::modules::accounts::use_cases::decision::{DecideError, Decision};
use crate::modules::accounts::use_cases::withdraw_money::command::WithdrawMoney;
use rust_decimal::Decimal;

pub fn decide_withdraw(state: &AccountState, command: WithdrawMoney) -> Decision {
    let balance = match state {
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
    if command.amount <= Decimal::ZERO {
        return Decision::Rejected {
            reason: DecideError::NonPositiveAmount,
        };
    }
    if command.amount > balance {
        return Decision::Rejected {
            reason: DecideError::InsufficientFunds {
                requested: command.amount,
                available: balance,
            },
        };
    }
    let Some(new_balance) = balance.checked_sub(command.amount) else {
        return Decision::Rejected {
            reason: DecideError::BalanceOutOfRange,
        };
    };
    Decision::Accepted {
        event: AccountEvent::MoneyWithdrawnV1(MoneyWithdrawnV1 {
            transaction_id: command.transaction_id,
            amount: command.amount,
            new_balance,
            description: command.description,
            withdrawn_by: command.withdrawn_by,
        }),
    }
}
