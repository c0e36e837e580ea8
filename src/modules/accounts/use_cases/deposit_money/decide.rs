// Pure decision function for deposits.
//
// Responsibilities
// - Enforce rules: the account is open and not closed, the amount is positive.
// - Record the resulting balance in the fact so replay never redoes arithmetic.

use crate::modules::accounts::core::events::AccountEvent;
use crate::modules::accounts::core::events::v1::money_deposited::MoneyDepositedV1;
use crate::modules::accounts::core::state::AccountState;
use crate::modules::accounts::use_cases::decision::{DecideError, Decision};
use crate::modules::accounts::use_cases::deposit_money::command::DepositMoney;
use rust_decimal::Decimal;

pub fn decide_deposit(state: &AccountState, command: DepositMoney) -> Decision {
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
    let Some(new_balance) = balance.checked_add(command.amount) else {
        return Decision::Rejected {
            reason: DecideError::BalanceOutOfRange,
        };
    };
    Decision::Accepted {
        event: AccountEvent::MoneyDepositedV1(MoneyDepositedV1 {
            transaction_id: command.transaction_id,
            amount: command.amount,
            new_balance,
            description: command.description,
            deposited_by: command.deposited_by,
        }),
    }
}
