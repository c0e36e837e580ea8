// Evolve function: combine a prior state with a new fact payload to produce the next state.
//
// Purpose
// - Define deterministic transitions for each fact kind. This is the dispatcher the entity
//   engine calls on replay and on new facts alike.
//
// Boundaries
// - No input or output. No side effects.
// - Exhaustive over AccountEvent. Facts that do not fit the current lifecycle leave it unchanged.
// - AccountEvent::Unknown (a kind from a newer writer) is a no-op.

use crate::modules::accounts::core::events::AccountEvent;
use crate::modules::accounts::core::events::v1::account_closed::AccountClosedV1;
use crate::modules::accounts::core::state::AccountState;
use crate::shared::core::entity::EntityState;
use crate::shared::core::fact::Fact;
use rust_decimal::Decimal;

pub fn evolve(state: AccountState, event: &AccountEvent) -> AccountState {
    match event {
        AccountEvent::AccountOpenedV1(e) => match state {
            AccountState::None => AccountState::Active {
                holder_name: e.holder_name.clone(),
                account_type: e.account_type.clone(),
                balance: e.initial_balance,
                currency: e.currency.clone(),
            },
            state => state,
        },
        AccountEvent::MoneyDepositedV1(e) => with_balance(state, e.new_balance),
        AccountEvent::MoneyWithdrawnV1(e) => with_balance(state, e.new_balance),
        AccountEvent::AccountClosedV1(e) => close(state, e),
        AccountEvent::Unknown => state,
    }
}

fn with_balance(state: AccountState, new_balance: Decimal) -> AccountState {
    match state {
        AccountState::Active {
            holder_name,
            account_type,
            currency,
            ..
        } => AccountState::Active {
            holder_name,
            account_type,
            balance: new_balance,
            currency,
        },
        state => state,
    }
}

fn close(state: AccountState, e: &AccountClosedV1) -> AccountState {
    match state {
        AccountState::Active {
            holder_name,
            account_type,
            currency,
            ..
        } => AccountState::Closed {
            holder_name,
            account_type,
            final_balance: e.final_balance,
            currency,
            reason: e.reason.clone(),
        },
        state => state,
    }
}

impl EntityState for AccountState {
    type Payload = AccountEvent;

    fn evolve(self, fact: &Fact<AccountEvent>) -> Self {
        evolve(self, fact.payload())
    }
}
