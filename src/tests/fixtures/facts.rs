// Fact payload fixtures.
//
// - CounterEvent / CounterState: a minimal entity kind to exercise the generic engine and log.
// - opened / deposited / withdrawn / closed: account payloads with fixed, readable values.

use crate::modules::accounts::core::events::AccountEvent;
use crate::modules::accounts::core::events::v1::account_closed::AccountClosedV1;
use crate::modules::accounts::core::events::v1::account_opened::AccountOpenedV1;
use crate::modules::accounts::core::events::v1::money_deposited::MoneyDepositedV1;
use crate::modules::accounts::core::events::v1::money_withdrawn::MoneyWithdrawnV1;
use crate::shared::core::entity::EntityState;
use crate::shared::core::fact::{Fact, FactPayload};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterEvent {
    Incremented { by: u64 },
    Reset,
    Unknown,
}

impl FactPayload for CounterEvent {
    fn kind(&self) -> &'static str {
        match self {
            CounterEvent::Incremented { .. } => "Incremented",
            CounterEvent::Reset => "Reset",
            CounterEvent::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    pub total: u64,
    pub resets: u32,
}

impl EntityState for CounterState {
    type Payload = CounterEvent;

    fn evolve(self, fact: &Fact<CounterEvent>) -> Self {
        match fact.payload() {
            CounterEvent::Incremented { by } => CounterState {
                total: self.total + by,
                ..self
            },
            CounterEvent::Reset => CounterState {
                total: 0,
                resets: self.resets + 1,
            },
            CounterEvent::Unknown => self,
        }
    }
}

/// Four facts: +5, reset, +3, +4. Total 7 after one reset.
pub fn counter_history(entity_id: &str) -> Vec<Fact<CounterEvent>> {
    vec![
        Fact::new(entity_id, 1, CounterEvent::Incremented { by: 5 }),
        Fact::new(entity_id, 2, CounterEvent::Reset),
        Fact::new(entity_id, 3, CounterEvent::Incremented { by: 3 }),
        Fact::new(entity_id, 4, CounterEvent::Incremented { by: 4 }),
    ]
}

pub fn increments(entity_id: &str, first_version: u64, count: u64) -> Vec<Fact<CounterEvent>> {
    (first_version..first_version + count)
        .map(|version| Fact::new(entity_id, version, CounterEvent::Incremented { by: 1 }))
        .collect()
}

pub fn opened(initial_balance: Decimal) -> AccountEvent {
    AccountEvent::AccountOpenedV1(AccountOpenedV1 {
        holder_name: "John Doe".to_string(),
        account_type: "CHECKING".to_string(),
        initial_balance,
        currency: "EUR".to_string(),
    })
}

pub fn deposited(transaction_id: &str, amount: Decimal, new_balance: Decimal) -> AccountEvent {
    AccountEvent::MoneyDepositedV1(MoneyDepositedV1 {
        transaction_id: transaction_id.to_string(),
        amount,
        new_balance,
        description: "Salary".to_string(),
        deposited_by: "John Doe".to_string(),
    })
}

pub fn withdrawn(transaction_id: &str, amount: Decimal, new_balance: Decimal) -> AccountEvent {
    AccountEvent::MoneyWithdrawnV1(MoneyWithdrawnV1 {
        transaction_id: transaction_id.to_string(),
        amount,
        new_balance,
        description: "Groceries".to_string(),
        withdrawn_by: "John Doe".to_string(),
    })
}

pub fn closed(final_balance: Decimal, reason: &str) -> AccountEvent {
    AccountEvent::AccountClosedV1(AccountClosedV1 {
        final_balance,
        reason: reason.to_string(),
        closed_by: "John Doe".to_string(),
        transfer_account_id: None,
    })
}
