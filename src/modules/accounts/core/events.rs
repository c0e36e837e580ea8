// Root fact payload enumeration for bank accounts and re-exports of versioned payloads.
//
// Purpose
// - Provide a single closed type to pattern match in evolve and projections.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new version and a new variant.
// - Do not change the meaning of historical facts.
// - `Unknown` is the reserved arm for kinds written by a newer schema. Readers treat it as a no-op.

use crate::shared::core::fact::FactPayload;

pub mod v1 {
    pub mod account_closed;
    pub mod account_opened;
    pub mod money_deposited;
    pub mod money_withdrawn;
}

use v1::account_closed::AccountClosedV1;
use v1::account_opened::AccountOpenedV1;
use v1::money_deposited::MoneyDepositedV1;
use v1::money_withdrawn::MoneyWithdrawnV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum AccountEvent {
    AccountOpenedV1(AccountOpenedV1),
    MoneyDepositedV1(MoneyDepositedV1),
    MoneyWithdrawnV1(MoneyWithdrawnV1),
    AccountClosedV1(AccountClosedV1),
    #[serde(other)]
    Unknown,
}

impl AccountEvent {
    pub fn transaction_id(&self) -> Option<&str> {
        match self {
            AccountEvent::MoneyDepositedV1(e) => Some(&e.transaction_id),
            AccountEvent::MoneyWithdrawnV1(e) => Some(&e.transaction_id),
            AccountEvent::AccountOpenedV1(_)
            | AccountEvent::AccountClosedV1(_)
            | AccountEvent::Unknown => None,
        }
    }
}

impl FactPayload for AccountEvent {
    fn kind(&self) -> &'static str {
        match self {
            AccountEvent::AccountOpenedV1(_) => "AccountOpened",
            AccountEvent::MoneyDepositedV1(_) => "MoneyDeposited",
            AccountEvent::MoneyWithdrawnV1(_) => "MoneyWithdrawn",
            AccountEvent::AccountClosedV1(_) => "AccountClosed",
            AccountEvent::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod account_event_tests {
    use super::*;
    use crate::tests::fixtures::facts::{deposited, opened};
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[rstest]
    fn it_should_tag_every_variant_with_its_kind() {
        assert_eq!(opened(dec!(10)).kind(), "AccountOpened");
        assert_eq!(deposited("tx-1", dec!(5), dec!(15)).kind(), "MoneyDeposited");
        assert_eq!(AccountEvent::Unknown.kind(), "Unknown");
    }

    #[rstest]
    fn it_should_expose_the_transaction_id_of_money_movements() {
        assert_eq!(
            deposited("tx-1", dec!(5), dec!(15)).transaction_id(),
            Some("tx-1")
        );
        assert_eq!(opened(dec!(10)).transaction_id(), None);
    }

    #[rstest]
    fn it_should_serialize_with_a_type_tag() {
        let json = serde_json::to_value(opened(dec!(1000.00))).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "AccountOpenedV1",
                "holder_name": "John Doe",
                "account_type": "CHECKING",
                "initial_balance": "1000.00",
                "currency": "EUR",
            })
        );
    }

    #[rstest]
    fn it_should_read_a_kind_from_a_newer_writer_as_unknown() {
        let event: AccountEvent = serde_json::from_value(json!({
            "type": "AccountFrozenV1",
            "frozen_by": "compliance",
        }))
        .unwrap();
        assert_eq!(event, AccountEvent::Unknown);
    }
}
