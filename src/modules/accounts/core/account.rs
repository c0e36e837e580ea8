// A bank account is the generic entity engine specialised to AccountState.
//
// Business operations live in use_cases/*/decide.rs as pure functions over AccountState.
// Their Decision is recorded on a BankAccount with Decision::apply_to.

use crate::modules::accounts::core::state::AccountState;
use crate::shared::core::entity::Entity;

pub type BankAccount = Entity<AccountState>;

#[cfg(test)]
mod bank_account_tests {
    use super::*;
    use crate::shared::core::fact::Fact;
    use crate::tests::fixtures::facts::{deposited, opened, withdrawn};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    fn it_should_reconstruct_an_account_from_its_facts() {
        let facts = vec![
            Fact::new("acc-1", 1, opened(dec!(1000.00))),
            Fact::new("acc-1", 2, deposited("tx-1", dec!(500.00), dec!(1500.00))),
            Fact::new("acc-1", 3, withdrawn("tx-2", dec!(200.00), dec!(1300.00))),
        ];
        let account = BankAccount::replay("acc-1", &facts);

        assert_eq!(account.id(), "acc-1");
        assert_eq!(account.version(), 3);
        assert_eq!(account.state().balance(), dec!(1300.00));
        assert!(!account.state().is_closed());
        assert!(account.pending().is_empty());
    }
}
