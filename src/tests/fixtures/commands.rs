// Builders for account commands.
//
// Each builder starts from fixed defaults and lets a test override only what it cares about.

use crate::modules::accounts::use_cases::close_account::command::CloseAccount;
use crate::modules::accounts::use_cases::deposit_money::command::DepositMoney;
use crate::modules::accounts::use_cases::open_account::command::OpenAccount;
use crate::modules::accounts::use_cases::withdraw_money::command::WithdrawMoney;
use rust_decimal::Decimal;

pub struct OpenAccountBuilder {
    inner: OpenAccount,
}

impl Default for OpenAccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl OpenAccountBuilder {
    pub fn new() -> Self {
        Self {
            inner: OpenAccount {
                holder_name: "John Doe".to_string(),
                account_type: "CHECKING".to_string(),
                initial_balance: Decimal::new(100_000, 2),
                currency: "EUR".to_string(),
            },
        }
    }

    pub fn holder_name(mut self, v: impl Into<String>) -> Self {
        self.inner.holder_name = v.into();
        self
    }

    pub fn account_type(mut self, v: impl Into<String>) -> Self {
        self.inner.account_type = v.into();
        self
    }

    pub fn initial_balance(mut self, v: Decimal) -> Self {
        self.inner.initial_balance = v;
        self
    }

    pub fn build(self) -> OpenAccount {
        self.inner
    }
}

pub struct DepositMoneyBuilder {
    inner: DepositMoney,
}

#[allow(dead_code)]
impl DepositMoneyBuilder {
    pub fn new() -> Self {
        Self {
            inner: DepositMoney {
                transaction_id: "tx-fixed-0001".to_string(),
                amount: Decimal::new(50_000, 2),
                description: "Salary deposit".to_string(),
                deposited_by: "John Doe".to_string(),
            },
        }
    }

    pub fn transaction_id(mut self, v: impl Into<String>) -> Self {
        self.inner.transaction_id = v.into();
        self
    }

    pub fn amount(mut self, v: Decimal) -> Self {
        self.inner.amount = v;
        self
    }

    pub fn build(self) -> DepositMoney {
        self.inner
    }
}

pub struct WithdrawMoneyBuilder {
    inner: WithdrawMoney,
}

#[allow(dead_code)]
impl WithdrawMoneyBuilder {
    pub fn new() -> Self {
        Self {
            inner: WithdrawMoney {
                transaction_id: "tx-fixed-0002".to_string(),
                amount: Decimal::new(30_000, 2),
                description: "Grocery shopping".to_string(),
                withdrawn_by: "John Doe".to_string(),
            },
        }
    }

    pub fn amount(mut self, v: Decimal) -> Self {
        self.inner.amount = v;
        self
    }

    pub fn build(self) -> WithdrawMoney {
        self.inner
    }
}

pub struct CloseAccountBuilder {
    inner: CloseAccount,
}

#[allow(dead_code)]
impl CloseAccountBuilder {
    pub fn new() -> Self {
        Self {
            inner: CloseAccount {
                reason: "Account holder requested closure".to_string(),
                closed_by: "John Doe".to_string(),
                transfer_account_id: None,
            },
        }
    }

    pub fn transfer_account_id(mut self, v: impl Into<String>) -> Self {
        self.inner.transfer_account_id = Some(v.into());
        self
    }

    pub fn build(self) -> CloseAccount {
        self.inner
    }
}

#[cfg(test)]
mod account_command_builder_tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    fn default_delegates_to_new() {
        let built = OpenAccountBuilder::default().build();
        assert_eq!(built.holder_name, "John Doe");
        assert_eq!(built.initial_balance, dec!(1000.00));
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = OpenAccountBuilder::new()
            .holder_name("Jane Smith")
            .account_type("SAVINGS")
            .initial_balance(dec!(5000))
            .build();
        assert_eq!(custom.holder_name, "Jane Smith");
        assert_eq!(custom.account_type, "SAVINGS");
        assert_eq!(custom.initial_balance, dec!(5000));
    }
}
