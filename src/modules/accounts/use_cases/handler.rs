// Command handler for bank accounts.
//
// Purpose
// - Orchestrate load -> decide -> record -> save for every account operation.
//
// Responsibilities
// - Generate account and transaction ids so deciders stay pure.
// - Surface business rule violations as ApplicationError::Domain, before any fact is written.
// - Retry on VersionMismatch up to `max_conflict_retries` times, reloading the account each time.
//   Validation errors are never retried.

use crate::modules::accounts::core::account::BankAccount;
use crate::modules::accounts::core::events::AccountEvent;
use crate::modules::accounts::core::state::AccountState;
use crate::modules::accounts::use_cases::close_account::command::CloseAccount;
use crate::modules::accounts::use_cases::close_account::decide::decide_close;
use crate::modules::accounts::use_cases::decision::{DecideError, Decision};
use crate::modules::accounts::use_cases::deposit_money::command::DepositMoney;
use crate::modules::accounts::use_cases::deposit_money::decide::decide_deposit;
use crate::modules::accounts::use_cases::open_account::command::OpenAccount;
use crate::modules::accounts::use_cases::open_account::decide::decide_open;
use crate::modules::accounts::use_cases::withdraw_money::command::WithdrawMoney;
use crate::modules::accounts::use_cases::withdraw_money::decide::decide_withdraw;
use crate::shared::core::errors::ValidationError;
use crate::shared::core::primitives::IdGenerator;
use crate::shared::infrastructure::fact_log::{FactLog, FactLogError};
use crate::shared::infrastructure::repository::EntityRepository;
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    /// Always a `FactLogError::VersionMismatch`. Recoverable by reloading.
    #[error(transparent)]
    VersionConflict(FactLogError),

    /// A malformed batch reached the log. Never retried.
    #[error("invalid append: {0}")]
    Validation(#[from] ValidationError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),
}

impl From<FactLogError> for ApplicationError {
    fn from(err: FactLogError) -> Self {
        match err {
            FactLogError::Validation(invalid) => ApplicationError::Validation(invalid),
            conflict @ FactLogError::VersionMismatch { .. } => {
                ApplicationError::VersionConflict(conflict)
            }
        }
    }
}

pub struct AccountCommandHandler<L>
where
    L: FactLog<AccountEvent> + 'static,
{
    repository: EntityRepository<AccountState, L>,
    ids: Arc<dyn IdGenerator>,
    max_conflict_retries: u32,
}

impl<L> AccountCommandHandler<L>
where
    L: FactLog<AccountEvent> + 'static,
{
    /// A handler that surfaces the first conflict without retrying.
    pub fn new(log: Arc<L>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            repository: EntityRepository::new(log),
            ids,
            max_conflict_retries: 0,
        }
    }

    pub fn with_max_conflict_retries(mut self, retries: u32) -> Self {
        self.max_conflict_retries = retries;
        self
    }

    /// Open a new account and return its id.
    pub async fn open(&self, command: OpenAccount) -> Result<String, ApplicationError> {
        let account_id = self.ids.next_id();
        self.execute(&account_id, |state| decide_open(state, command.clone()))
            .await?;
        tracing::info!(account_id = %account_id, "account opened");
        Ok(account_id)
    }

    /// Deposit money and return the transaction id.
    pub async fn deposit(
        &self,
        account_id: &str,
        amount: Decimal,
        description: impl Into<String>,
        deposited_by: impl Into<String>,
    ) -> Result<String, ApplicationError> {
        let command = DepositMoney {
            transaction_id: self.ids.next_id(),
            amount,
            description: description.into(),
            deposited_by: deposited_by.into(),
        };
        self.execute(account_id, |state| decide_deposit(state, command.clone()))
            .await?;
        Ok(command.transaction_id)
    }

    /// Withdraw money and return the transaction id.
    pub async fn withdraw(
        &self,
        account_id: &str,
        amount: Decimal,
        description: impl Into<String>,
        withdrawn_by: impl Into<String>,
    ) -> Result<String, ApplicationError> {
        let command = WithdrawMoney {
            transaction_id: self.ids.next_id(),
            amount,
            description: description.into(),
            withdrawn_by: withdrawn_by.into(),
        };
        self.execute(account_id, |state| decide_withdraw(state, command.clone()))
            .await?;
        Ok(command.transaction_id)
    }

    pub async fn close(
        &self,
        account_id: &str,
        reason: impl Into<String>,
        closed_by: impl Into<String>,
        transfer_account_id: Option<String>,
    ) -> Result<(), ApplicationError> {
        let command = CloseAccount {
            reason: reason.into(),
            closed_by: closed_by.into(),
            transfer_account_id,
        };
        self.execute(account_id, |state| decide_close(state, command.clone()))
            .await?;
        Ok(())
    }

    pub async fn load(&self, account_id: &str) -> BankAccount {
        self.repository.load(account_id).await
    }

    async fn execute<F>(
        &self,
        account_id: &str,
        decide: F,
    ) -> Result<BankAccount, ApplicationError>
    where
        F: Fn(&AccountState) -> Decision + Send + Sync,
    {
        let mut conflicts = 0;
        loop {
            let mut account = self.repository.load(account_id).await;
            decide(account.state()).apply_to(&mut account)?;
            match self.repository.save(&mut account).await {
                Ok(()) => return Ok(account),
                Err(FactLogError::VersionMismatch {
                    expected, actual, ..
                }) if conflicts < self.max_conflict_retries => {
                    conflicts += 1;
                    tracing::warn!(
                        entity_id = account_id,
                        expected = ?expected,
                        actual = ?actual,
                        attempt = conflicts,
                        "version conflict, reloading and retrying"
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
