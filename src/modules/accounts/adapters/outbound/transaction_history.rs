// Transaction history read model: one record per account fact, queryable for statements.
//
// Openings and closures are recorded too, under the synthetic ids
// `ACCOUNT_OPENED_<account>` and `ACCOUNT_CLOSED_<account>`.
// A record whose transaction id is already present is ignored.

use crate::modules::accounts::core::events::AccountEvent;
use crate::shared::core::fact::Fact;
use crate::shared::core::projection::Projection;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    AccountOpened,
    Deposit,
    Withdrawal,
    AccountClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    pub transaction_id: String,
    pub account_id: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub balance_after: Decimal,
    pub description: String,
    pub performed_by: String,
    pub occurred_at: DateTime<Utc>,
    pub entity_version: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionHistoryProjection {
    records: Vec<TransactionRecord>,
    by_account: HashMap<String, Vec<usize>>,
    by_id: HashMap<String, usize>,
}

impl TransactionHistoryProjection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_account(&self, account_id: &str) -> Vec<&TransactionRecord> {
        self.by_account
            .get(account_id)
            .map(|indexes| indexes.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    /// Records of one account that occurred in `[from, to]`.
    pub fn for_account_between(
        &self,
        account_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Vec<&TransactionRecord> {
        self.for_account(account_id)
            .into_iter()
            .filter(|record| (from..=to).contains(&record.occurred_at))
            .collect()
    }

    pub fn by_id(&self, transaction_id: &str) -> Option<&TransactionRecord> {
        self.by_id.get(transaction_id).map(|&i| &self.records[i])
    }

    pub fn by_kind(&self, kind: TransactionKind) -> Vec<&TransactionRecord> {
        self.records.iter().filter(|record| record.kind == kind).collect()
    }

    /// Records of every account that occurred in `[from, to]`.
    pub fn between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<&TransactionRecord> {
        self.records
            .iter()
            .filter(|record| (from..=to).contains(&record.occurred_at))
            .collect()
    }

    pub fn total_deposits(&self, account_id: &str) -> Decimal {
        self.total_of(account_id, TransactionKind::Deposit)
    }

    pub fn total_withdrawals(&self, account_id: &str) -> Decimal {
        self.total_of(account_id, TransactionKind::Withdrawal)
    }

    pub fn count_for_account(&self, account_id: &str) -> usize {
        self.by_account.get(account_id).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every recorded amount is non-negative.
    pub fn is_valid(&self) -> bool {
        self.records.iter().all(|record| record.amount >= Decimal::ZERO)
    }

    fn total_of(&self, account_id: &str, kind: TransactionKind) -> Decimal {
        self.for_account(account_id)
            .into_iter()
            .filter(|record| record.kind == kind)
            .map(|record| record.amount)
            .sum()
    }

    fn record(&mut self, record: TransactionRecord) {
        if self.by_id.contains_key(&record.transaction_id) {
            return;
        }
        let index = self.records.len();
        self.by_account
            .entry(record.account_id.clone())
            .or_default()
            .push(index);
        self.by_id.insert(record.transaction_id.clone(), index);
        self.records.push(record);
    }
}

impl Projection<AccountEvent> for TransactionHistoryProjection {
    fn name(&self) -> &str {
        "transaction_history"
    }

    fn apply(&mut self, fact: &Fact<AccountEvent>) {
        let account_id = fact.entity_id().to_string();
        let (transaction_id, kind, amount, balance_after, description, performed_by) =
            match fact.payload() {
                AccountEvent::AccountOpenedV1(opened) => (
                    format!("ACCOUNT_OPENED_{account_id}"),
                    TransactionKind::AccountOpened,
                    opened.initial_balance,
                    opened.initial_balance,
                    "Account opened".to_string(),
                    opened.holder_name.clone(),
                ),
                AccountEvent::MoneyDepositedV1(deposited) => (
                    deposited.transaction_id.clone(),
                    TransactionKind::Deposit,
                    deposited.amount,
                    deposited.new_balance,
                    deposited.description.clone(),
                    deposited.deposited_by.clone(),
                ),
                AccountEvent::MoneyWithdrawnV1(withdrawn) => (
                    withdrawn.transaction_id.clone(),
                    TransactionKind::Withdrawal,
                    withdrawn.amount,
                    withdrawn.new_balance,
                    withdrawn.description.clone(),
                    withdrawn.withdrawn_by.clone(),
                ),
                AccountEvent::AccountClosedV1(closed) => (
                    format!("ACCOUNT_CLOSED_{account_id}"),
                    TransactionKind::AccountClosed,
                    Decimal::ZERO,
                    closed.final_balance,
                    format!("Account closed: {}", closed.reason),
                    closed.closed_by.clone(),
                ),
                AccountEvent::Unknown => return,
            };
        self.record(TransactionRecord {
            transaction_id,
            account_id,
            kind,
            amount,
            balance_after,
            description,
            performed_by,
            occurred_at: fact.occurred_at(),
            entity_version: fact.entity_version(),
        });
    }

    fn reset(&mut self) {
        self.records.clear();
        self.by_account.clear();
        self.by_id.clear();
    }
}
