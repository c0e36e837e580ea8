// Account balance read model.
//
// Purpose
// - Keep one row per account with its latest balance, folded from account facts.
//
// Responsibilities
// - Idempotent per account: a fact at or below the row's last_version is ignored.
// - Totals only count accounts that are still open.
// - Facts for an account whose opening was never seen are skipped.

use crate::modules::accounts::core::events::AccountEvent;
use crate::shared::core::fact::Fact;
use crate::shared::core::projection::Projection;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountBalanceRow {
    pub account_id: String,
    pub holder_name: String,
    pub account_type: String,
    pub currency: String,
    pub balance: Decimal,
    pub closed: bool,
    pub last_version: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountBalanceProjection {
    rows: BTreeMap<String, AccountBalanceRow>,
}

impl AccountBalanceProjection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self, account_id: &str) -> Option<&AccountBalanceRow> {
        self.rows.get(account_id)
    }

    pub fn rows(&self) -> impl Iterator<Item = &AccountBalanceRow> {
        self.rows.values()
    }

    pub fn balance(&self, account_id: &str) -> Option<Decimal> {
        self.rows.get(account_id).map(|row| row.balance)
    }

    pub fn total_balance(&self) -> Decimal {
        self.open_rows().map(|row| row.balance).sum()
    }

    pub fn total_balance_by_type(&self) -> BTreeMap<String, Decimal> {
        let mut totals = BTreeMap::new();
        for row in self.open_rows() {
            *totals
                .entry(row.account_type.clone())
                .or_insert(Decimal::ZERO) += row.balance;
        }
        totals
    }

    /// Number of open accounts per account type.
    pub fn account_count_by_type(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for row in self.open_rows() {
            *counts.entry(row.account_type.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// No account has a negative balance.
    pub fn is_valid(&self) -> bool {
        self.rows.values().all(|row| row.balance >= Decimal::ZERO)
    }

    fn open_rows(&self) -> impl Iterator<Item = &AccountBalanceRow> {
        self.rows.values().filter(|row| !row.closed)
    }
}

impl Projection<AccountEvent> for AccountBalanceProjection {
    fn name(&self) -> &str {
        "account_balances"
    }

    fn apply(&mut self, fact: &Fact<AccountEvent>) {
        let version = fact.entity_version();
        if let AccountEvent::AccountOpenedV1(opened) = fact.payload() {
            if !self.rows.contains_key(fact.entity_id()) {
                self.rows.insert(
                    fact.entity_id().to_string(),
                    AccountBalanceRow {
                        account_id: fact.entity_id().to_string(),
                        holder_name: opened.holder_name.clone(),
                        account_type: opened.account_type.clone(),
                        currency: opened.currency.clone(),
                        balance: opened.initial_balance,
                        closed: false,
                        last_version: version,
                    },
                );
            }
            return;
        }

        let Some(row) = self.rows.get_mut(fact.entity_id()) else {
            tracing::debug!(
                entity_id = fact.entity_id(),
                kind = fact.kind(),
                "skipping fact of an account not opened in this projection"
            );
            return;
        };
        if version <= row.last_version {
            return;
        }
        match fact.payload() {
            AccountEvent::AccountOpenedV1(_) | AccountEvent::Unknown => {}
            AccountEvent::MoneyDepositedV1(deposited) => row.balance = deposited.new_balance,
            AccountEvent::MoneyWithdrawnV1(withdrawn) => row.balance = withdrawn.new_balance,
            AccountEvent::AccountClosedV1(closed) => {
                row.balance = closed.final_balance;
                row.closed = true;
            }
        }
        row.last_version = version;
    }

    fn reset(&mut self) {
        self.rows.clear();
    }
}
