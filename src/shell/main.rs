use anyhow::Context;
use chrono::Utc;
use fact_ledger::modules::accounts::adapters::outbound::projections::AccountBalanceProjection;
use fact_ledger::modules::accounts::adapters::outbound::transaction_history::{
    TransactionHistoryProjection, TransactionKind,
};
use fact_ledger::modules::accounts::core::account::BankAccount;
use fact_ledger::modules::accounts::core::events::AccountEvent;
use fact_ledger::modules::accounts::use_cases::handler::{AccountCommandHandler, ApplicationError};
use fact_ledger::modules::accounts::use_cases::open_account::command::OpenAccount;
use fact_ledger::shared::core::primitives::UuidV7Ids;
use fact_ledger::shared::core::projection::Projection;
use fact_ledger::shared::infrastructure::fact_log::FactLog;
use fact_ledger::shared::infrastructure::fact_log::in_memory::InMemoryFactLog;
use fact_ledger::shell::config::ShellConfig;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ShellConfig::from_env().context("loading shell configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_target(true)
        .init();

    info!(
        currency = config.currency,
        opening_balance = %config.opening_balance,
        concurrent_writers = config.concurrent_writers,
        max_conflict_retries = config.max_conflict_retries,
        "configuration loaded"
    );

    let log = Arc::new(InMemoryFactLog::<AccountEvent>::new());
    let handler = Arc::new(
        AccountCommandHandler::new(Arc::clone(&log), Arc::new(UuidV7Ids))
            .with_max_conflict_retries(config.max_conflict_retries),
    );

    let checking = handler
        .open(OpenAccount {
            holder_name: "John Doe".to_owned(),
            account_type: "CHECKING".to_owned(),
            initial_balance: config.opening_balance,
            currency: config.currency.clone(),
        })
        .await?;
    let savings = handler
        .open(OpenAccount {
            holder_name: "Jane Roe".to_owned(),
            account_type: "SAVINGS".to_owned(),
            initial_balance: Decimal::ZERO,
            currency: config.currency.clone(),
        })
        .await?;

    let since = Utc::now();

    let mut writers = Vec::with_capacity(config.concurrent_writers);
    for writer in 0..config.concurrent_writers {
        let handler = Arc::clone(&handler);
        let account_id = checking.clone();
        writers.push(tokio::spawn(async move {
            handler
                .deposit(
                    &account_id,
                    Decimal::new(25, 0),
                    format!("deposit from writer {writer}"),
                    format!("writer-{writer}"),
                )
                .await
        }));
    }
    for writer in writers {
        match writer.await.context("deposit task panicked")? {
            Ok(transaction_id) => info!(transaction_id, "deposit recorded"),
            Err(err) => warn!(error = %err, "deposit failed"),
        }
    }

    let balance = handler.load(&checking).await.state().balance();
    match handler
        .withdraw(&checking, balance + Decimal::ONE, "overdraft attempt", "John Doe")
        .await
    {
        Err(ApplicationError::Domain(reason)) => info!(%reason, "withdrawal rejected"),
        Err(err) => return Err(err.into()),
        Ok(transaction_id) => warn!(transaction_id, "overdraft unexpectedly accepted"),
    }

    handler
        .withdraw(&checking, Decimal::new(100, 0), "transfer to savings", "John Doe")
        .await?;
    handler
        .deposit(&savings, Decimal::new(100, 0), "transfer from checking", "John Doe")
        .await?;

    let replayed = BankAccount::replay(checking.as_str(), &log.get(&checking).await);
    info!(
        account_id = checking,
        version = replayed.version(),
        balance = %replayed.state().balance(),
        "account replayed"
    );

    let mut balances = AccountBalanceProjection::new();
    balances.apply_all(&log.get_all().await);
    info!(
        projection = balances.name(),
        total = %balances.total_balance(),
        valid = balances.is_valid(),
        "projection rebuilt from the full log"
    );
    for (account_type, total) in balances.total_balance_by_type() {
        info!(account_type, total = %total, "balance per account type");
    }

    let recent = log.get_from_time(since).await;
    let mut history = TransactionHistoryProjection::new();
    history.apply_all(&recent);
    info!(
        facts = recent.len(),
        since = %since,
        deposits = history.by_kind(TransactionKind::Deposit).len(),
        withdrawals = history.by_kind(TransactionKind::Withdrawal).len(),
        deposited_into_checking = %history.total_deposits(&checking),
        "transaction history since the accounts were opened"
    );

    let stats = serde_json::to_string(&log.stats().await)?;
    info!(stats, "fact log statistics");

    Ok(())
}
