// Fact log port: the append-only authority for fact ordering.
//
// Purpose
// - Describe what the core needs from a fact store, without implementing it.
//
// Responsibilities
// - append is atomic and enforces optimistic concurrency through `expected_version`.
// - Queries return facts per entity in entity_version order, or across entities in global order.
//
// Boundaries
// - Versions are Option<u64>: None means no fact has been stored for the entity yet.
// - The log never retries a conflicting append. That decision belongs to the caller.
//
// Testing guidance
// - InMemoryFactLog is the reference implementation and is shared across tasks with Arc.

pub mod in_memory;

use crate::shared::core::errors::ValidationError;
use crate::shared::core::fact::{Fact, FactPayload};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FactLogError {
    #[error(
        "version mismatch for {entity_id}: expected {}, actual {}",
        describe_version(.expected),
        describe_version(.actual)
    )]
    VersionMismatch {
        entity_id: String,
        expected: Option<u64>,
        actual: Option<u64>,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

fn describe_version(version: &Option<u64>) -> String {
    match version {
        Some(v) => v.to_string(),
        None => "none".to_string(),
    }
}

/// A fact as recorded by the log, with its position in the total order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFact<P> {
    pub fact: Fact<P>,
    pub global_sequence: u64,
    pub stored_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogStats {
    pub total_facts: usize,
    pub total_entities: usize,
    pub facts_per_entity: BTreeMap<String, usize>,
}

#[async_trait]
pub trait FactLog<P: FactPayload>: Send + Sync {
    async fn append(
        &self,
        entity_id: &str,
        expected_version: Option<u64>,
        facts: &[Fact<P>],
    ) -> Result<(), FactLogError>;

    async fn get(&self, entity_id: &str) -> Vec<Fact<P>>;

    /// Facts with `entity_version > version`.
    async fn get_from_version(&self, entity_id: &str, version: u64) -> Vec<Fact<P>>;

    /// Facts with `entity_version` in `[from, to]`.
    async fn get_in_range(&self, entity_id: &str, from: u64, to: u64) -> Vec<Fact<P>>;

    async fn current_version(&self, entity_id: &str) -> Option<u64>;

    /// Every fact, in global order.
    async fn get_all(&self) -> Vec<Fact<P>>;

    /// Facts that occurred at or after `from`, in global order.
    async fn get_from_time(&self, from: DateTime<Utc>) -> Vec<Fact<P>>;

    async fn exists(&self, entity_id: &str) -> bool;

    async fn stats(&self) -> LogStats;
}
