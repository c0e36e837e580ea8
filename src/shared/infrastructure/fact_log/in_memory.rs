// In memory implementation of the FactLog port.
//
// Purpose
// - The single-process authority for fact ordering, for the lifetime of the process.
//
// Responsibilities
// - Store facts per entity and in one total-order stream.
// - Enforce optimistic concurrency by checking the expected version inside the entity write lock.
// - Assign a strictly increasing global sequence at append time.
//
// Locking
// - One RwLock per entity stream, created lazily. The map of streams is only locked to look up,
//   insert or remove a handle, never while another lock is awaited.
// - A handle exists only for an entity with stored facts, or while its first append is running.
//   A first append that fails removes the handle it created.
// - The total stream has its own RwLock. It is only write-locked while an entity write lock is
//   held: entity first, then global. Global reads take the global lock alone.

use crate::shared::core::errors::ValidationError;
use crate::shared::core::fact::{Fact, FactPayload};
use crate::shared::infrastructure::fact_log::{FactLog, FactLogError, LogStats, StoredFact};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

type Stream<P> = Vec<Arc<StoredFact<P>>>;
type StreamHandle<P> = Arc<RwLock<Stream<P>>>;

pub struct InMemoryFactLog<P> {
    streams: RwLock<HashMap<String, StreamHandle<P>>>,
    total: RwLock<Stream<P>>,
    next_sequence: AtomicU64,
}

impl<P: FactPayload> Default for InMemoryFactLog<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FactPayload> InMemoryFactLog<P> {
    pub fn new() -> Self {
        Self {
            streams: RwLock::new(HashMap::new()),
            total: RwLock::new(Vec::new()),
            next_sequence: AtomicU64::new(0),
        }
    }

    /// The total stream with global sequence numbers and storage times.
    pub async fn stored_facts(&self) -> Vec<StoredFact<P>> {
        self.total
            .read()
            .await
            .iter()
            .map(|stored| StoredFact::clone(stored))
            .collect()
    }

    async fn stream(&self, entity_id: &str) -> Option<StreamHandle<P>> {
        self.streams.read().await.get(entity_id).cloned()
    }

    async fn stream_or_create(&self, entity_id: &str) -> StreamHandle<P> {
        if let Some(stream) = self.stream(entity_id).await {
            return stream;
        }
        self.streams
            .write()
            .await
            .entry(entity_id.to_string())
            .or_insert_with(|| Arc::new(RwLock::new(Vec::new())))
            .clone()
    }

    /// Remove a handle whose creating append failed.
    ///
    /// Handles are only cloned under the map lock, so with the map write lock held a strong
    /// count of two (the map and `stream`) means no other task can reach this stream.
    async fn discard_if_unused(&self, entity_id: &str, stream: StreamHandle<P>) {
        let mut streams = self.streams.write().await;
        let unused = streams
            .get(entity_id)
            .is_some_and(|current| Arc::ptr_eq(current, &stream))
            && Arc::strong_count(&stream) == 2
            && stream.try_read().is_ok_and(|guard| guard.is_empty());
        if unused {
            streams.remove(entity_id);
        }
    }

    /// Steps run under the entity write lock: version check, continuation check, write.
    async fn append_locked(
        &self,
        entity_id: &str,
        expected_version: Option<u64>,
        facts: &[Fact<P>],
        entity_stream: &mut Stream<P>,
    ) -> Result<(), FactLogError> {
        let current = entity_stream.last().map(|stored| stored.fact.entity_version());
        if current != expected_version {
            return Err(FactLogError::VersionMismatch {
                entity_id: entity_id.to_string(),
                expected: expected_version,
                actual: current,
            });
        }
        validate_continuation(entity_id, current, facts)?;

        let mut total_guard = self.total.write().await;
        let stored_at = Utc::now();
        let mut first_sequence = None;
        for fact in facts {
            let global_sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst);
            first_sequence.get_or_insert(global_sequence);
            let stored = Arc::new(StoredFact {
                fact: fact.clone(),
                global_sequence,
                stored_at,
            });
            entity_stream.push(Arc::clone(&stored));
            total_guard.push(stored);
        }

        tracing::debug!(
            entity_id,
            count = facts.len(),
            version = entity_stream.len(),
            first_global_sequence = first_sequence,
            "facts appended"
        );
        Ok(())
    }

    #[cfg(test)]
    async fn stream_handles(&self) -> usize {
        self.streams.read().await.len()
    }

    async fn select<F>(&self, entity_id: &str, keep: F) -> Vec<Fact<P>>
    where
        F: Fn(&Fact<P>) -> bool,
    {
        let Some(stream) = self.stream(entity_id).await else {
            return Vec::new();
        };
        let guard = stream.read().await;
        guard
            .iter()
            .filter(|stored| keep(&stored.fact))
            .map(|stored| stored.fact.clone())
            .collect()
    }
}

fn validate_batch<P: FactPayload>(
    entity_id: &str,
    facts: &[Fact<P>],
) -> Result<(), ValidationError> {
    if facts.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }
    match facts.iter().find(|fact| fact.entity_id() != entity_id) {
        Some(fact) => Err(ValidationError::EntityMismatch {
            fact_id: fact.id(),
            expected: entity_id.to_string(),
            found: fact.entity_id().to_string(),
        }),
        None => Ok(()),
    }
}

fn validate_continuation<P: FactPayload>(
    entity_id: &str,
    current: Option<u64>,
    facts: &[Fact<P>],
) -> Result<(), ValidationError> {
    let mut expected = current.unwrap_or(0);
    for fact in facts {
        expected += 1;
        if fact.entity_version() != expected {
            return Err(ValidationError::VersionOutOfSequence {
                entity_id: entity_id.to_string(),
                expected,
                found: fact.entity_version(),
            });
        }
    }
    Ok(())
}

#[async_trait::async_trait]
impl<P: FactPayload> FactLog<P> for InMemoryFactLog<P> {
    async fn append(
        &self,
        entity_id: &str,
        expected_version: Option<u64>,
        facts: &[Fact<P>],
    ) -> Result<(), FactLogError> {
        validate_batch(entity_id, facts)?;

        let stream = match self.stream(entity_id).await {
            Some(stream) => stream,
            None if expected_version.is_some() => {
                return Err(FactLogError::VersionMismatch {
                    entity_id: entity_id.to_string(),
                    expected: expected_version,
                    actual: None,
                });
            }
            None => self.stream_or_create(entity_id).await,
        };

        let mut entity_guard = stream.write().await;
        let result = self
            .append_locked(entity_id, expected_version, facts, &mut entity_guard)
            .await;
        if result.is_err() && entity_guard.is_empty() {
            drop(entity_guard);
            self.discard_if_unused(entity_id, stream).await;
        }
        result
    }

    async fn get(&self, entity_id: &str) -> Vec<Fact<P>> {
        self.select(entity_id, |_| true).await
    }

    async fn get_from_version(&self, entity_id: &str, version: u64) -> Vec<Fact<P>> {
        self.select(entity_id, |fact| fact.entity_version() > version)
            .await
    }

    async fn get_in_range(&self, entity_id: &str, from: u64, to: u64) -> Vec<Fact<P>> {
        self.select(entity_id, |fact| {
            (from..=to).contains(&fact.entity_version())
        })
        .await
    }

    async fn current_version(&self, entity_id: &str) -> Option<u64> {
        let stream = self.stream(entity_id).await?;
        let guard = stream.read().await;
        guard.last().map(|stored| stored.fact.entity_version())
    }

    async fn get_all(&self) -> Vec<Fact<P>> {
        self.total
            .read()
            .await
            .iter()
            .map(|stored| stored.fact.clone())
            .collect()
    }

    async fn get_from_time(&self, from: DateTime<Utc>) -> Vec<Fact<P>> {
        self.total
            .read()
            .await
            .iter()
            .map(|stored| &stored.fact)
            .filter(|fact| fact.occurred_at() >= from)
            .cloned()
            .collect()
    }

    async fn exists(&self, entity_id: &str) -> bool {
        self.current_version(entity_id).await.is_some()
    }

    async fn stats(&self) -> LogStats {
        let guard = self.total.read().await;
        let mut facts_per_entity = std::collections::BTreeMap::new();
        for stored in guard.iter() {
            *facts_per_entity
                .entry(stored.fact.entity_id().to_string())
                .or_insert(0) += 1;
        }
        LogStats {
            total_facts: guard.len(),
            total_entities: facts_per_entity.len(),
            facts_per_entity,
        }
    }
}
