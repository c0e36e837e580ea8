// Fact envelope: one immutable state transition of one entity.
//
// Purpose
// - Carry the envelope every fact shares (id, entity, version, time) around a closed payload enum.
//
// Responsibilities
// - Offer exactly two ways to build a fact: fresh (`new`) and loaded from a store
//   (`reconstructed`).
// - Expose fields read-only. A fact never changes after construction.
//
// Versioning and evolution
// - Payload enums reserve one catch-all variant for kinds written by newer schema versions.

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub type FactId = Uuid;

/// Payload of a fact: a closed set of variants with a stable kind tag per variant.
pub trait FactPayload: Clone + Send + Sync + 'static {
    fn kind(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact<P> {
    id: FactId,
    entity_id: String,
    entity_version: u64,
    occurred_at: DateTime<Utc>,
    sequence_in_entity: u64,
    payload: P,
}

impl<P: FactPayload> Fact<P> {
    /// A fresh fact: new identifier, occurred now. `entity_version` is the
    /// entity's version once this fact is applied.
    pub fn new(entity_id: impl Into<String>, entity_version: u64, payload: P) -> Self {
        Self {
            id: Uuid::now_v7(),
            entity_id: entity_id.into(),
            entity_version,
            occurred_at: Utc::now(),
            sequence_in_entity: entity_version,
            payload,
        }
    }

    /// A fact loaded back from a store, every envelope field given explicitly.
    pub fn reconstructed(
        id: FactId,
        entity_id: impl Into<String>,
        entity_version: u64,
        occurred_at: DateTime<Utc>,
        sequence_in_entity: u64,
        payload: P,
    ) -> Self {
        Self {
            id,
            entity_id: entity_id.into(),
            entity_version,
            occurred_at,
            sequence_in_entity,
            payload,
        }
    }

    pub fn id(&self) -> FactId {
        self.id
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn entity_version(&self) -> u64 {
        self.entity_version
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn sequence_in_entity(&self) -> u64 {
        self.sequence_in_entity
    }

    pub fn kind(&self) -> &'static str {
        self.payload.kind()
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }
}
