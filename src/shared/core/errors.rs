// Validation errors shared by the entity engine and the fact log.
//
// Purpose
// - Signal a caller defect: a batch or a fact that can never be valid, whatever the timing.
//
// Boundaries
// - Never retried. A concurrency conflict is not a validation error, see FactLogError.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("fact batch must not be empty")]
    EmptyBatch,

    #[error("fact {fact_id} belongs to entity {found}, but was submitted for {expected}")]
    EntityMismatch {
        fact_id: Uuid,
        expected: String,
        found: String,
    },

    #[error("fact for entity {entity_id} has version {found}, expected {expected}")]
    VersionOutOfSequence {
        entity_id: String,
        expected: u64,
        found: u64,
    },
}
