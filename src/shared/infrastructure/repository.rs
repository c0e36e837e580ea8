// Entity repository: the bridge between the entity engine and a fact log.
//
// Purpose
// - Load an entity by replaying its stored facts.
// - Save an entity by appending its pending facts with the version it was loaded at.
//
// Boundaries
// - Never retries. A VersionMismatch is returned as is and the entity keeps its pending facts.

use crate::shared::core::entity::{Entity, EntityState};
use crate::shared::infrastructure::fact_log::{FactLog, FactLogError};
use std::marker::PhantomData;
use std::sync::Arc;

pub struct EntityRepository<S, L>
where
    S: EntityState,
    L: FactLog<S::Payload>,
{
    log: Arc<L>,
    _state: PhantomData<fn() -> S>,
}

impl<S, L> Clone for EntityRepository<S, L>
where
    S: EntityState,
    L: FactLog<S::Payload>,
{
    fn clone(&self) -> Self {
        Self {
            log: Arc::clone(&self.log),
            _state: PhantomData,
        }
    }
}

impl<S, L> EntityRepository<S, L>
where
    S: EntityState,
    L: FactLog<S::Payload>,
{
    pub fn new(log: Arc<L>) -> Self {
        Self {
            log,
            _state: PhantomData,
        }
    }

    pub fn log(&self) -> &Arc<L> {
        &self.log
    }

    /// Replay every stored fact of `entity_id`. An unknown id yields a blank entity at version 0.
    pub async fn load(&self, entity_id: &str) -> Entity<S> {
        let facts = self.log.get(entity_id).await;
        Entity::replay(entity_id, &facts)
    }

    pub async fn save(&self, entity: &mut Entity<S>) -> Result<(), FactLogError> {
        if entity.pending().is_empty() {
            return Ok(());
        }
        let pending = entity.take_pending();
        self.log
            .append(entity.id(), entity.expected_version(), &pending)
            .await?;
        entity.clear_pending();
        Ok(())
    }
}
