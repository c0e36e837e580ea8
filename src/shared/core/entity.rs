// Entity engine: derived state as a pure function of applied facts.
//
// Purpose
// - Share apply/replay logic between every entity kind.
// - Hold the facts created by business operations until the caller has appended them.
//
// Responsibilities
// - `replay` rebuilds state from stored facts and never creates pending facts.
// - `apply_new` and `record` apply a fresh fact through the same dispatch and keep it pending.
// - `version` always equals the entity_version of the last applied fact (0 if none).
//
// Boundaries
// - No input or output. Persisting pending facts is the caller's job (see EntityRepository).
// - Not shared between tasks: one logical caller owns an instance at a time.

use crate::shared::core::errors::ValidationError;
use crate::shared::core::fact::{Fact, FactPayload};
use std::fmt::Debug;

/// Derived state of one entity kind together with its fact dispatcher.
///
/// `evolve` must be pure and exhaustive over the payload enum. The reserved
/// catch-all variant for unknown kinds returns the state unchanged.
pub trait EntityState: Default + Clone + Debug + PartialEq + Send + Sync + 'static {
    type Payload: FactPayload;

    fn evolve(self, fact: &Fact<Self::Payload>) -> Self;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity<S: EntityState> {
    id: String,
    version: u64,
    pending: Vec<Fact<S::Payload>>,
    state: S,
}

impl<S: EntityState> Entity<S> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: 0,
            pending: Vec::new(),
            state: S::default(),
        }
    }

    /// Rebuild an entity from its stored facts, in entity_version order.
    pub fn replay(id: impl Into<String>, facts: &[Fact<S::Payload>]) -> Self {
        let mut entity = Self::new(id);
        for fact in facts {
            entity.apply(fact.clone(), false);
        }
        entity
    }

    /// Apply a freshly created fact and keep it pending.
    ///
    /// The fact must belong to this entity and carry `version + 1`.
    pub fn apply_new(&mut self, fact: Fact<S::Payload>) -> Result<(), ValidationError> {
        if fact.entity_id() != self.id {
            return Err(ValidationError::EntityMismatch {
                fact_id: fact.id(),
                expected: self.id.clone(),
                found: fact.entity_id().to_string(),
            });
        }
        let expected = self.version + 1;
        if fact.entity_version() != expected {
            return Err(ValidationError::VersionOutOfSequence {
                entity_id: self.id.clone(),
                expected,
                found: fact.entity_version(),
            });
        }
        self.apply(fact, true);
        Ok(())
    }

    /// Create the next fact for `payload` and apply it as new.
    pub fn record(&mut self, payload: S::Payload) -> &Fact<S::Payload> {
        let fact = Fact::new(self.id.clone(), self.version + 1, payload);
        self.apply(fact, true);
        &self.pending[self.pending.len() - 1]
    }

    fn apply(&mut self, fact: Fact<S::Payload>, is_new: bool) {
        let state = std::mem::take(&mut self.state);
        self.state = state.evolve(&fact);
        self.version = fact.entity_version();
        if is_new {
            self.pending.push(fact);
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn pending(&self) -> &[Fact<S::Payload>] {
        &self.pending
    }

    /// Copy of the pending facts, to hand to `FactLog::append`.
    pub fn take_pending(&self) -> Vec<Fact<S::Payload>> {
        self.pending.clone()
    }

    /// Forget pending facts. Call only once they have been appended.
    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    /// The stored version this entity was loaded at, before any pending fact.
    ///
    /// `None` means nothing has been stored for this entity yet.
    pub fn expected_version(&self) -> Option<u64> {
        let stored = self.version - self.pending.len() as u64;
        (stored > 0).then_some(stored)
    }
}

#[cfg(test)]
mod entity_engine_tests {
    use super::*;
    use crate::tests::fixtures::facts::{CounterEvent, CounterState, counter_history};
    use rstest::{fixture, rstest};

    type Counter = Entity<CounterState>;

    #[fixture]
    fn history() -> Vec<Fact<CounterEvent>> {
        counter_history("counter-1")
    }

    #[rstest]
    fn it_should_start_empty_at_version_zero() {
        let counter = Counter::new("counter-1");
        assert_eq!(counter.version(), 0);
        assert_eq!(counter.state(), &CounterState::default());
        assert!(counter.pending().is_empty());
        assert_eq!(counter.expected_version(), None);
    }

    #[rstest]
    fn it_should_replay_the_history_without_pending_facts(history: Vec<Fact<CounterEvent>>) {
        let counter = Counter::replay("counter-1", &history);
        assert_eq!(counter.version(), 4);
        assert_eq!(counter.state().total, 7);
        assert_eq!(counter.state().resets, 1);
        assert!(counter.pending().is_empty());
        assert_eq!(counter.expected_version(), Some(4));
    }

    #[rstest]
    fn it_should_replay_deterministically(history: Vec<Fact<CounterEvent>>) {
        let first = Counter::replay("counter-1", &history);
        let second = Counter::replay("counter-1", &history);
        assert_eq!(first, second);
    }

    #[rstest]
    fn it_should_track_the_version_of_the_last_replayed_fact(history: Vec<Fact<CounterEvent>>) {
        for n in 1..=history.len() {
            let counter = Counter::replay("counter-1", &history[..n]);
            assert_eq!(counter.version(), history[n - 1].entity_version());
        }
    }

    #[rstest]
    fn it_should_ignore_unknown_kinds_on_replay() {
        let facts = vec![
            Fact::new("counter-1", 1, CounterEvent::Incremented { by: 3 }),
            Fact::new("counter-1", 2, CounterEvent::Unknown),
        ];
        let counter = Counter::replay("counter-1", &facts);
        assert_eq!(counter.state().total, 3);
        assert_eq!(counter.version(), 2);
    }

    #[rstest]
    fn it_should_record_a_new_fact_as_pending(history: Vec<Fact<CounterEvent>>) {
        let mut counter = Counter::replay("counter-1", &history);
        let fact = counter.record(CounterEvent::Incremented { by: 10 }).clone();

        assert_eq!(fact.entity_version(), 5);
        assert_eq!(fact.entity_id(), "counter-1");
        assert_eq!(counter.version(), 5);
        assert_eq!(counter.state().total, 17);
        assert_eq!(counter.pending(), &[fact]);
        assert_eq!(counter.expected_version(), Some(4));
    }

    #[rstest]
    fn it_should_apply_a_new_fact_that_continues_the_entity() {
        let mut counter = Counter::new("counter-1");
        let fact = Fact::new("counter-1", 1, CounterEvent::Incremented { by: 1 });
        counter.apply_new(fact.clone()).expect("expected the fact to apply");
        assert_eq!(counter.version(), 1);
        assert_eq!(counter.take_pending(), vec![fact]);
        assert_eq!(counter.expected_version(), None);
    }

    #[rstest]
    fn it_should_reject_a_new_fact_with_a_gap(history: Vec<Fact<CounterEvent>>) {
        let mut counter = Counter::replay("counter-1", &history);
        let before = counter.clone();
        let result = counter.apply_new(Fact::new("counter-1", 6, CounterEvent::Reset));
        assert_eq!(
            result,
            Err(ValidationError::VersionOutOfSequence {
                entity_id: "counter-1".to_string(),
                expected: 5,
                found: 6,
            })
        );
        assert_eq!(counter, before);
    }

    #[rstest]
    fn it_should_reject_a_new_fact_of_another_entity() {
        let mut counter = Counter::new("counter-1");
        let result = counter.apply_new(Fact::new("counter-2", 1, CounterEvent::Reset));
        assert!(matches!(
            result,
            Err(ValidationError::EntityMismatch { ref found, .. }) if found == "counter-2"
        ));
        assert_eq!(counter.version(), 0);
    }

    #[rstest]
    fn it_should_keep_pending_facts_until_cleared() {
        let mut counter = Counter::new("counter-1");
        counter.record(CounterEvent::Incremented { by: 1 });
        counter.record(CounterEvent::Incremented { by: 2 });

        let pending = counter.take_pending();
        assert_eq!(pending.len(), 2);
        assert_eq!(counter.pending().len(), 2);
        assert_eq!(
            pending.iter().map(Fact::entity_version).collect::<Vec<_>>(),
            vec![1, 2]
        );

        counter.clear_pending();
        assert!(counter.pending().is_empty());
        assert_eq!(counter.version(), 2);
        assert_eq!(counter.expected_version(), Some(2));
    }
}
