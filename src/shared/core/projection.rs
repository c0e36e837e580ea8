// Read-model contract: a view folded from facts, rebuildable from any log query.
//
// Boundaries
// - A projection never writes to the log. It may be reset and refolded at any time.

use crate::shared::core::fact::{Fact, FactPayload};

pub trait Projection<P: FactPayload> {
    fn name(&self) -> &str;

    /// Fold one fact. Applying a fact that was already seen must not change the view.
    fn apply(&mut self, fact: &Fact<P>);

    fn apply_all(&mut self, facts: &[Fact<P>]) {
        for fact in facts {
            self.apply(fact);
        }
    }

    fn reset(&mut self);
}
