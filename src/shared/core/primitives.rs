// Identifier generation for new entities and transactions.
//
// Decisions stay pure: handlers ask an IdGenerator for fresh ids and pass them in commands.

use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Time-ordered UUIDs (version 7), rendered hyphenated.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Ids;

impl IdGenerator for UuidV7Ids {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}
