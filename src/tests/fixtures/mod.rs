// Shared test fixtures. Compiled only for unit tests.

pub mod commands;
pub mod facts;
pub mod states;
