// Composition root for the fact ledger.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory fact log and wire it into the account command handler (see main.rs).

pub mod config;
