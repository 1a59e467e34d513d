//! `planctl` library: the JSON wire schema and process configuration
//! backing the `planctl` binary. Split out from `main.rs` so both halves
//! are unit-testable without spawning a process.

pub mod config;
pub mod request;

pub use config::CliConfig;
pub use request::{PlanRequestDoc, PlanResponseDoc};
