//! Shared test utilities for the aide workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`env`]: [`TestEnv`], a scratch home directory plus project directory

pub mod env;

pub use env::TestEnv;
