//! Soliterminal (workspace facade crate).
//!
//! Re-exports the workspace crates as `soliterminal::{types,core,input,term,save}`
//! and holds the runtime configuration shared by the binary and the tests.

pub mod config;
pub mod logging;
pub mod runner;

pub use soliterminal_core as core;
pub use soliterminal_input as input;
pub use soliterminal_save as save;
pub use soliterminal_term as term;
pub use soliterminal_types as types;
