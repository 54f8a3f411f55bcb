//! Terminal starfield (workspace facade crate).
//!
//! This package exposes `starfield::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use starfield_core as core;
pub use starfield_input as input;
pub use starfield_term as term;
pub use starfield_types as types;
