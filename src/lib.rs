//! Terminal credits roll (workspace facade crate).
//!
//! This package keeps a single `tui_credits::{core,pages,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_credits_core as core;
pub use tui_credits_pages as pages;
pub use tui_credits_term as term;
pub use tui_credits_types as types;
