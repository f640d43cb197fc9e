//! Pairwise collision-stub generator.
//!
//! Given an ordered list of entity type names, this crate emits nested C++
//! collision-check loop skeletons for every unordered pair of entities. The
//! architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (pairing, naming, validation).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting or engine-backed operations (config files,
//!   template rendering).
//!
//! [`generate`] coordinates core logic with rendering to implement the CLI
//! commands.

pub mod core;
pub mod entities;
pub mod exit_codes;
pub mod generate;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
