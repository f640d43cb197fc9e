//! Stable exit codes for stubgen CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, entity violations under `--strict`, or I/O errors.
pub const INVALID: i32 = 1;
/// `stubgen check` found fewer than two entities (nothing would be generated).
pub const DEGENERATE: i32 = 2;
