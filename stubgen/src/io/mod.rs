//! I/O helpers for stubgen commands.

pub mod config;
pub mod render;
