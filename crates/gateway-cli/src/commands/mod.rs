//! CLI commands module.

pub mod chat;
pub mod completions;
pub mod health;
pub mod start;
