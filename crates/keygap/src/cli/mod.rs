//! CLI support for the `keygap` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod input;
pub mod output;

pub use context::CommandContext;
