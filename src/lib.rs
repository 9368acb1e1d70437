//! Command-line parsing and dispatch for subcommand-style programs.
//!
//! This crate provides the types for declaring subcommands and their named
//! options, parsing a process argument vector against those declarations,
//! and dispatching to the matched command's handler. Hosts build a
//! `Registry`, register commands with their options, and hand it the
//! process arguments.

mod error;
mod opt;
mod command;
mod registry;

// Re-export core types
pub use error::{Error, Result};
pub use opt::{Opt, OptKind};
pub use command::{Command, Handler};
pub use registry::{Outcome, Registry};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
