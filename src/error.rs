//! Error types for the refract parsing pipeline.

use thiserror::Error;

use crate::opt::Opt;

/// Errors surfaced while parsing an argument vector.
#[derive(Error, Debug)]
pub enum Error {
    /// An argument named an option the matched command does not declare
    #[error("Unknown option {0}")]
    UnknownOption(String),

    /// The final argument was an option name with no value token after it
    #[error("Missing value for option {0}")]
    MissingValue(String),

    /// Required options that received no value during parsing
    #[error("Required options missing: {}", join_names(.0))]
    MissingRequired(Vec<Opt>),
}

/// Result type alias for parsing operations
pub type Result<T> = std::result::Result<T, Error>;

fn join_names(opts: &[Opt]) -> String {
    opts.iter().map(|o| o.name()).collect::<Vec<_>>().join(", ")
}
