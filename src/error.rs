//! @acp:module "Errors"
//! @acp:summary "Error types for the greeter library"
//! @acp:domain cli
//! @acp:layer core

use thiserror::Error;

/// @acp:summary "Failures surfaced by the greet command"
#[derive(Error, Debug)]
pub enum GreetError {
    /// No name was given on the command line
    #[error("Please provide at least one name as argument.")]
    MissingArgument,

    /// Writing a greeting to the output stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GreetError>;
