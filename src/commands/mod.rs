//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule and writes to a caller-supplied
//! sink so it can be driven from the binary or from tests.

pub mod greet;

pub use greet::{execute_greet, GreetOptions};
