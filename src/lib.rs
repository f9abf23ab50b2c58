#![forbid(unsafe_code)]

//! @acp:module "Greeter Library"
//! @acp:summary "Greeting formatter and the command that drives it"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # Greeter
//!
//! A tiny library that formats `Hello <name>!` lines, plus the `greet`
//! command used by the CLI binary.
//!
//! ## Example
//!
//! ```rust
//! use greeter::Greeter;
//!
//! let greeter = Greeter::new("World");
//! assert_eq!(greeter.hello(), "Hello World!");
//! ```

pub mod commands;
pub mod error;
pub mod greeter;

// Re-exports
pub use commands::{execute_greet, GreetOptions};
pub use error::{GreetError, Result};
pub use greeter::Greeter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
