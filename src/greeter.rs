//! @acp:module "Greeter"
//! @acp:summary "Formats a greeting for a single name"
//! @acp:domain cli
//! @acp:layer core
//!
//! The greeter holds one name for its whole life and renders
//! `Hello <name>!` on demand. It does no validation; callers decide
//! what counts as a usable name.

use std::fmt;

/// @acp:summary "Greets one interlocutor by name"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    subject_name: String,
}

impl Greeter {
    /// Create a greeter for `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            subject_name: name.into(),
        }
    }

    /// The name this greeter addresses
    pub fn name(&self) -> &str {
        &self.subject_name
    }

    /// @acp:summary "Render the greeting line (without trailing newline)"
    pub fn hello(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Greeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hello {}!", self.subject_name)
    }
}
