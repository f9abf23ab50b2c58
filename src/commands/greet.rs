//! @acp:module "Greet Command"
//! @acp:summary "Write one greeting line per requested name"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Write;

use crate::error::{GreetError, Result};
use crate::greeter::Greeter;

/// Options for the greet command
#[derive(Debug, Clone, Default)]
pub struct GreetOptions {
    /// Names to greet, in output order
    pub names: Vec<String>,
}

/// Execute the greet command
///
/// Fails with [`GreetError::MissingArgument`] before writing anything when
/// `names` is empty. Names are greeted in order and duplicates are kept.
pub fn execute_greet<W: Write>(options: GreetOptions, out: &mut W) -> Result<()> {
    if options.names.is_empty() {
        return Err(GreetError::MissingArgument);
    }

    for name in options.names {
        let greeter = Greeter::new(name);
        tracing::debug!(name = greeter.name(), "greeting");
        writeln!(out, "{}", greeter.hello())?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn run(names: &[&str]) -> (Result<()>, String) {
        let options = GreetOptions {
            names: names.iter().map(|n| n.to_string()).collect(),
        };
        let mut out = Vec::new();
        let result = execute_greet(options, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_single_name() {
        let (result, output) = run(&["World"]);
        assert!(result.is_ok());
        assert_eq!(output, "Hello World!\n");
    }

    #[test]
    fn test_names_keep_argument_order() {
        let (result, output) = run(&["Alice", "Bob"]);
        assert!(result.is_ok());
        assert_eq!(output, "Hello Alice!\nHello Bob!\n");
    }

    #[test]
    fn test_duplicates_are_not_collapsed() {
        let (result, output) = run(&["Bob", "Bob"]);
        assert!(result.is_ok());
        assert_eq!(output, "Hello Bob!\nHello Bob!\n");
    }

    #[test]
    fn test_no_names_is_missing_argument() {
        let (result, output) = run(&[]);
        assert!(matches!(result, Err(GreetError::MissingArgument)));
        assert!(output.is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let options = GreetOptions {
            names: vec!["World".to_string()],
        };
        let result = execute_greet(options, &mut BrokenPipe);
        assert!(matches!(result, Err(GreetError::Io(_))));
    }
}
