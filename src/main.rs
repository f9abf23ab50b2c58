#![forbid(unsafe_code)]
//! Greet Command Line Interface

use std::ffi::OsString;
use std::io;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use greeter::{execute_greet, GreetError, GreetOptions};

/// Every argument is a name, including ones that look like flags.
#[derive(Parser)]
#[command(name = "greet")]
#[command(about = "Print a greeting for every name given on the command line")]
#[command(version)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Names to greet
    #[arg(value_name = "NAME", allow_hyphen_values = true, trailing_var_arg = true)]
    names: Vec<OsString>,
}

impl Cli {
    /// Parse with an escape inserted ahead of the user arguments so a
    /// leading `--` is greeted like any other name.
    fn parse_names() -> Self {
        let mut args = std::env::args_os();
        let program = args.next().unwrap_or_else(|| OsString::from("greet"));
        let argv = [program, OsString::from("--")].into_iter().chain(args);
        Self::parse_from(argv)
    }
}

/// Logs go to stderr; stdout carries only greetings. Filter comes from `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_names();
    init_logging();

    let options = GreetOptions {
        names: cli
            .names
            .iter()
            .map(|name| name.to_string_lossy().into_owned())
            .collect(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match execute_greet(options, &mut out) {
        Ok(()) => Ok(()),
        Err(GreetError::MissingArgument) => {
            eprintln!(
                "{} {}",
                style("ERROR:").red().for_stderr(),
                GreetError::MissingArgument
            );
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
