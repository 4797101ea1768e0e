// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod naming;
pub mod writer;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use self::cli::{Cli, VERSION_INFO};
use self::config::resolve_config;
use self::models::Mode;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args (usage errors surface through the normal error path)
    let args = Cli::try_parse()?;

    // 2. Resolve Configuration
    let config = resolve_config(args)?;

    // 3. Dispatch on mode
    match config.mode {
        Mode::Help => {
            Cli::command().print_help()?;
        }
        Mode::Version => {
            println!("{}", VERSION_INFO);
        }
        Mode::Process => {
            writer::process_file(&config)?;
        }
    }

    Ok(())
}

/// Prints a one-line diagnostic prefixed with the invocation name.
pub fn report_error(program_name: &str, err: &anyhow::Error) {
    eprintln!("{}: {}", program_name, error_message(err));
}

fn error_message(err: &anyhow::Error) -> String {
    // clap already renders its own cause chain
    let message = match err.downcast_ref::<clap::Error>() {
        Some(usage) => usage.to_string(),
        None => format!("{:#}", err),
    };
    message.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn usage_error_cause_is_not_repeated() {
        let err: anyhow::Error = Cli::try_parse_from(["filetoarray", "-i", "x", "d.bin"])
            .unwrap_err()
            .into();
        let message = error_message(&err);
        assert!(message.contains("invalid value 'x'"));
        assert_eq!(message.matches("invalid digit found in string").count(), 1);
    }

    #[test]
    fn io_error_keeps_its_cause() {
        let err = std::fs::File::open("/nonexistent/blob.bin")
            .context("cannot find /nonexistent/blob.bin")
            .unwrap_err();
        let message = error_message(&err);
        assert!(message.starts_with("cannot find /nonexistent/blob.bin: "));
        assert!(!message.ends_with('\n'));
    }
}
