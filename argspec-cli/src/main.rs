mod args;
mod tool;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use argspec_core::StringComparison;
use args::Cli;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let comparison = if cli.ignore_case {
        StringComparison::OrdinalIgnoreCase
    } else {
        StringComparison::Ordinal
    };

    let tool = tool::declare(comparison)?;
    debug!(
        restrictions = tool.restrictions.len(),
        tokens = cli.tokens.len(),
        "validating argument vector"
    );

    let violations = tool
        .restrictions
        .violations(&tool.registry.matcher(), &cli.tokens);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&violations)?);
    } else if violations.is_empty() {
        println!("ok");
    } else {
        for violation in &violations {
            println!("{}", violation);
        }
    }

    if violations.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        info!(count = violations.len(), "argument vector rejected");
        Ok(ExitCode::FAILURE)
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        "argspec=debug,argspec_core=debug"
    } else {
        "argspec=warn,argspec_core=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
