use clap::Parser;

/// Command line arguments for the argspec CLI
#[derive(Parser, Debug)]
#[command(author, version, about = "Validate arguments against the convert tool declarations")]
pub struct Cli {
    /// Compare commands without regard to case
    #[arg(long, default_value_t = false)]
    pub ignore_case: bool,

    /// Output violations as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable verbose debug output
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Argument vector to validate, given after `--`
    #[arg(last = true)]
    pub tokens: Vec<String>,
}
