use clap::{Parser, Subcommand, ValueEnum};

/// pwmeter - Password strength meter and generator.
///
/// Scores passwords with a few quick heuristics (length, case mix, digits, special characters, common-password blacklist) and suggests random strong passwords.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))] // Require at least one subcommand
#[command(propagate_version = true)] // Display version in subcommand help
pub(crate) struct CliArgs {
    #[clap(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Check the strength of a password.
    ///
    /// Prints a score, a strength label and hints on how to improve the password.
    Check(CheckArgs),

    /// Generate strong password suggestions.
    ///
    /// Each suggestion is drawn at random from letters, digits and special characters.
    Generate(GenerateArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Base arguments for subcommands that share common parameters.
#[derive(Parser, Debug)]
pub(crate) struct BaseArgs {
    /// Path to a configuration file overriding the built-in scoring tables.
    #[clap(short, long)]
    pub(crate) config_path: Option<std::path::PathBuf>,

    /// Output format.
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) output: OutputFormat,
}

/// Arguments specific to the `check` subcommand.
#[derive(Parser, Debug)]
pub(crate) struct CheckArgs {
    #[clap(flatten)] // Inherit arguments from BaseArgs
    pub(crate) base: BaseArgs,

    /// The password to check; read from standard input if omitted
    pub(crate) password: Option<String>,
}

/// Arguments specific to the `generate` subcommand.
#[derive(Parser, Debug)]
pub(crate) struct GenerateArgs {
    #[clap(flatten)] // Inherit arguments from BaseArgs
    pub(crate) base: BaseArgs,

    /// Number of suggestions to generate (defaults to `suggestion_count`, which is 5 unless configured)
    #[clap(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) count: Option<u32>,
}
