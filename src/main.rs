// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use clap::Parser;
use log::{debug, error};
use std::io::{self, BufRead};
use std::process::exit;
use thiserror::Error;

use crate::cli::{CheckArgs, CliArgs, Command, GenerateArgs, OutputFormat};
use crate::config::{load_config, ConfigError};
use crate::password::Generator;
use crate::report::{render_suggestions, Report};
use crate::strength::Scorer;

mod cli;
mod config;
mod password;
mod report;
mod strength;

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read password from standard input: {0}")]
    Stdin(#[from] io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    env_logger::init();

    let args: CliArgs = CliArgs::parse();

    let result = match args.command {
        Command::Check(check_args) => check(check_args),
        Command::Generate(generate_args) => generate(generate_args),
    };

    if let Err(err) = result {
        error!("{err}");
        eprintln!("🛑 {err}");
        exit(1)
    }
}

fn check(args: CheckArgs) -> Result<(), AppError> {
    let config = load_config(args.base.config_path.as_deref())?;

    let password = match args.password {
        Some(password) => password,
        None => {
            debug!("No password argument given, reading from standard input");
            read_password(io::stdin().lock())?
        }
    };

    let assessment = Scorer::new(&config).score_password(&password);
    let report = Report::new(&password, assessment, &config);

    match args.base.output {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn generate(args: GenerateArgs) -> Result<(), AppError> {
    let config = load_config(args.base.config_path.as_deref())?;

    let count = args
        .count
        .map(|count| count as usize)
        .unwrap_or(config.suggestion_count);
    let generator = Generator::new(&config);
    debug!(
        "Generating {count} suggestions from a {}-symbol alphabet",
        generator.alphabet().len()
    );
    let suggestions = generator.generate_suggestions(count);

    match args.base.output {
        OutputFormat::Text => print!("{}", render_suggestions(&suggestions)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&suggestions)?),
    }

    Ok(())
}

/// Reads a single line, dropping only the line terminator.
fn read_password<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let password = line.trim_end_matches(['\n', '\r']).to_string();
    Ok(password)
}
