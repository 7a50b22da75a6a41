//! Label maker CLI.

use clap::{ColorChoice, Parser};
use label_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{GuardOutcome, run_catalog, run_check, run_compose, run_history, run_print};

const EXIT_ERROR: i32 = 1;
const EXIT_GUARDED: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_ERROR);
    }
    let catalog = cli.catalog.as_deref();
    let history = cli.history.as_deref();
    let result = match &cli.command {
        Command::Catalog(args) => run_catalog(catalog, args).map(|()| GuardOutcome::Clear),
        Command::Compose(args) => run_compose(catalog, args).map(|()| GuardOutcome::Clear),
        Command::Check(args) => run_check(catalog, history, args),
        Command::Print(args) => run_print(catalog, history, args),
        Command::History(args) => run_history(history, args).map(|()| GuardOutcome::Clear),
    };
    let exit_code = match result {
        Ok(GuardOutcome::Clear) => 0,
        Ok(GuardOutcome::Collisions | GuardOutcome::Declined) => EXIT_GUARDED,
        Err(error) => {
            eprintln!("error: {error:#}");
            EXIT_ERROR
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
