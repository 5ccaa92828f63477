//! Matrix-to-long CSV reshaper CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use unpivot_cli::logging::{LogConfig, LogFormat, init_logging};
use unpivot_cli::pipeline::{ReshapeJob, run_job};
use unpivot_core::ReshapeConfig;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match build_job(&cli).and_then(|job| run_job(&job)) {
        Ok(summary) => {
            println!(
                "{} record(s) written to {}",
                summary.records,
                cli.output.display()
            );
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn build_job(cli: &Cli) -> anyhow::Result<ReshapeJob> {
    if !cli.delimiter.is_ascii() {
        anyhow::bail!("delimiter must be a single ASCII character");
    }
    let config = ReshapeConfig {
        delimiter: cli.delimiter as u8,
        skip_null_record: !cli.keep_null_records,
        null_string: cli.null_string.clone(),
        vertical_name_index: cli.vertical_name_index,
        vertical_ignore_tail: cli.vertical_ignore_tail,
        horizontal_name_row: cli.horizontal_name_row,
        horizontal_ignore_tail: cli.horizontal_ignore_tail,
        data_start_line: cli.data_start_line,
        data_start_column: cli.data_start_column,
    };
    Ok(ReshapeJob {
        input: cli.input.clone(),
        output: cli.output.clone(),
        config,
        input_encoding: cli.input_encoding.clone(),
        output_encoding: cli.output_encoding.clone(),
        trim_fields: !cli.no_trim,
    })
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
