//! colseq command-line interface.

use clap::{ColorChoice, Parser};
use colseq_cli::logging::{LogConfig, LogFormat, init_logging};
use colseq_cli::{
    run_column_index, run_column_name, run_compress, run_expand, run_list, run_remap, run_wave,
};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::summary::{print_column_table, print_json, print_lines, print_remap_table};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli.command) {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!(%error, "command failed");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Compress { from, to } => {
            println!("{}", run_compress(&from, &to)?);
        }
        Command::Expand { pattern, json } => {
            let expanded = run_expand(&pattern)?;
            if json {
                print_json(&expanded)?;
            } else {
                print_lines(&expanded);
            }
        }
        Command::ColumnName { indices } => {
            print_column_table(&run_column_name(&indices)?);
        }
        Command::ColumnIndex { names } => {
            print_column_table(&run_column_index(&names)?);
        }
        Command::Remap(args) => {
            let rows = run_remap(&args.mapping, &args.add)?;
            if args.json {
                print_json(&rows)?;
            } else {
                print_remap_table(&rows, &args.add);
            }
        }
        Command::Wave(args) => {
            let shifted = run_wave(
                &args.wave,
                args.step,
                &args.pattern,
                args.order.into(),
                args.waves_per_year,
            )?;
            println!("{shifted}");
        }
        Command::List(args) => {
            let result = run_list(
                args.operation.into(),
                &args.left,
                args.right.as_deref(),
                args.case.into(),
            )?;
            print_lines(&result);
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level_filter(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_timestamps(cli.log_timestamps)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
}
