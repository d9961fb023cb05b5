use anyhow::Result;
use chrono::Local;
use clap::{Arg, ArgAction, Command};
use pair_picker::{
    pick_matching_pairs, validate_arguments, DestinationPolicy, FsScanner, PickReport,
    PickerConfig, PickerError, DEFAULT_DEST_FOLDER,
};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    let config = match create_app_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            println!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = initialize_logging(&config.log_level) {
        println!("{:#}", e);
        return ExitCode::FAILURE;
    }

    let args: Vec<String> = matches
        .get_many::<String>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    match run_application(&config, &args) {
        Ok(report) => {
            print_pick_report(&report);
            ExitCode::SUCCESS
        }
        Err(PickerError::UsageRequested) => {
            println!("{}", build_cli().render_long_help());
            ExitCode::SUCCESS
        }
        Err(e) if e.is_validation() => {
            println!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            print_failure(e);
            ExitCode::FAILURE
        }
    }
}

/// Cause chain plus the trace captured where the failure was raised
fn print_failure(e: PickerError) {
    let trace = e.trace().map(|trace| trace.to_string());
    let report = anyhow::Error::new(e).context("Pairing run aborted");

    println!("{}", report);
    println!();
    println!("Caused by:");
    for (depth, cause) in report.chain().skip(1).enumerate() {
        println!("    {}: {}", depth, cause);
    }

    if let Some(trace) = trace {
        println!();
        println!("Stack backtrace:");
        println!("{}", trace);
    }
}

fn build_cli() -> Command {
    Command::new("pair-picker")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Copy files from two folders that share a base name into a destination folder")
        .after_long_help(format!(
            "Files in PRIMARY_DIR (e.g. JPEG) are matched with files in SECONDARY_DIR (e.g. RAW) \
             whose name is identical apart from the extension, and each pair is copied to DEST_DIR.\n\
             With the rotate policy DEST_DIR defaults to '{}' and is created if missing; \
             a destination that already holds files is renamed to '<name>_<YYYYMMDDHHMMSS>' first.\n\
             With the strict policy DEST_DIR is required and must exist and be empty.",
            DEFAULT_DEST_FOLDER
        ))
        .arg(
            Arg::new("paths")
                .value_name("DIR")
                .help("Primary folder, secondary folder and optional destination folder")
                .num_args(0..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("policy")
                .long("policy")
                .value_name("POLICY")
                .help("How an existing destination is handled")
                .value_parser(DestinationPolicy::NAMES)
                .default_value("rotate"),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .help("Sort folder listings before matching")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Set the log level (trace, debug, info, warn, error)")
                .default_value("info"),
        )
}

/// Build the application configuration from CLI arguments
fn create_app_config(matches: &clap::ArgMatches) -> Result<PickerConfig> {
    let defaults = PickerConfig::default();

    let policy = match matches.get_one::<String>("policy") {
        Some(value) => value.parse::<DestinationPolicy>().map_err(anyhow::Error::msg)?,
        None => defaults.policy,
    };

    let log_level = matches
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or(defaults.log_level);

    Ok(PickerConfig {
        policy,
        sort_entries: matches.get_flag("sort"),
        log_level,
    })
}

/// Initialize structured logging with tracing
fn initialize_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

fn run_application(config: &PickerConfig, args: &[String]) -> Result<PickReport, PickerError> {
    let validated = validate_arguments(args, config.policy)?;
    info!("Starting pair picker with {} policy", config.policy);

    let scanner = FsScanner::new(config.sort_entries);
    pick_matching_pairs(&validated, config, &scanner, &Local::now())
}

fn print_pick_report(report: &PickReport) {
    info!("=== PICK REPORT ===");
    if let Some(backup) = report.destination.backup() {
        info!("Previous destination kept at: {}", backup.display());
    }
    info!("Pairs copied: {}", report.pair_count());
    info!("Files copied: {}", report.copied_files.len());
    info!("Unmatched primary files: {}", report.unmatched.len());
    info!("Work completed");
}
