//! prelim - command-line entry point.
//!
//! Scans each input file, prints its diagnostics to stderr and the
//! requested reports to stdout.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use prelim_drv::{compile_all, report, Config, DriverError, PrintConfig, Session};
use prelim_util::DiagnosticCode;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit status when warnings are denied and some were reported.
const EXIT_DENIED_WARNINGS: u8 = 2;

/// prelim - line-oriented scanner for the preliminary compiler
///
/// Splits each file into lexemes and tokens, reports unsupported operators
/// and unclosed literals, and optionally prints what it found.
#[derive(Parser, Debug)]
#[command(name = "prelim")]
#[command(author = "Prelim Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Line-oriented scanner for the preliminary compiler", long_about = None)]
struct Cli {
    /// Source files to scan
    files: Vec<PathBuf>,

    /// Print every report
    #[arg(long)]
    print_all: bool,

    /// Print load, scan and check times
    #[arg(long)]
    print_timing: bool,

    /// Print line, lexeme and token counts
    #[arg(long)]
    print_stats: bool,

    /// Print the numbered source
    #[arg(long)]
    print_file: bool,

    /// Print every lexeme
    #[arg(long)]
    print_lexemes: bool,

    /// Print every token
    #[arg(long)]
    print_tokens: bool,

    /// Skip the scan checks
    #[arg(long)]
    no_checks: bool,

    /// Exit with status 2 when any warning is reported
    #[arg(long, env = "PRELIM_DENY_WARNINGS")]
    deny_warnings: bool,

    /// Drop a warning code, e.g. W0001 (repeatable)
    #[arg(short = 'A', long = "allow", value_name = "CODE", value_parser = parse_code)]
    allow: Vec<DiagnosticCode>,

    /// Enable verbose output
    #[arg(short, long, env = "PRELIM_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "PRELIM_NO_COLOR")]
    no_color: bool,

    /// Path to configuration file
    #[arg(short, long, env = "PRELIM_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    fn print(&self) -> PrintConfig {
        if self.print_all {
            return PrintConfig::ALL;
        }
        PrintConfig {
            timing: self.print_timing,
            stats: self.print_stats,
            file: self.print_file,
            lexemes: self.print_lexemes,
            tokens: self.print_tokens,
        }
    }
}

fn parse_code(s: &str) -> std::result::Result<DiagnosticCode, String> {
    s.parse::<DiagnosticCode>().map_err(|e| e.to_string())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(&cli)?;
    let options = config.session_options()?;
    debug!(?config, "effective configuration");

    if cli.files.is_empty() {
        return Err(DriverError::NoInput.into());
    }

    let sessions = compile_all(&cli.files, &options);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report::write_banner(&mut out)?;

    let mut failed = false;
    let mut warnings = 0;
    for (path, session) in cli.files.iter().zip(sessions) {
        let session = session.with_context(|| format!("failed to load {}", path.display()))?;
        print_diagnostics(&session);
        warnings += session.handler.warning_count();

        if session.failed() {
            failed = true;
            continue;
        }
        if cli.files.len() > 1 && config.print.any() {
            report::write_file_banner(&mut out, &session.name)?;
        }
        write_reports(&mut out, &session, config.print)?;
    }
    out.flush()?;

    if failed {
        return Ok(ExitCode::FAILURE);
    }
    if config.deny_warnings && warnings > 0 {
        warn!(warnings, "warnings denied");
        return Ok(ExitCode::from(EXIT_DENIED_WARNINGS));
    }
    Ok(ExitCode::SUCCESS)
}

/// Initialize the logging system.
///
/// Logs go to stderr. `RUST_LOG` overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration and fold the command-line flags over it.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config.as_deref() {
        Some(path) => load_config_from(path)?,
        None => Config::load().context("failed to load configuration")?,
    };

    config.print.merge(cli.print());
    config.checks &= !cli.no_checks;
    config.deny_warnings |= cli.deny_warnings;
    config
        .allow
        .extend(cli.allow.iter().map(DiagnosticCode::as_str));
    Ok(config)
}

fn load_config_from(path: &Path) -> Result<Config> {
    Config::load_from_path(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

fn print_diagnostics(session: &Session) {
    for diagnostic in session.handler.diagnostics() {
        eprintln!("{}\n", diagnostic.render(&session.name));
    }
}

fn write_reports<W: Write>(out: &mut W, session: &Session, print: PrintConfig) -> io::Result<()> {
    if print.timing {
        report::write_timing(out, &session.timings)?;
    }
    if print.stats {
        report::write_stats(out, &session.results)?;
    }
    if print.file {
        report::write_file(out, &session.results)?;
    }
    if print.lexemes {
        report::write_lexemes(out, &session.results)?;
    }
    if print.tokens {
        report::write_tokens(out, &session.results)?;
    }
    Ok(())
}
