//! Scan sessions.
//!
//! A [`Session`] owns one source file from loading through scanning and
//! checking, along with the diagnostics and timings it collected.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use prelim_lex::{scan, ScanError, ScanResults};
use prelim_util::{DiagnosticCode, Handler};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::check::check_scan;
use crate::error::Result;
use crate::source::load_lines;

/// How long each phase took.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timings {
    /// Reading and splitting the file.
    pub load: Duration,
    /// Running the scanner.
    pub scan: Duration,
    /// Running the checks.
    pub check: Duration,
}

/// Converts a duration to fractional milliseconds.
pub fn millis(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

/// Per-session settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    /// Run the scan checks after a successful scan.
    pub checks: bool,
    /// Warning codes to drop.
    pub allow: Vec<DiagnosticCode>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            checks: true,
            allow: Vec::new(),
        }
    }
}

/// One source file and everything produced from it.
#[derive(Debug)]
pub struct Session {
    /// Name used in diagnostics, usually the path.
    pub name: String,
    /// Physical lines as loaded.
    pub lines: Vec<String>,
    /// Output of the last successful scan.
    pub results: ScanResults,
    /// Diagnostics collected so far.
    pub handler: Handler,
    /// Phase timings.
    pub timings: Timings,
}

impl Session {
    /// Creates a session over lines already in memory.
    pub fn from_lines(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
            results: ScanResults::default(),
            handler: Handler::new(),
            timings: Timings::default(),
        }
    }

    /// Loads `path` into a new session.
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let lines = load_lines(path)?;
        let load = start.elapsed();
        info!(file = %path.display(), lines = lines.len(), "loaded");

        let mut session = Self::from_lines(path.display().to_string(), lines);
        session.timings.load = load;
        Ok(session)
    }

    /// Replaces the handler with one that drops `allow`.
    ///
    /// Call before running any phase; diagnostics already collected are
    /// discarded.
    pub fn with_allowed(mut self, allow: Vec<DiagnosticCode>) -> Self {
        self.handler = Handler::with_suppressed(allow);
        self
    }

    /// Scans the loaded lines.
    ///
    /// On failure an `E0001` diagnostic pointing at the offending byte is
    /// emitted before the error is returned.
    pub fn run_scanner(&mut self) -> Result<()> {
        let start = Instant::now();
        let outcome = scan(&self.lines);
        self.timings.scan = start.elapsed();
        debug!(file = %self.name, ms = millis(self.timings.scan), "scan finished");

        match outcome {
            Ok(results) => {
                self.results = results;
                Ok(())
            },
            Err(err) => {
                self.report_scan_error(&err);
                Err(err.into())
            },
        }
    }

    /// Runs the scan checks over the last scan.
    pub fn run_checks(&mut self) {
        let start = Instant::now();
        check_scan(&self.results, &self.handler);
        self.timings.check = start.elapsed();
        debug!(
            file = %self.name,
            ms = millis(self.timings.check),
            warnings = self.handler.warning_count(),
            "checks finished"
        );
    }

    /// Returns true if an error was reported.
    pub fn failed(&self) -> bool {
        self.handler.has_errors()
    }

    fn report_scan_error(&self, err: &ScanError) {
        let ScanError::Unclassifiable { line, byte, .. } = *err;
        let span = err.span();
        let text = self.lines.get(line).map_or("", String::as_str);

        let mut builder = self
            .handler
            .build_error(span, format!("byte {:#04x} cannot begin any lexeme", byte))
            .code(DiagnosticCode::E0001)
            .snippet_from(text, span)
            .note(format!("scanning stopped at line {}", line + 1));
        if byte == b'$' {
            builder = builder.help("`$` is not part of any word, number or operator");
        }
        builder.emit(&self.handler);
    }
}

/// Loads, scans and checks one file.
///
/// Only a load failure is returned as an error. A scan failure is recorded
/// in the session's handler.
pub fn compile(path: &Path, options: &SessionOptions) -> Result<Session> {
    let mut session = Session::load(path)?.with_allowed(options.allow.clone());
    match session.run_scanner() {
        Ok(()) if options.checks => session.run_checks(),
        Ok(()) => {},
        Err(err) => debug!(file = %session.name, %err, "scan aborted"),
    }
    Ok(session)
}

/// Compiles every file in parallel. Results keep the order of `paths`.
pub fn compile_all(paths: &[PathBuf], options: &SessionOptions) -> Vec<Result<Session>> {
    paths.par_iter().map(|path| compile(path, options)).collect()
}
