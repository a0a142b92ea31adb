//! prelim-drv - Driver for the prelim scanner
//!
//! Loads source files, runs the scanner and its checks, and prints the
//! reports the `prelim` binary exposes.
//!
//! # Example
//!
//! ```
//! use prelim_drv::{report, Session};
//!
//! let lines = vec!["let x = 1 @ 2".to_string()];
//! let mut session = Session::from_lines("inline", lines);
//! session.run_scanner().unwrap();
//! session.run_checks();
//! assert_eq!(session.handler.warning_count(), 1);
//!
//! let mut out = Vec::new();
//! report::write_stats(&mut out, &session.results).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("Tokens: 7"));
//! ```
//!
//! # Modules
//!
//! - [`config`] - `prelim.toml` loading
//! - [`source`] - Reading files into lines
//! - [`session`] - One file through every phase, and parallel batches
//! - [`check`] - Warnings over a finished scan
//! - [`report`] - Text reports
//! - [`error`] - [`DriverError`]

pub mod check;
pub mod config;
pub mod error;
pub mod report;
pub mod session;
pub mod source;

pub use check::check_scan;
pub use config::{Config, PrintConfig, CONFIG_FILE_NAME};
pub use error::{DriverError, Result};
pub use session::{compile, compile_all, Session, SessionOptions, Timings};
pub use source::load_lines;
