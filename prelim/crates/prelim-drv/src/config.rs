//! Configuration for the prelim driver.
//!
//! Settings live in `prelim.toml`. Every setting has a default, so an
//! empty file and a missing file behave the same. Command-line flags are
//! OR-ed over whatever the file says.
//!
//! ```toml
//! checks = true
//! deny_warnings = false
//! allow = ["W0001"]
//!
//! [print]
//! timing = true
//! tokens = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use prelim_util::DiagnosticCode;
use serde::Deserialize;
use tracing::debug;

use crate::error::{DriverError, Result};
use crate::session::SessionOptions;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "prelim.toml";

/// Driver configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Reports to print after scanning.
    #[serde(default)]
    pub print: PrintConfig,

    /// Run the scan checks.
    #[serde(default = "default_true")]
    pub checks: bool,

    /// Treat check warnings as failures.
    #[serde(default)]
    pub deny_warnings: bool,

    /// Warning codes to drop, e.g. `"W0001"`.
    #[serde(default)]
    pub allow: Vec<String>,
}

/// Which reports to print.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PrintConfig {
    /// Load and scan times.
    #[serde(default)]
    pub timing: bool,
    /// Line, lexeme and token counts.
    #[serde(default)]
    pub stats: bool,
    /// The numbered source listing.
    #[serde(default)]
    pub file: bool,
    /// Every lexeme of every line.
    #[serde(default)]
    pub lexemes: bool,
    /// Every token of every statement.
    #[serde(default)]
    pub tokens: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            print: PrintConfig::default(),
            checks: true,
            deny_warnings: false,
            allow: Vec::new(),
        }
    }
}

impl PrintConfig {
    /// Every report enabled.
    pub const ALL: Self = Self {
        timing: true,
        stats: true,
        file: true,
        lexemes: true,
        tokens: true,
    };

    /// Enables every report that `other` enables.
    pub fn merge(&mut self, other: PrintConfig) {
        self.timing |= other.timing;
        self.stats |= other.stats;
        self.file |= other.file;
        self.lexemes |= other.lexemes;
        self.tokens |= other.tokens;
    }

    /// Returns true if any report is enabled.
    pub fn any(&self) -> bool {
        self.timing || self.stats || self.file || self.lexemes || self.tokens
    }
}

impl Config {
    /// Load configuration from the standard locations, or defaults when no
    /// file exists.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|source| DriverError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            DriverError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses the `allow` list.
    pub fn allowed_codes(&self) -> Result<Vec<DiagnosticCode>> {
        self.allow
            .iter()
            .map(|code| {
                code.parse::<DiagnosticCode>()
                    .map_err(|e| DriverError::Config(format!("in `allow`: {}", e)))
            })
            .collect()
    }

    /// Options for each scan session.
    pub fn session_options(&self) -> Result<SessionOptions> {
        Ok(SessionOptions {
            checks: self.checks,
            allow: self.allowed_codes()?,
        })
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("prelim").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("prelim").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
