use crate::consts::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::error::BoardResult;
use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Startup settings for a board session. Loadable from JSON, overridable
/// from the command line; dimension values outside `[1, 10]` are clamped at
/// engine construction, not here.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Initial row count.
    #[arg(long, global = true, default_value_t = DEFAULT_ROWS)]
    pub rows: u8,

    /// Initial column count.
    #[arg(long, global = true, default_value_t = DEFAULT_COLS)]
    pub cols: u8,

    /// JSON file overriding the built-in token catalog.
    #[arg(long, global = true)]
    pub catalog: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            catalog: None,
        }
    }
}

impl BoardConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BoardResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overrides file-loaded values with whatever was given explicitly on
    /// the command line.
    pub fn merge_from_cli(&mut self, cli: &BoardConfig, matches: &ArgMatches) {
        if matches.value_source("rows") == Some(ValueSource::CommandLine) {
            self.rows = cli.rows;
        }
        if matches.value_source("cols") == Some(ValueSource::CommandLine) {
            self.cols = cli.cols;
        }
        if cli.catalog.is_some() {
            self.catalog = cli.catalog.clone();
        }
    }
}
