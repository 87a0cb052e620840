//! Configuration management and validation.
//!
//! Provides the run configuration: where to read the dataset, where to
//! write the generated module, and the fixed text and renames used when
//! emitting it. CLI arguments are applied on top of the defaults.

use crate::constants::{
    COVARIANCE_LINE_WIDTH, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_RENAMES, MODULE_HEADER,
};
use crate::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

/// Settings for the generated module text
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterConfig {
    /// Dataset name -> class identifier overrides
    pub renames: Vec<(String, String)>,

    /// Licence banner, docstring and imports at the top of the module
    pub module_header: String,

    /// Line width used when wrapping the covariance structure
    pub line_width: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            renames: DEFAULT_RENAMES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            module_header: MODULE_HEADER.to_string(),
            line_width: COVARIANCE_LINE_WIDTH,
        }
    }
}

impl EmitterConfig {
    /// Class identifier for a dataset name
    pub fn class_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.renames
            .iter()
            .find(|(from, _)| from == name)
            .map_or(name, |(_, to)| to.as_str())
    }
}

/// Top-level run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Dataset file to read
    pub input_path: PathBuf,

    /// Generated module to write
    pub output_path: PathBuf,

    pub emitter: EmitterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            emitter: EmitterConfig::default(),
        }
    }
}

impl Config {
    /// Create configuration with a custom input path
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Create configuration with a custom output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Create configuration with an extra class rename
    pub fn with_rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.emitter.renames.push((from.into(), to.into()));
        self
    }

    /// Check the configuration before a run
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(Error::configuration("input path is empty"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::configuration("output path is empty"));
        }
        if self.input_path == self.output_path {
            return Err(Error::configuration(format!(
                "output path {} would overwrite the input dataset",
                self.output_path.display()
            )));
        }
        if self.emitter.line_width < 20 {
            return Err(Error::configuration(format!(
                "line width {} is too narrow",
                self.emitter.line_width
            )));
        }
        for (from, to) in &self.emitter.renames {
            if !is_python_identifier(to) {
                return Err(Error::configuration(format!(
                    "rename of '{}' to '{}' is not a valid class name",
                    from, to
                )));
            }
        }

        debug!(
            "Configuration validated: input={}, output={}",
            self.input_path.display(),
            self.output_path.display()
        );
        Ok(())
    }
}

fn is_python_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
