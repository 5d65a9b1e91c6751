//! Dashboard configuration
//!
//! Configuration is read from a TOML file. Every key is optional and falls back to the values in
//! the embedded `default_config.toml`.

use crate::Result;
use crate::metrics::{DONE_STATUSES, IN_PROGRESS_STATUSES, StatusCategories, StatusCategory, TODO_STATUSES};
use crate::tickets::DEFAULT_DATE_FORMAT;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use strum::IntoEnumIterator;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../default_config.toml");

/// Name of the configuration file looked up in the base directory
pub const CONFIG_FILE_NAME: &str = "ticket-metrics.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Statuses counted as completed work
    #[serde(default = "default_done_statuses")]
    pub done_statuses: Vec<String>,

    /// Statuses counted as active work
    #[serde(default = "default_in_progress_statuses")]
    pub in_progress_statuses: Vec<String>,

    /// Statuses counted as backlog
    #[serde(default = "default_todo_statuses")]
    pub todo_statuses: Vec<String>,

    /// chrono format string of the timestamp columns
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of reporters shown in the reporter distribution
    #[serde(default = "default_list_limit")]
    pub reporter_top_n: usize,

    /// Number of tickets shown in a person's recent activity list, passed to
    /// [`recent_tickets`](crate::ranking::recent_tickets)
    #[serde(default = "default_list_limit")]
    pub recent_tickets_limit: usize,

    /// Candidate locations of the ticket export, tried in order
    #[serde(default = "default_data_paths")]
    pub data_paths: Vec<Utf8PathBuf>,
}

fn owned(statuses: &[&str]) -> Vec<String> {
    statuses.iter().map(|s| (*s).to_string()).collect()
}

fn default_done_statuses() -> Vec<String> {
    owned(&DONE_STATUSES)
}

fn default_in_progress_statuses() -> Vec<String> {
    owned(&IN_PROGRESS_STATUSES)
}

fn default_todo_statuses() -> Vec<String> {
    owned(&TODO_STATUSES)
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

const fn default_list_limit() -> usize {
    10
}

fn default_data_paths() -> Vec<Utf8PathBuf> {
    vec![Utf8PathBuf::from("Jira.csv"), Utf8PathBuf::from("../Jira.csv")]
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// An explicit `config_path` must be readable. Otherwise `ticket-metrics.toml` in `base_dir`
    /// is used when it exists, and the defaults when it does not.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or fails validation
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading ticket-metrics configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
                Err(e) => return Err(e).into_app_err_with(|| format!("reading ticket-metrics configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the date format is empty, a list limit is zero, or a status belongs
    /// to more than one category
    pub fn validate(&self) -> Result<()> {
        if self.date_format.trim().is_empty() {
            return Err(app_err!("date_format must not be empty"));
        }

        if self.reporter_top_n == 0 {
            return Err(app_err!("reporter_top_n must be at least 1"));
        }

        if self.recent_tickets_limit == 0 {
            return Err(app_err!("recent_tickets_limit must be at least 1"));
        }

        let categories = self.status_categories();
        let mut seen: BTreeMap<&str, StatusCategory> = BTreeMap::new();
        for category in StatusCategory::iter() {
            for status in categories.statuses(category) {
                if let Some(previous) = seen.insert(status.as_str(), category)
                    && previous != category
                {
                    return Err(app_err!("status '{status}' is listed as both '{previous}' and '{category}'"));
                }
            }
        }

        Ok(())
    }

    /// The configured status names, grouped by category
    #[must_use]
    pub fn status_categories(&self) -> StatusCategories {
        StatusCategories {
            done: self.done_statuses.clone(),
            in_progress: self.in_progress_statuses.clone(),
            todo: self.todo_statuses.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
