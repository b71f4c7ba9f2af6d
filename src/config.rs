use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::autocomplete::CompletionLimits;
use crate::error::Result;
use crate::language::Language;

const APP_NAME: &str = "autospell";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub default_language: Language,
    pub min_results: usize,
    pub max_results: usize,
    pub score_threshold: f64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let limits = CompletionLimits::default();
        Self {
            default_language: Language::English,
            min_results: limits.min_results,
            max_results: limits.max_results,
            score_threshold: limits.score_threshold,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load the stored config, creating it with defaults when absent.
    ///
    /// # Errors
    /// Returns `Error::Config` if the stored file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Ok(confy::load(APP_NAME, Some("config"))?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(confy::load_path(path)?)
    }

    pub fn save(&self) -> Result<()> {
        Ok(confy::store(APP_NAME, Some("config"), self)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        Ok(confy::store_path(path, self)?)
    }

    pub fn limits(&self) -> CompletionLimits {
        CompletionLimits {
            min_results: self.min_results,
            max_results: self.max_results,
            score_threshold: self.score_threshold,
        }
    }
}
