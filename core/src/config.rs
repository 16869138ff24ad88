use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result size used when no limit is configured.
pub const DEFAULT_TOP_K: usize = 5;

fn default_top_k() -> usize { DEFAULT_TOP_K }

/// Settings applied to a `SearchServer` before any document is indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of documents returned per query.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Individual stop words. Each entry must be a single non-empty word.
    #[serde(default)]
    pub stop_words: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { top_k: DEFAULT_TOP_K, stop_words: Vec::new() }
    }
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)
            .map_err(|e| SearchError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| SearchError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        for word in &self.stop_words {
            if word.is_empty() || word.contains(' ') {
                return Err(SearchError::InvalidConfig(format!("stop word {word:?} is not a single word")));
            }
        }
        Ok(())
    }
}
