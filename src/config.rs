use crate::error::{PulseError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the language-model API key. Its absence is
/// not an error; extraction just runs on the fallback path.
pub const AI_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Environment variable holding the task tracker API key.
pub const TRACKER_API_KEY_VAR: &str = "LINEAR_API_KEY";

pub const CONFIG_FILE_NAME: &str = ".pulse.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PulseConfig {
    #[serde(default)]
    pub ai: AiSettings,

    #[serde(default)]
    pub tracker: TrackerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSettings {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout for the single completion attempt. Expiry is treated
    /// like any other upstream failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "claude-sonnet-4-5".to_string()
}

fn default_max_tokens() -> u32 {
    1200
}

fn default_timeout_secs() -> u64 {
    8
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerSettings {
    #[serde(default = "default_tracker_url")]
    pub api_url: String,
}

fn default_tracker_url() -> String {
    "https://api.linear.app/graphql".to_string()
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            api_url: default_tracker_url(),
        }
    }
}

impl PulseConfig {
    /// Search upward from `start_path` for a config file; fall back to
    /// defaults when none exists. A config file is optional for this tool.
    pub fn load_or_default(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(config_path) => {
                let content = std::fs::read_to_string(&config_path)?;
                let config = serde_yaml::from_str(&content)?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// LLM API key from the environment, if configured.
    pub fn anthropic_api_key(&self) -> Option<String> {
        std::env::var(AI_API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Tracker API key from the environment. Required for tracker commands.
    pub fn tracker_api_key(&self) -> Result<String> {
        std::env::var(TRACKER_API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(PulseError::MissingApiKey(TRACKER_API_KEY_VAR))
    }
}
