//! Runtime configuration for the pipeline and the gateway that hosts it.
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | host | MOOD2EMOJI__HOST | 127.0.0.1 | Gateway bind host. |
//! | port | MOOD2EMOJI__PORT | 8000 | Gateway bind port. |
//! | max_input_chars | MOOD2EMOJI__MAX_INPUT_CHARS | 1000 | Gateway-side input cap; 0 disables it. |
//! | lexicon_path | MOOD2EMOJI__LEXICON_PATH | (embedded) | TSV lexicon replacing the built-in one. |
//! | profanity_words_path | MOOD2EMOJI__PROFANITY_WORDS_PATH | (none) | Extra word list, one term per line. |
//! | extra_profanity | (file only) | [] | Extra words inline. |

use crate::error::MoodResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Env var naming the config file (without or with extension).
pub const CONFIG_PATH_ENV: &str = "MOOD2EMOJI_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/mood2emoji";

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_input_chars() -> usize {
    1000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Longest submission the gateway accepts, in characters. The pipeline itself has no limit.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    /// Lexicon file for the pattern scorer; the embedded lexicon when unset.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    /// Word list merged into the profanity dictionary.
    #[serde(default)]
    pub profanity_words_path: Option<PathBuf>,
    #[serde(default)]
    pub extra_profanity: Vec<String>,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_input_chars: default_max_input_chars(),
            lexicon_path: None,
            profanity_words_path: None,
            extra_profanity: Vec::new(),
        }
    }
}

impl MoodConfig {
    /// Load config from file and environment. Precedence: env `MOOD2EMOJI__*` >
    /// file at `MOOD2EMOJI_CONFIG` (or `config/mood2emoji.*`) > defaults.
    pub fn load() -> MoodResult<Self> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Same as [`MoodConfig::load`] with an explicit file path. A missing file is not an error.
    pub fn load_from(path: &Path) -> MoodResult<Self> {
        let builder = config::Config::builder()
            .set_default("host", default_host())?
            .set_default("port", i64::from(default_port()))?
            .set_default("max_input_chars", default_max_input_chars() as i64)?
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("MOOD2EMOJI").separator("__"));

        let built = builder.build()?;
        let cfg: MoodConfig = built.try_deserialize()?;
        tracing::debug!(
            host = %cfg.host,
            port = cfg.port,
            max_input_chars = cfg.max_input_chars,
            lexicon = ?cfg.lexicon_path,
            "configuration loaded"
        );
        Ok(cfg)
    }

    /// `host:port` for the gateway listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `None` when the cap is disabled.
    pub fn input_limit(&self) -> Option<usize> {
        (self.max_input_chars > 0).then_some(self.max_input_chars)
    }
}
