//! Service configuration from environment variables.

use adcopy_core::AdcopyError;
use adcopy_gen::Engine;
use adcopy_score::DEFAULT_HISTORY_LIMIT;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8787";

/// Server configuration loaded from environment variables.
///
/// | Env Var                | Default        |
/// |------------------------|----------------|
/// | `ADCOPY_ADDR`          | `0.0.0.0:8787` |
/// | `ADCOPY_ENGINE`        | `rule-based`   |
/// | `ADCOPY_HISTORY_LIMIT` | `200`          |
///
/// `OPENAI_API_KEY` and `GEMINI_API_KEY` are only checked for presence.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub addr: String,
    /// Engine used when a request does not name one
    pub default_engine: Engine,
    pub history_limit: usize,
    pub openai_key_present: bool,
    pub gemini_key_present: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            default_engine: Engine::RuleBased,
            history_limit: DEFAULT_HISTORY_LIMIT,
            openai_key_present: false,
            gemini_key_present: false,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, AdcopyError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AdcopyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr = get("ADCOPY_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());

        let default_engine = match get("ADCOPY_ENGINE") {
            Some(raw) => raw.parse::<Engine>()?,
            None => Engine::RuleBased,
        };

        let history_limit = match get("ADCOPY_HISTORY_LIMIT") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    AdcopyError::Config(format!(
                        "ADCOPY_HISTORY_LIMIT must be a positive integer, got '{}'",
                        raw
                    ))
                })?,
            None => DEFAULT_HISTORY_LIMIT,
        };

        Ok(Self {
            addr,
            default_engine,
            history_limit,
            openai_key_present: get("OPENAI_API_KEY").is_some(),
            gemini_key_present: get("GEMINI_API_KEY").is_some(),
        })
    }
}
