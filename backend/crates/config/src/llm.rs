use referee_common::error::RefereeResult;
use serde::Deserialize;

use crate::env::{get_var, get_var_or};

pub const DEFAULT_API_BASE: &str = "https://api.groq.com";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Settings for the chat-completion provider. Built once at start-up and
/// handed to the client by reference.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl LlmSettings {
    /// Reads `GROQ_API_KEY` (required), `GROQ_API_BASE` and `GROQ_MODEL`.
    /// Sampling parameters are fixed.
    pub fn from_env() -> RefereeResult<Self> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            api_key: get_var("GROQ_API_KEY")?,
            api_base: get_var_or("GROQ_API_BASE", DEFAULT_API_BASE),
            model: get_var_or("GROQ_MODEL", DEFAULT_MODEL),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        })
    }

    /// Settings with the default base URL, model and sampling parameters.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}
