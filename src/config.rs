//! Environment-driven settings
//!
//! Every variable is optional; unset or unparseable values fall back to the
//! defaults, which reproduce the plain dialogue with no extras.

use crate::state_machine::state::DEFAULT_CURRENCY_SYMBOL;
use crate::state_machine::ExitPolicy;

/// Output format for diagnostic logs on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one run of the program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueConfig {
    /// `BOOKING_EXIT_POLICY`: `greeting` or `any`
    pub exit_policy: ExitPolicy,
    /// `BOOKING_CURRENCY_SYMBOL`
    pub currency_symbol: String,
    /// `BOOKING_LOG_FORMAT`: `text` or `json`
    pub log_format: LogFormat,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            exit_policy: ExitPolicy::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl DialogueConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            exit_policy: lookup("BOOKING_EXIT_POLICY")
                .and_then(|v| parse_exit_policy(&v))
                .unwrap_or(defaults.exit_policy),
            currency_symbol: lookup("BOOKING_CURRENCY_SYMBOL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.currency_symbol),
            log_format: lookup("BOOKING_LOG_FORMAT")
                .and_then(|v| parse_log_format(&v))
                .unwrap_or(defaults.log_format),
        }
    }
}

fn parse_exit_policy(value: &str) -> Option<ExitPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "greeting" => Some(ExitPolicy::GreetingOnly),
        "any" => Some(ExitPolicy::AnyPrompt),
        _ => None,
    }
}

fn parse_log_format(value: &str) -> Option<LogFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" => Some(LogFormat::Text),
        "json" => Some(LogFormat::Json),
        _ => None,
    }
}
