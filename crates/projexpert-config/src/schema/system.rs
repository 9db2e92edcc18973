//! System configuration types: toasts and logging.

use serde::{Deserialize, Serialize};

/// Toast overlay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Time a toast stays visible, in milliseconds (valid range: 100-60000).
    pub ttl_ms: u32,
    /// Maximum number of toasts kept at once (valid range: 1-64).
    pub capacity: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            ttl_ms: 1200,
            capacity: 8,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The `tracing` filter directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "projexpert=trace",
            LogLevel::Debug => "projexpert=debug",
            LogLevel::Info => "projexpert=info",
            LogLevel::Warning => "projexpert=warn",
            LogLevel::Error => "projexpert=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
