//! Projexpert configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use defaults matching the IDE mock, so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use projexpert_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::ProjexpertConfig;

use projexpert_common::ConfigError;
use std::path::Path;

/// Load and validate config.
///
/// With `path`, loads that file and fails if it is missing. Without it,
/// loads `config.toml` from the OS config directory and creates a
/// commented default if none exists.
pub fn load_config(path: Option<&Path>) -> Result<ProjexpertConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ProjexpertConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = ProjexpertConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"panel\""));
        assert!(json.contains("\"viewport\""));
        assert!(json.contains("\"status_bar\""));
        assert!(json.contains("\"toasts\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = ProjexpertConfig::default();
        let json = config_to_json(&config);
        let parsed: ProjexpertConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.panel.max_width, 880.0);
        assert_eq!(parsed.status_bar.sync_duration_ms, 1200);
    }

    #[test]
    fn load_config_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[panel]\ninitial_top = 120.0\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.panel.initial_top, 120.0);
    }

    #[test]
    fn load_config_missing_explicit_path_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
        assert!(!path.exists());
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[panel]\nmin_width = 900.0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("panel.max_width"));
    }
}
