//! Full configuration validation.
//!
//! Validates numeric ranges and cross-field bounds. Each domain has its
//! own submodule; this orchestrator calls them all and collects errors
//! into a single `ConfigError`.

mod helpers;
mod misc;
mod panel;


use crate::schema::ProjexpertConfig;
use projexpert_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ProjexpertConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    panel::validate_panel(&mut errors, config);
    panel::validate_viewport(&mut errors, config);
    misc::validate_status_bar(&mut errors, config);
    misc::validate_toasts(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
