//! Validation for the smaller sections: status bar and toasts.

use crate::schema::ProjexpertConfig;

use super::helpers::validate_range;

/// Validate status bar constraints.
pub(crate) fn validate_status_bar(errors: &mut Vec<String>, config: &ProjexpertConfig) {
    validate_range(
        errors,
        "status_bar.sync_duration_ms",
        config.status_bar.sync_duration_ms,
        1,
        60_000,
    );
}

/// Validate toast constraints.
pub(crate) fn validate_toasts(errors: &mut Vec<String>, config: &ProjexpertConfig) {
    validate_range(errors, "toasts.ttl_ms", config.toasts.ttl_ms, 100, 60_000);
    validate_range(errors, "toasts.capacity", config.toasts.capacity, 1, 64);
}
