//! Panel bounds and viewport validation.

use crate::schema::ProjexpertConfig;

use super::helpers::validate_range_f64;

/// Validate panel bounds, initial geometry and hit zones.
pub(crate) fn validate_panel(errors: &mut Vec<String>, config: &ProjexpertConfig) {
    let panel = &config.panel;
    validate_range_f64(errors, "panel.min_width", panel.min_width, 1.0, 4000.0);
    if !(panel.max_width >= panel.min_width) {
        errors.push(format!(
            "panel.max_width = {} is below panel.min_width = {}",
            panel.max_width, panel.min_width
        ));
    } else {
        validate_range_f64(
            errors,
            "panel.initial_width",
            panel.initial_width,
            panel.min_width,
            panel.max_width,
        );
    }
    validate_range_f64(errors, "panel.min_top", panel.min_top, 0.0, 1000.0);
    validate_range_f64(
        errors,
        "panel.reserved_bottom",
        panel.reserved_bottom,
        0.0,
        2000.0,
    );
    if !panel.initial_top.is_finite() {
        errors.push(format!("panel.initial_top = {} is not finite", panel.initial_top));
    }
    validate_range_f64(errors, "panel.header_height", panel.header_height, 8.0, 200.0);
    validate_range_f64(
        errors,
        "panel.resize_hit_width",
        panel.resize_hit_width,
        1.0,
        32.0,
    );
}

/// Validate the initial viewport size.
pub(crate) fn validate_viewport(errors: &mut Vec<String>, config: &ProjexpertConfig) {
    validate_range_f64(errors, "viewport.width", config.viewport.width, 1.0, 16384.0);
    validate_range_f64(
        errors,
        "viewport.height",
        config.viewport.height,
        1.0,
        16384.0,
    );
}
