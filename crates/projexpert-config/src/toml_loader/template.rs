//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Projexpert Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[panel]
# min_width = 260.0        # 1-4000
# max_width = 880.0        # >= min_width
# min_top = 36.0           # 0-1000
# reserved_bottom = 160.0  # 0-2000
# initial_width = 420.0    # min_width-max_width
# initial_top = 60.0
# open_on_launch = false
# header_height = 40.0     # 8-200
# resize_hit_width = 6.0   # 1-32

[viewport]
# width = 1440.0           # 1-16384
# height = 900.0           # 1-16384

[status_bar]
# connected = true
# ai_mode = false
# notifications = true
# sync_duration_ms = 1200  # 1-60000

[toasts]
# ttl_ms = 1200            # 100-60000
# capacity = 8             # 1-64

[logging]
# level = "INFO"           # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
