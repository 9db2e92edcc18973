//! JSON-lines input scripts.
//!
//! Each non-blank line not starting with `#` is one event, e.g.
//! `{"type":"pointer_down","x":1020,"y":400}`.

use projexpert_common::{Action, ScriptError};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointerDown {
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Viewport {
        width: f64,
        height: f64,
    },
    Action {
        action: Action,
    },
    Wait {
        ms: u64,
    },
    Frame,
}

/// Parse a script body.
pub fn parse_script(text: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| {
            serde_json::from_str(line.trim()).map_err(|e| ScriptError::Parse {
                line: idx + 1,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, ScriptError> {
    let text = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&text)
}

/// Opens Copilot, widens it, drags it down, then syncs.
pub const DEMO_SCRIPT: &str = r#"
# open the panel
{"type":"action","action":"open_copilot"}
{"type":"frame"}
# widen from the left edge (panel starts at x = 1020 in a 1440 wide viewport)
{"type":"pointer_down","x":1020,"y":400}
{"type":"pointer_move","x":960,"y":400}
{"type":"pointer_move","x":900,"y":410}
{"type":"pointer_up","x":900,"y":410}
{"type":"frame"}
# drag the header down
{"type":"pointer_down","x":1200,"y":70}
{"type":"pointer_move","x":1200,"y":170}
{"type":"pointer_up","x":1200,"y":170}
{"type":"frame"}
{"type":"action","action":"start_sync"}
{"type":"frame"}
{"type":"wait","ms":1300}
"#;
