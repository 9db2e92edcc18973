use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Inclusive point containment.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Size of the window area the shell is laid out in, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1440.0, 900.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PanelId(pub u32);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel-{}", self.0)
    }
}

/// Entries of the left-hand activity bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityItem {
    #[default]
    Explorer,
    Search,
    Source,
    Ai,
    Terminal,
    Settings,
}

impl ActivityItem {
    pub const ALL: [ActivityItem; 6] = [
        ActivityItem::Explorer,
        ActivityItem::Search,
        ActivityItem::Source,
        ActivityItem::Ai,
        ActivityItem::Terminal,
        ActivityItem::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityItem::Explorer => "Explorer",
            ActivityItem::Search => "Search",
            ActivityItem::Source => "Source",
            ActivityItem::Ai => "AI",
            ActivityItem::Terminal => "Terminal",
            ActivityItem::Settings => "Settings",
        }
    }
}
