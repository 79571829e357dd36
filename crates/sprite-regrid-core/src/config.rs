use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sheet layouts. Each layout pairs a cell grid with the sequencing policy
/// that feeds it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Square-ish grid (`ceil(sqrt(n))` columns); regions ordered in
    /// row-bucketed reading order.
    Grid,
    /// Single row, one cell per region; regions ordered strictly left to
    /// right.
    Row,
}

impl FromStr for LayoutMode {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "row" => Ok(Self::Row),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Minimum bounding-box area (pixels) for a component to count as a
    /// sprite; smaller regions are treated as noise and dropped.
    #[serde(default = "default_min_area")]
    pub min_area: u32,
    #[serde(default = "default_layout")]
    pub layout: LayoutMode,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            min_area: default_min_area(),
            layout: default_layout(),
        }
    }
}

fn default_min_area() -> u32 {
    50
}
fn default_layout() -> LayoutMode {
    LayoutMode::Grid
}

/// Builder for `SheetConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct SheetConfigBuilder {
    cfg: SheetConfig,
}

impl SheetConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: SheetConfig::default(),
        }
    }
    pub fn min_area(mut self, v: u32) -> Self {
        self.cfg.min_area = v;
        self
    }
    pub fn layout(mut self, v: LayoutMode) -> Self {
        self.cfg.layout = v;
        self
    }
    pub fn build(self) -> SheetConfig {
        self.cfg
    }
}

impl SheetConfig {
    /// Create a fluent builder for `SheetConfig`.
    pub fn builder() -> SheetConfigBuilder {
        SheetConfigBuilder::new()
    }
}
