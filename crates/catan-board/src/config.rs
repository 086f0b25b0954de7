//! Render configuration.
//!
//! Every field has a default, so a TOML file only needs the keys it overrides:
//!
//! ```toml
//! hex_size = 48.0
//! asset_base = "https://cdn.example.com/catan"
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Viewport width in pixels
    pub width: f64,
    /// Viewport height in pixels
    pub height: f64,
    /// Hex radius (center to corner)
    pub hex_size: f64,
    /// Sea color behind the island
    pub background: String,
    /// URL prefix for tile, robber, and port art
    pub asset_base: String,
    pub token_radius: f64,
    /// Token center below the tile center
    pub token_offset_y: f64,
    pub token_font_size: f64,
    pub pip_radius: f64,
    pub pip_spacing: f64,
    /// Pip row below the token center
    pub pip_offset_y: f64,
    pub robber_width: f64,
    pub robber_height: f64,
    pub port_radius: f64,
    /// Gap between the edge midpoint and the port icon's center
    pub port_distance: f64,
    pub pier_width: f64,
    pub pier_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 800.0,
            hex_size: 60.0,
            background: "#0a5ca7".to_string(),
            asset_base: "/assets".to_string(),
            token_radius: 20.0,
            token_offset_y: 15.0,
            token_font_size: 16.0,
            pip_radius: 2.0,
            pip_spacing: 6.0,
            pip_offset_y: 7.5,
            robber_width: 28.0,
            robber_height: 44.0,
            port_radius: 16.0,
            port_distance: 30.0,
            pier_width: 4.0,
            pier_color: "#8d6e63".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Resource art for a tile
    pub fn tile_href(&self, name: &str) -> String {
        format!("{}/hex-tiles/{}.svg", self.asset_base.trim_end_matches('/'), name)
    }

    /// Resource icon drawn inside a 2:1 port
    pub fn port_href(&self, name: &str) -> String {
        format!("{}/ports/{}.svg", self.asset_base.trim_end_matches('/'), name)
    }

    pub fn robber_href(&self) -> String {
        format!("{}/robber.svg", self.asset_base.trim_end_matches('/'))
    }
}
