//! Viewport configuration.
//!
//! Every tunable constant in the viewport lives here — margins, overscroll
//! slack, caret geometry, and the step sizes the interaction entry points
//! feed to the camera. The struct deserializes from TOML with per-field
//! defaults, so a config file only needs the keys it wants to override.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Error loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunable constants for the viewport.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Width of the line-number gutter, left of the text origin.
    #[serde(default = "default_margin_width")]
    pub margin_width_px: f32,
    /// Additive slack past the document edge at full scroll, so the last
    /// line and column never sit flush against the view edge.
    #[serde(default = "default_overscroll")]
    pub overscroll_px: f32,
    /// Width of the caret bar.
    #[serde(default = "default_caret_width")]
    pub caret_width_px: f32,
    /// Downward nudge of the caret within its line.
    #[serde(default = "default_caret_v_offset")]
    pub caret_v_offset_px: f32,
    /// Pixels panned per scroll step.
    #[serde(default = "default_scroll_step")]
    pub scroll_step_px: f32,
    /// Degrees rotated per rotation step.
    #[serde(default = "default_rotation_step")]
    pub rotation_step_deg: f32,
    /// Rectangle scale factor per zoom-in step (< 1).
    #[serde(default = "default_zoom_in")]
    pub zoom_in_factor: f32,
    /// Rectangle scale factor per zoom-out step (> 1).
    #[serde(default = "default_zoom_out")]
    pub zoom_out_factor: f32,
}

fn default_margin_width() -> f32 {
    45.0
}
fn default_overscroll() -> f32 {
    20.0
}
fn default_caret_width() -> f32 {
    2.0
}
fn default_caret_v_offset() -> f32 {
    2.0
}
fn default_scroll_step() -> f32 {
    20.0
}
fn default_rotation_step() -> f32 {
    2.0
}
fn default_zoom_in() -> f32 {
    0.8
}
fn default_zoom_out() -> f32 {
    1.2
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            margin_width_px: default_margin_width(),
            overscroll_px: default_overscroll(),
            caret_width_px: default_caret_width(),
            caret_v_offset_px: default_caret_v_offset(),
            scroll_step_px: default_scroll_step(),
            rotation_step_deg: default_rotation_step(),
            zoom_in_factor: default_zoom_in(),
            zoom_out_factor: default_zoom_out(),
        }
    }
}

impl ViewConfig {
    /// Parses a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}
