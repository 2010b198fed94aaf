use std::path::PathBuf;

use serde::Deserialize;

pub const BASE_MAX_ITER: u32 = 500;

// base viewport
pub const X_SCALE_MIN: f64 = -2.2;
pub const X_SCALE_MAX: f64 = 1.0;
pub const Y_SCALE_MIN: f64 = -1.2;
pub const Y_SCALE_MAX: f64 = 1.2;

pub const X_WIDTH: f64 = X_SCALE_MAX - X_SCALE_MIN;
pub const Y_WIDTH: f64 = Y_SCALE_MAX - Y_SCALE_MIN;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Arithmetic {
    #[default]
    Float,
    Fixed,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TapKind {
    Single,
    Double,
    Triple,
}

/// A recorded tap in screen coordinates.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Tap {
    pub kind: TapKind,
    pub x: f64,
    pub y: f64,
}

fn default_width() -> usize {
    640
}

fn default_height() -> usize {
    480
}

fn default_bands() -> usize {
    8
}

fn default_output() -> PathBuf {
    PathBuf::from("fractal.ppm")
}

#[derive(Debug, Deserialize)]
pub struct FractalConfig {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default)]
    pub arithmetic: Arithmetic,
    // number of row bands rendered in parallel
    #[serde(default = "default_bands")]
    pub bands: usize,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub taps: Vec<Tap>,
}
