#![crate_name = "fractal"]
#![crate_type = "lib"]

pub mod color;
pub mod config;
pub mod def;
pub mod fixed;
pub mod mandel;
pub mod render;
pub mod start;
pub mod viewport;
