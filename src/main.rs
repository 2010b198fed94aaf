extern crate fractal;

use fractal::config;
use fractal::start::fractal_start;

fn main() -> Result<(), String> {
    let config = config::read_fractal_config()?;
    fractal_start(config)
}
