#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;

use std::env;
use std::fs;
use std::path::Path;

use crate::def::FractalConfig;
use crate::render::frame_len;

pub const FRACTAL_CONFIG_FILE_NAME: &str = "fractal_config.toml";

// Load the config from the config file if it exists.
// Returns the default config if no config file can be found.
// Checks first the arguments for a config file and after that
// the current working dir for the presence of a
// fractal_config.toml file.
pub fn read_fractal_config() -> Result<FractalConfig, String> {
    if let Some(conf_arg) = check_config_arg(env::args()) {
        let path = Path::new(&conf_arg);
        return read_conf_file(path);
    }

    let conf_file = Path::new(FRACTAL_CONFIG_FILE_NAME);
    if conf_file.exists() {
        read_conf_file(conf_file)
    } else {
        default_fractal_config()
    }
}

pub fn read_conf_file(conf_file: &Path) -> Result<FractalConfig, String> {
    let content = fs::read_to_string(conf_file).map_err(|e| e.to_string())?;
    parse_fractal_config(&content)
}

pub fn parse_fractal_config(content: &str) -> Result<FractalConfig, String> {
    let config: FractalConfig = toml::from_str(content).map_err(|e| e.to_string())?;
    if config.width < 2 || config.height < 2 {
        return Err(format!(
            "screen must be at least 2x2 pixels, got {}x{}",
            config.width, config.height
        ));
    }
    if frame_len(config.width, config.height).is_none() {
        return Err(format!(
            "screen {}x{} is too large",
            config.width, config.height
        ));
    }
    if config.bands == 0 || config.bands > config.height {
        return Err(format!(
            "bands must be between 1 and the screen height {}, got {}",
            config.height, config.bands
        ));
    }
    Ok(config)
}

pub fn default_fractal_config() -> Result<FractalConfig, String> {
    parse_fractal_config("")
}

fn check_config_arg(mut args: impl Iterator<Item = String>) -> Option<String> {
    while let Some(arg) = args.next() {
        if arg == "-config" {
            return args.next();
        }
    }
    None
}
