use std::fs;
use std::path::PathBuf;

use crate::config::{
    check_config_arg, default_fractal_config, parse_fractal_config, read_conf_file,
};
use crate::def::{Arithmetic, Tap, TapKind};

fn args(list: &[&str]) -> impl Iterator<Item = String> {
    list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
}

#[test]
fn test_default_fractal_config() {
    let conf = default_fractal_config();
    assert!(conf.is_ok(), "{:?}", conf);
    let conf = conf.unwrap();
    assert_eq!(conf.width, 640);
    assert_eq!(conf.height, 480);
    assert_eq!(conf.arithmetic, Arithmetic::Float);
    assert_eq!(conf.bands, 8);
    assert_eq!(conf.output, PathBuf::from("fractal.ppm"));
    assert!(conf.taps.is_empty());
}

#[test]
fn test_parse_fractal_config() {
    let conf = parse_fractal_config(
        r#"
        width = 320
        height = 200
        arithmetic = "fixed"
        output = "out.ppm"

        [[taps]]
        kind = "double"
        x = 160.0
        y = 100.0

        [[taps]]
        kind = "triple"
        x = 10.0
        y = 20.5
        "#,
    )
    .unwrap();
    assert_eq!(conf.width, 320);
    assert_eq!(conf.height, 200);
    assert_eq!(conf.arithmetic, Arithmetic::Fixed);
    assert_eq!(conf.bands, 8);
    assert_eq!(conf.output, PathBuf::from("out.ppm"));
    assert_eq!(
        conf.taps,
        vec![
            Tap {
                kind: TapKind::Double,
                x: 160.0,
                y: 100.0
            },
            Tap {
                kind: TapKind::Triple,
                x: 10.0,
                y: 20.5
            },
        ]
    );
}

#[test]
fn test_parse_fractal_config_rejects_invalid() {
    assert!(parse_fractal_config("width = 1").is_err());
    assert!(parse_fractal_config("bands = 0").is_err());
    assert!(parse_fractal_config("width = 4\nheight = 4\nbands = 5").is_err());
    assert!(
        parse_fractal_config("width = 4\nheight = 4\nbands = 4611686018427387904").is_err()
    );
    assert!(parse_fractal_config("width = 4294967296\nheight = 4294967296").is_err());
    assert!(parse_fractal_config("arithmetic = \"double\"").is_err());
}

#[test]
fn test_check_config_arg() {
    assert_eq!(check_config_arg(args(&["fractal"])), None);
    assert_eq!(
        check_config_arg(args(&["fractal", "-config", "my.toml"])),
        Some("my.toml".to_string())
    );
    assert_eq!(check_config_arg(args(&["fractal", "-config"])), None);
}

#[test]
fn test_parse_fractal_config_bounds_accepted() {
    let conf = parse_fractal_config("width = 4\nheight = 4\nbands = 4").unwrap();
    assert_eq!(conf.bands, 4);
    let conf = parse_fractal_config("width = 2\nheight = 2\nbands = 1").unwrap();
    assert_eq!((conf.width, conf.height), (2, 2));
}

#[test]
fn test_read_conf_file() {
    let path = std::env::temp_dir().join(format!("fractal_conf_{}.toml", std::process::id()));
    fs::write(&path, "width = 100\nheight = 50\narithmetic = \"fixed\"\n").unwrap();
    let conf = read_conf_file(&path);
    fs::remove_file(&path).unwrap();
    let conf = conf.unwrap();
    assert_eq!(conf.width, 100);
    assert_eq!(conf.height, 50);
    assert_eq!(conf.arithmetic, Arithmetic::Fixed);
}

#[test]
fn test_read_conf_file_missing() {
    let path = std::env::temp_dir().join(format!("fractal_missing_{}.toml", std::process::id()));
    assert!(read_conf_file(&path).is_err());
}
