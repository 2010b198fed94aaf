#[cfg(test)]
#[path = "./color_test.rs"]
mod color_test;

pub type Rgb = [u8; 3];

/// Converts a hue in `[0, 1]` at full saturation and brightness to RGB.
/// Hue 1.0 wraps around to red.
pub fn hue_to_rgb(hue: f64) -> Rgb {
    let h6 = (hue * 6.0).rem_euclid(6.0);
    let sector = h6.floor();
    let f = h6 - sector;
    let q = 1.0 - f;

    let (r, g, b) = match sector as u8 {
        0 => (1.0, f, 0.0),
        1 => (q, 1.0, 0.0),
        2 => (0.0, 1.0, f),
        3 => (0.0, q, 1.0),
        4 => (f, 0.0, 1.0),
        _ => (1.0, 0.0, q),
    };
    [to_u8(r), to_u8(g), to_u8(b)]
}

fn to_u8(c: f64) -> u8 {
    (c * 255.0).round() as u8
}

pub fn iteration_color(iteration: u32, max_iter: u32) -> Rgb {
    if max_iter == 0 {
        return hue_to_rgb(1.0);
    }
    hue_to_rgb(iteration as f64 / max_iter as f64)
}
