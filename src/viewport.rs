#[cfg(test)]
#[path = "./viewport_test.rs"]
mod viewport_test;

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::def::{
    BASE_MAX_ITER, Tap, TapKind, X_SCALE_MAX, X_SCALE_MIN, X_WIDTH, Y_SCALE_MAX, Y_SCALE_MIN,
    Y_WIDTH,
};

/// Window of the complex plane that is mapped onto the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub screen_width: usize,
    pub screen_height: usize,

    pub scale: f64,
    pub max_iter: u32,

    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub x_width: f64,
    pub y_width: f64,
}

pub fn new_viewport(screen_width: usize, screen_height: usize) -> Viewport {
    let scale = 1.0;
    Viewport {
        screen_width,
        screen_height,
        scale,
        max_iter: (scale * BASE_MAX_ITER as f64) as u32,
        x_min: X_SCALE_MIN,
        x_max: X_SCALE_MAX,
        y_min: Y_SCALE_MIN,
        y_max: Y_SCALE_MAX,
        x_width: X_WIDTH,
        y_width: Y_WIDTH,
    }
}

impl Viewport {
    pub fn x_step(&self) -> f64 {
        (self.x_max - self.x_min) / (self.screen_width as f64 - 1.0)
    }

    pub fn y_step(&self) -> f64 {
        (self.y_max - self.y_min) / (self.screen_height as f64 - 1.0)
    }

    /// Maps a screen point to the complex plane. Screen y grows downwards.
    pub fn to_complex(&self, px: f64, py: f64) -> (f64, f64) {
        (self.x_min + px * self.x_step(), self.y_max - py * self.y_step())
    }

    /// Centres the window on the screen point, shrinking the window
    /// widths by the current scale.
    pub fn recenter(&mut self, px: f64, py: f64) {
        let (x0, y0) = self.to_complex(px, py);

        self.x_width /= self.scale;
        self.y_width /= self.scale;

        self.x_min = x0 - self.x_width / 2.0;
        self.x_max = x0 + self.x_width / 2.0;
        self.y_min = y0 - self.y_width / 2.0;
        self.y_max = y0 + self.y_width / 2.0;

        #[cfg(feature = "tracing")]
        debug!(
            x0,
            y0,
            x_min = self.x_min,
            x_max = self.x_max,
            y_min = self.y_min,
            y_max = self.y_max,
            "recentered"
        );
    }

    pub fn tap(&mut self, px: f64, py: f64) {
        self.recenter(px, py);
    }

    /// Zooms in and recenters. Deep zooms get more iterations.
    pub fn double_tap(&mut self, px: f64, py: f64) {
        self.scale *= 2.0;
        if self.scale > 16.0 {
            self.max_iter += 100;
        }
        self.recenter(px, py);
    }

    pub fn triple_tap(&mut self, px: f64, py: f64) {
        self.scale /= 2.0;
        self.max_iter = (self.max_iter as f64 / 1.5).floor() as u32;
        self.recenter(px, py);
    }

    pub fn apply_tap(&mut self, tap: &Tap) {
        match tap.kind {
            TapKind::Single => self.tap(tap.x, tap.y),
            TapKind::Double => self.double_tap(tap.x, tap.y),
            TapKind::Triple => self.triple_tap(tap.x, tap.y),
        }
    }
}
