#[cfg(test)]
#[path = "./mandel_test.rs"]
mod mandel_test;

use crate::def::Arithmetic;
use crate::fixed::{Fixed, fixed_mul, new_fixed};

const BULB_RADIUS_SQR: f64 = 0.0625;
const ESCAPE_RADIUS_SQR: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escape {
    pub iteration: u32,
    // resolved by the bulb test or cycle detection
    pub bailout: bool,
}

fn bailed(max_iter: u32) -> Escape {
    Escape {
        iteration: max_iter,
        bailout: true,
    }
}

pub fn escape_time(arith: Arithmetic, x0: f64, y0: f64, max_iter: u32) -> Escape {
    match arith {
        Arithmetic::Float => escape_time_f64(x0, y0, max_iter),
        Arithmetic::Fixed => {
            escape_time_fixed(Fixed::from_f64(x0), Fixed::from_f64(y0), max_iter)
        }
    }
}

pub fn escape_time_f64(x0: f64, y0: f64, max_iter: u32) -> Escape {
    // period-2 bulb
    let mut temp = x0 + 1.0;
    temp = temp * temp + y0 * y0;
    if temp < BULB_RADIUS_SQR {
        return bailed(max_iter);
    }

    let mut iteration = 0;
    let mut x = 0.0;
    let mut y = 0.0;
    while iteration < max_iter {
        let x_sqr = x * x;
        let y_sqr = y * y;
        if x_sqr + y_sqr >= ESCAPE_RADIUS_SQR {
            break;
        }

        let mut y_tmp = x * y;
        y_tmp += y_tmp;
        y_tmp += y0;
        let x_tmp = x_sqr - y_sqr + x0;

        if x == x_tmp && y == y_tmp {
            return bailed(max_iter);
        }
        x = x_tmp;
        y = y_tmp;
        iteration += 1;
    }
    Escape {
        iteration,
        bailout: false,
    }
}

/// Same iteration as [`escape_time_f64`] in 16.16 arithmetic. The escape
/// radius keeps every intermediate well inside the fixed range.
pub fn escape_time_fixed(x0: Fixed, y0: Fixed, max_iter: u32) -> Escape {
    let bulb_radius_sqr = new_fixed(0, 0x1000);
    let escape_radius_sqr = new_fixed(4, 0);

    let temp = x0 + Fixed::ONE;
    if fixed_mul(temp, temp) + fixed_mul(y0, y0) < bulb_radius_sqr {
        return bailed(max_iter);
    }

    let mut iteration = 0;
    let mut x = Fixed::ZERO;
    let mut y = Fixed::ZERO;
    while iteration < max_iter {
        let x_sqr = fixed_mul(x, x);
        let y_sqr = fixed_mul(y, y);
        if x_sqr + y_sqr >= escape_radius_sqr {
            break;
        }

        let xy = fixed_mul(x, y);
        let y_tmp = xy + xy + y0;
        let x_tmp = x_sqr - y_sqr + x0;

        if x == x_tmp && y == y_tmp {
            return bailed(max_iter);
        }
        x = x_tmp;
        y = y_tmp;
        iteration += 1;
    }
    Escape {
        iteration,
        bailout: false,
    }
}
