#[cfg(test)]
#[path = "./fixed_test.rs"]
mod fixed_test;

use std::fmt;
use std::ops::{Add, Neg, Sub};

pub const FRAC_BITS: u32 = 16;
/// Scale factor between a value and its raw 16.16 encoding.
pub const SCALE: i32 = 1 << FRAC_BITS;
const HALF: i64 = 1 << (FRAC_BITS - 1);

/// A 16.16 fixed point number.
///
/// The upper 16 bits (including the sign) hold the integer part,
/// the lower 16 bits the fraction. All arithmetic saturates at
/// [`Fixed::MIN`] and [`Fixed::MAX`] instead of wrapping.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Default)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(SCALE);
    pub const MIN: Fixed = Fixed(i32::MIN);
    pub const MAX: Fixed = Fixed(i32::MAX);

    /// Encodes `v` as `round(v * 65536)`. Out of range values saturate,
    /// NaN encodes as zero.
    pub fn from_f64(v: f64) -> Fixed {
        Fixed((v * SCALE as f64).round() as i32)
    }

    pub fn from_f32(v: f32) -> Fixed {
        Fixed::from_f64(v as f64)
    }

    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    pub fn to_i32(&self) -> i32 {
        self.0
    }
}

pub fn new_fixed(int_part: i32, frac_part: i32) -> Fixed {
    Fixed(int_part << FRAC_BITS | frac_part)
}

pub fn new_fixed_i32(raw: i32) -> Fixed {
    Fixed(raw)
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let i = self.0 >> FRAC_BITS;
        let frac = self.0 & 0xFFFF;
        write!(f, "{:#06x}.{:#06x}({})", i as u16, frac, self.to_f64())
    }
}

impl Neg for Fixed {
    type Output = Self;

    fn neg(self) -> Self::Output {
        new_fixed_i32(self.0.saturating_neg())
    }
}

impl Add for Fixed {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        new_fixed_i32(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Fixed {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        new_fixed_i32(self.0.saturating_sub(rhs.0))
    }
}

/// Multiplies two 16.16 values. The 64 bit product is rounded half up
/// and rescaled once, then clamped into the i32 range.
pub fn fixed_mul(a: Fixed, b: Fixed) -> Fixed {
    let prod = (a.to_i32() as i64 * b.to_i32() as i64 + HALF) >> FRAC_BITS;
    new_fixed_i32(prod.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

/// Multiplies `a` and `b` as 16.16 fixed point numbers.
///
/// Both operands are rounded to the nearest representable value first,
/// so for operands that are multiples of `1/65536` the result is within
/// `1/65536` of `a * b`. Products outside `[-32768, 32768)` saturate.
pub fn fixed_point_mul(a: f32, b: f32) -> f32 {
    fixed_mul(Fixed::from_f32(a), Fixed::from_f32(b)).to_f32()
}
