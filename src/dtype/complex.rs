//! Complex number type backing every tensor element
//!
//! # Storage Format
//!
//! Complex numbers are stored in interleaved format (re, im, re, im...),
//! matching numpy and FFTW conventions, and are `Pod` so flat buffers can be
//! reinterpreted without copying.
//!
//! # Arithmetic Operations
//!
//! Complex arithmetic follows standard mathematical definitions:
//! - Addition: `(a+bi) + (c+di) = (a+c) + (b+d)i`
//! - Subtraction: `(a+bi) - (c+di) = (a-c) + (b-d)i`
//! - Multiplication: `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`
//! - Division: `(a+bi)/(c+di) = (a+bi)*conj(c+di)/|c+di|²`

use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 64-bit complex number with 32-bit real and imaginary parts
///
/// Memory layout: `f32` × 2, interleaved format.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Complex64 {
    /// Real part
    pub re: f32,
    /// Imaginary part
    pub im: f32,
}

impl Complex64 {
    /// Zero complex number
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// One (real unit)
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Imaginary unit i
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Create a new complex number
    #[inline]
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }

    /// Create a complex number from polar form: r * e^(iθ)
    #[inline]
    pub fn from_polar(r: f32, theta: f32) -> Self {
        Self {
            re: r * theta.cos(),
            im: r * theta.sin(),
        }
    }

    /// Convert to polar form, returning `(magnitude, phase)`
    #[inline]
    pub fn to_polar(self) -> (f32, f32) {
        (self.magnitude(), self.phase())
    }

    /// Magnitude (absolute value): |z| = sqrt(re² + im²)
    #[inline]
    pub fn magnitude(self) -> f32 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Squared magnitude: |z|² = re² + im²
    ///
    /// More efficient than `magnitude()` when you only need the squared value.
    #[inline]
    pub fn magnitude_squared(self) -> f32 {
        self.re * self.re + self.im * self.im
    }

    /// Phase angle (argument): atan2(im, re)
    ///
    /// Returns the angle in radians from the positive real axis.
    #[inline]
    pub fn phase(self) -> f32 {
        self.im.atan2(self.re)
    }

    /// Complex conjugate: conj(a + bi) = a - bi
    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Integer power via De Moivre's formula: z^n = r^n * e^(inθ)
    #[inline]
    pub fn powi(self, n: i32) -> Self {
        if self == Self::ZERO {
            return if n == 0 { Self::ONE } else { Self::ZERO };
        }
        let (r, theta) = self.to_polar();
        Self::from_polar(r.powi(n), theta * n as f32)
    }

    /// Square root using principal branch
    #[inline]
    pub fn sqrt(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            Self::ZERO
        } else {
            let re = ((mag + self.re) / 2.0).sqrt();
            let im = self.im.signum() * ((mag - self.re) / 2.0).sqrt();
            Self { re, im }
        }
    }
}

impl Add for Complex64 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl AddAssign for Complex64 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl Sub for Complex64 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl SubAssign for Complex64 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl Mul for Complex64 {
    type Output = Self;

    /// Complex multiplication: (a+bi)(c+di) = (ac-bd) + (ad+bc)i
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Div for Complex64 {
    type Output = Self;

    /// Complex division: (a+bi)/(c+di) = (a+bi)*conj(c+di)/|c+di|²
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let denom = rhs.magnitude_squared();
        if denom == 0.0 {
            Self {
                re: f32::NAN,
                im: f32::NAN,
            }
        } else {
            Self {
                re: (self.re * rhs.re + self.im * rhs.im) / denom,
                im: (self.im * rhs.re - self.re * rhs.im) / denom,
            }
        }
    }
}

impl Neg for Complex64 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl fmt::Display for Complex64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{}+{}i", self.re, self.im)
        } else {
            write!(f, "{}{}i", self.re, self.im)
        }
    }
}

impl From<f32> for Complex64 {
    #[inline]
    fn from(re: f32) -> Self {
        Self { re, im: 0.0 }
    }
}

impl From<(f32, f32)> for Complex64 {
    #[inline]
    fn from((re, im): (f32, f32)) -> Self {
        Self { re, im }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Complex64, b: Complex64) -> bool {
        (a.re - b.re).abs() < 1e-5 && (a.im - b.im).abs() < 1e-5
    }

    #[test]
    fn test_arithmetic() {
        let a = Complex64::new(1.0, 2.0);
        let b = Complex64::new(3.0, -1.0);

        assert_eq!(a + b, Complex64::new(4.0, 1.0));
        assert_eq!(a - b, Complex64::new(-2.0, 3.0));
        // (1+2i)(3-i) = 3 - i + 6i - 2i² = 5 + 5i
        assert_eq!(a * b, Complex64::new(5.0, 5.0));
        assert_eq!(-a, Complex64::new(-1.0, -2.0));
    }

    #[test]
    fn test_division_roundtrip() {
        let a = Complex64::new(1.0, 2.0);
        let b = Complex64::new(3.0, -1.0);
        assert!(close((a * b) / b, a));
    }

    #[test]
    fn test_division_by_zero_is_nan() {
        let q = Complex64::ONE / Complex64::ZERO;
        assert!(q.re.is_nan() && q.im.is_nan());
    }

    #[test]
    fn test_conj_and_magnitude() {
        let z = Complex64::new(3.0, 4.0);
        assert_eq!(z.conj(), Complex64::new(3.0, -4.0));
        assert!((z.magnitude() - 5.0).abs() < 1e-6);
        assert!((z.magnitude_squared() - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_polar_roundtrip() {
        let z = Complex64::new(-1.5, 0.5);
        let (r, theta) = z.to_polar();
        assert!(close(Complex64::from_polar(r, theta), z));
    }

    #[test]
    fn test_sqrt_squares_back() {
        let z = Complex64::new(-4.0, 0.0);
        let s = z.sqrt();
        assert!(close(s * s, z));
        assert_eq!(Complex64::ZERO.sqrt(), Complex64::ZERO);
    }

    #[test]
    fn test_powi() {
        let z = Complex64::new(0.0, 1.0);
        // i² = -1
        assert!(close(z.powi(2), Complex64::new(-1.0, 0.0)));
        assert!(close(z.powi(0), Complex64::ONE));
        assert!(close(Complex64::ZERO.powi(3), Complex64::ZERO));
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex64::new(1.0, 2.0).to_string(), "1+2i");
        assert_eq!(Complex64::new(1.0, -2.0).to_string(), "1-2i");
    }
}
