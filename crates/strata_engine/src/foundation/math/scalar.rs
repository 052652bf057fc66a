//! Floating-point element type shared by vectors and matrices
//!
//! `Scalar` is implemented for `f32` (the GPU-facing default) and `f64`.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point element of a [`Vector`](super::Vector) or [`Matrix`](super::Matrix)
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + Default
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;
    /// Archimedes' constant
    const PI: Self;
    /// Positive infinity
    const INFINITY: Self;
    /// Negative infinity
    const NEG_INFINITY: Self;

    /// Convert from `f64`, rounding to the nearest representable value
    fn from_f64(value: f64) -> Self;

    /// Widen to `f64`
    fn to_f64(self) -> f64;

    /// Square root
    fn sqrt(self) -> Self;

    /// Sine (radians)
    fn sin(self) -> Self;

    /// Cosine (radians)
    fn cos(self) -> Self;

    /// Tangent (radians)
    fn tan(self) -> Self;

    /// Absolute value
    fn abs(self) -> Self;

    /// Larger of two values, ignoring NaN
    fn max(self, other: Self) -> Self;

    /// Smaller of two values, ignoring NaN
    fn min(self, other: Self) -> Self;

    /// Neither infinite nor NaN
    fn is_finite(self) -> bool;
}

macro_rules! impl_scalar {
    ($($t:ident),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const PI: Self = std::$t::consts::PI;
                const INFINITY: Self = $t::INFINITY;
                const NEG_INFINITY: Self = $t::NEG_INFINITY;

                #[allow(clippy::cast_possible_truncation)]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                fn to_f64(self) -> f64 {
                    f64::from(self)
                }

                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }

                fn sin(self) -> Self {
                    <$t>::sin(self)
                }

                fn cos(self) -> Self {
                    <$t>::cos(self)
                }

                fn tan(self) -> Self {
                    <$t>::tan(self)
                }

                fn abs(self) -> Self {
                    <$t>::abs(self)
                }

                fn max(self, other: Self) -> Self {
                    <$t>::max(self, other)
                }

                fn min(self, other: Self) -> Self {
                    <$t>::min(self, other)
                }

                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    };
}

impl_scalar!(f32, f64);
