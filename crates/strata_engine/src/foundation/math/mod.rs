//! Math utilities and types
//!
//! Fixed-size vectors and matrices for 3D graphics, generic over dimension
//! and over the floating-point [`Scalar`] type. The `f32` aliases are what
//! the renderer hands to the GPU; the `f64` aliases exist for offline work
//! such as ray evaluation at higher precision.

mod error;
mod interop;
mod matrix;
mod scalar;
mod transforms;
mod vector;

pub use error::MathError;
pub use matrix::Matrix;
pub use scalar::Scalar;
pub use vector::Vector;

/// 2D vector type
pub type Vec2 = Vector<2, f32>;

/// 3D vector type
pub type Vec3 = Vector<3, f32>;

/// 4D vector type
pub type Vec4 = Vector<4, f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix<3, 3, f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix<4, 4, f32>;

/// Double precision 2D vector
pub type DVec2 = Vector<2, f64>;

/// Double precision 3D vector
pub type DVec3 = Vector<3, f64>;

/// Double precision 4D vector
pub type DVec4 = Vector<4, f64>;

/// Double precision 3x3 matrix
pub type DMat3 = Matrix<3, 3, f64>;

/// Double precision 4x4 matrix
pub type DMat4 = Matrix<4, 4, f64>;

/// Convert degrees to radians
pub fn radians<T: Scalar>(degrees: T) -> T {
    degrees * T::PI / T::from_f64(180.0)
}

/// Convert radians to degrees
pub fn degrees<T: Scalar>(radians: T) -> T {
    radians * T::from_f64(180.0) / T::PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_conversion() {
        assert_relative_eq!(radians(180.0_f32), std::f32::consts::PI);
        assert_relative_eq!(radians(90.0_f64), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(degrees(radians(37.5_f64)), 37.5, epsilon = 1e-12);
    }
}
