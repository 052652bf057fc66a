//! Conversions to and from `nalgebra`
//!
//! Lets callers hand our matrices to code written against nalgebra (and lets
//! the tests check our constructors against nalgebra's).

use super::{Matrix, Scalar, Vector};

impl<T, const N: usize> From<Vector<N, T>> for nalgebra::SVector<T, N>
where
    T: Scalar + nalgebra::Scalar,
{
    fn from(vector: Vector<N, T>) -> Self {
        Self::from(vector.into_array())
    }
}

impl<T, const N: usize> From<nalgebra::SVector<T, N>> for Vector<N, T>
where
    T: Scalar + nalgebra::Scalar,
{
    fn from(vector: nalgebra::SVector<T, N>) -> Self {
        Self::new(vector.into())
    }
}

impl<T, const M: usize, const N: usize> From<Matrix<M, N, T>> for nalgebra::SMatrix<T, M, N>
where
    T: Scalar + nalgebra::Scalar,
{
    fn from(matrix: Matrix<M, N, T>) -> Self {
        Self::from_fn(|row, col| matrix[(row, col)])
    }
}

impl<T, const M: usize, const N: usize> From<nalgebra::SMatrix<T, M, N>> for Matrix<M, N, T>
where
    T: Scalar + nalgebra::Scalar,
{
    fn from(matrix: nalgebra::SMatrix<T, M, N>) -> Self {
        Self::from_fn(|row, col| matrix[(row, col)])
    }
}

#[cfg(test)]
mod tests {
    use crate::foundation::math::{Mat4, Vec3};

    #[test]
    fn test_vector_conversion_preserves_components() {
        let v = Vec3::new([1.0, 2.0, 3.0]);
        let n: nalgebra::Vector3<f32> = v.into();

        assert_eq!(n, nalgebra::Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::from(n), v);
    }

    #[test]
    fn test_matrix_conversion_preserves_layout() {
        let m = Mat4::from_fn(|row, col| (10 * row + col) as f32);
        let n: nalgebra::Matrix4<f32> = m.into();

        assert_eq!(n[(2, 3)], 23.0);
        assert_eq!(n[(3, 2)], 32.0);
        assert_eq!(Mat4::from(n), m);
    }
}
