//! Column-major `M × N` matrices
//!
//! A `Matrix<M, N, T>` stores `N` column vectors of length `M`. Matrix
//! products are only defined when the inner dimensions agree, and that is
//! checked by the type system: `Matrix<M, N> * Matrix<N, P> -> Matrix<M, P>`.
//!
//! `m[i]` borrows column `i`; `m[(row, col)]` borrows a single element.
//! [`Matrix::row`] gathers a row from every column and is therefore `O(N)`.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use super::{MathError, Scalar, Vector};

/// Column-major matrix of `M` rows and `N` columns
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Matrix<const M: usize, const N: usize, T: Scalar = f32> {
    columns: [Vector<M, T>; N],
}

impl<const M: usize, const N: usize, T: Scalar> Matrix<M, N, T> {
    /// Create a matrix from exactly `N` columns
    pub const fn from_columns(columns: [Vector<M, T>; N]) -> Self {
        Self { columns }
    }

    /// Create a matrix from a runtime-sized list of columns
    ///
    /// Fails with [`MathError::DimensionMismatch`] unless `columns` holds exactly `N` vectors.
    pub fn try_from_columns(columns: &[Vector<M, T>]) -> Result<Self, MathError> {
        let columns: [Vector<M, T>; N] =
            columns.try_into().map_err(|_| MathError::DimensionMismatch {
                expected: N,
                actual: columns.len(),
            })?;
        Ok(Self::from_columns(columns))
    }

    /// Build each element from its `(row, col)` position
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self::from_columns(std::array::from_fn(|col| {
            Vector::new(std::array::from_fn(|row| f(row, col)))
        }))
    }

    /// All elements zero
    pub fn zeros() -> Self {
        Self::from_columns([Vector::zero(); N])
    }

    /// Column `index`
    pub fn column(&self, index: usize) -> Result<Vector<M, T>, MathError> {
        self.columns
            .get(index)
            .copied()
            .ok_or(MathError::IndexOutOfRange { index, len: N })
    }

    /// Row `index`, gathered from every column
    pub fn row(&self, index: usize) -> Result<Vector<N, T>, MathError> {
        if index >= M {
            return Err(MathError::IndexOutOfRange { index, len: M });
        }
        Ok(self.row_unchecked(index))
    }

    /// Borrow the columns
    pub const fn columns(&self) -> &[Vector<M, T>; N] {
        &self.columns
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Matrix<N, M, T> {
        Matrix::from_fn(|row, col| self.columns[row][col])
    }

    /// Column-major nested array, the layout GLSL `matN` blocks expect
    pub fn to_cols_array(&self) -> [[T; M]; N] {
        std::array::from_fn(|col| self.columns[col].into_array())
    }

    fn row_unchecked(&self, index: usize) -> Vector<N, T> {
        Vector::new(std::array::from_fn(|col| self.columns[col][index]))
    }

    fn map_columns(self, f: impl Fn(Vector<M, T>) -> Vector<M, T>) -> Self {
        Self::from_columns(std::array::from_fn(|col| f(self.columns[col])))
    }

    fn zip_columns(self, rhs: Self, f: impl Fn(Vector<M, T>, Vector<M, T>) -> Vector<M, T>) -> Self {
        Self::from_columns(std::array::from_fn(|col| f(self.columns[col], rhs.columns[col])))
    }
}

impl<const N: usize, T: Scalar> Matrix<N, N, T> {
    /// Square identity matrix
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<const M: usize, const N: usize, T: Scalar> Default for Matrix<M, N, T> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const M: usize, const N: usize, T: Scalar> From<[[T; M]; N]> for Matrix<M, N, T> {
    fn from(columns: [[T; M]; N]) -> Self {
        Self::from_columns(columns.map(Vector::new))
    }
}

impl<const M: usize, const N: usize, T: Scalar> Index<usize> for Matrix<M, N, T> {
    type Output = Vector<M, T>;

    fn index(&self, index: usize) -> &Vector<M, T> {
        match self.columns.get(index) {
            Some(column) => column,
            None => panic!("{}", MathError::IndexOutOfRange { index, len: N }),
        }
    }
}

impl<const M: usize, const N: usize, T: Scalar> IndexMut<usize> for Matrix<M, N, T> {
    fn index_mut(&mut self, index: usize) -> &mut Vector<M, T> {
        match self.columns.get_mut(index) {
            Some(column) => column,
            None => panic!("{}", MathError::IndexOutOfRange { index, len: N }),
        }
    }
}

impl<const M: usize, const N: usize, T: Scalar> Index<(usize, usize)> for Matrix<M, N, T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self[col][row]
    }
}

impl<const M: usize, const N: usize, T: Scalar> IndexMut<(usize, usize)> for Matrix<M, N, T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self[col][row]
    }
}

impl<const M: usize, const N: usize, T: Scalar> Add for Matrix<M, N, T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_columns(rhs, |a, b| a + b)
    }
}

impl<const M: usize, const N: usize, T: Scalar> Sub for Matrix<M, N, T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_columns(rhs, |a, b| a - b)
    }
}

impl<const M: usize, const N: usize, T: Scalar> Neg for Matrix<M, N, T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map_columns(|c| -c)
    }
}

impl<const M: usize, const N: usize, T: Scalar> Mul<T> for Matrix<M, N, T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map_columns(|c| c * rhs)
    }
}

impl<const M: usize, const N: usize, T: Scalar> Div<T> for Matrix<M, N, T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map_columns(|c| c / rhs)
    }
}

impl<const M: usize, const N: usize, const P: usize, T: Scalar> Mul<Matrix<N, P, T>>
    for Matrix<M, N, T>
{
    type Output = Matrix<M, P, T>;

    fn mul(self, rhs: Matrix<N, P, T>) -> Matrix<M, P, T> {
        let rows: [Vector<N, T>; M] = std::array::from_fn(|row| self.row_unchecked(row));
        Matrix::from_columns(std::array::from_fn(|col| {
            Vector::new(std::array::from_fn(|row| rows[row].dot(&rhs.columns[col])))
        }))
    }
}

impl<const M: usize, const N: usize, T: Scalar> Mul<Vector<N, T>> for Matrix<M, N, T> {
    type Output = Vector<M, T>;

    fn mul(self, rhs: Vector<N, T>) -> Vector<M, T> {
        Vector::new(std::array::from_fn(|row| self.row_unchecked(row).dot(&rhs)))
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const M: usize, const N: usize> Mul<Matrix<M, N, $t>> for $t {
                type Output = Matrix<M, N, $t>;

                fn mul(self, rhs: Matrix<M, N, $t>) -> Matrix<M, N, $t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

impl<const M: usize, const N: usize, T: Scalar> fmt::Display for Matrix<M, N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..M {
            for col in 0..N {
                let separator = if col + 1 == N { "\n" } else { "\t" };
                write!(f, "{}{separator}", self.columns[col][row])?;
            }
        }
        Ok(())
    }
}

impl<const M: usize, const N: usize, T> AbsDiffEq for Matrix<M, N, T>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.columns
            .iter()
            .zip(other.columns.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const M: usize, const N: usize, T> RelativeEq for Matrix<M, N, T>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.columns
            .iter()
            .zip(other.columns.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
