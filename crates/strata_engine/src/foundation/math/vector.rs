//! Fixed-length column vectors
//!
//! `Vector<N, T>` is a plain value type over `[T; N]`. Arithmetic between two
//! vectors only type-checks when both have the same length, and the cross
//! product only exists for `Vector<3, T>`.
//!
//! Element access comes in two flavours: the checked [`Vector::get`] /
//! [`Vector::set`] pair returns [`MathError::IndexOutOfRange`], while the
//! `[]` operator panics with the same message, like slice indexing.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use super::{MathError, Scalar};

/// Column vector of `N` components
///
/// The layout is exactly `[T; N]`. Note that this does NOT give a 3-component
/// vector the 16-byte alignment std140/std430 blocks expect; data bound for a
/// uniform or push-constant block goes through
/// [`Std140Vec3`](crate::render::layout::Std140Vec3) instead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Vector<const N: usize, T: Scalar = f32> {
    data: [T; N],
}

impl<const N: usize, T: Scalar> Vector<N, T> {
    /// Create a vector from exactly `N` components
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Create a vector from a runtime-sized list of components
    ///
    /// Fails with [`MathError::DimensionMismatch`] unless `values` holds exactly `N` entries.
    pub fn from_slice(values: &[T]) -> Result<Self, MathError> {
        let data: [T; N] = values.try_into().map_err(|_| MathError::DimensionMismatch {
            expected: N,
            actual: values.len(),
        })?;
        Ok(Self::new(data))
    }

    /// Widen a shorter vector, filling the remaining `N - M` slots from `fill`
    ///
    /// # Errors
    /// - [`MathError::WidenFromLarger`] if `M >= N`
    /// - [`MathError::DimensionMismatch`] if `fill` does not hold exactly `N - M` values
    pub fn widen<const M: usize>(shorter: &Vector<M, T>, fill: &[T]) -> Result<Self, MathError> {
        if M >= N {
            return Err(MathError::WidenFromLarger { from: M, to: N });
        }
        if fill.len() != N - M {
            return Err(MathError::DimensionMismatch {
                expected: N - M,
                actual: fill.len(),
            });
        }

        Ok(Self::new(std::array::from_fn(|i| {
            if i < M {
                shorter.data[i]
            } else {
                fill[i - M]
            }
        })))
    }

    /// All components zero
    pub fn zero() -> Self {
        Self::new([T::ZERO; N])
    }

    /// Read the component at `index`
    pub fn get(&self, index: usize) -> Result<T, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::IndexOutOfRange { index, len: N })
    }

    /// Overwrite the component at `index`
    pub fn set(&mut self, index: usize, value: T) -> Result<(), MathError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or(MathError::IndexOutOfRange { index, len: N })?;
        *slot = value;
        Ok(())
    }

    /// Borrow the components
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Take the components by value
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// Iterate over the components in order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Dot product
    pub fn dot(&self, rhs: &Self) -> T {
        self.data
            .iter()
            .zip(rhs.data.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// Squared Euclidean length
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Unit vector in the same direction, or `None` for a zero-length
    /// (or non-finite) vector
    pub fn try_normalized(&self) -> Option<Self> {
        let norm = self.norm();
        if norm > T::ZERO && norm.is_finite() {
            Some(*self / norm)
        } else {
            None
        }
    }

    /// Unit vector in the same direction
    ///
    /// A zero-length vector has no direction; it normalizes to the zero vector
    /// rather than to NaN components. Use [`Vector::try_normalized`] to detect
    /// that case.
    pub fn normalized(&self) -> Self {
        self.try_normalized().unwrap_or_else(Self::zero)
    }

    /// Apply `f` to every component
    pub fn map(self, f: impl Fn(T) -> T) -> Self {
        Self::new(std::array::from_fn(|i| f(self.data[i])))
    }

    fn zip_map(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        Self::new(std::array::from_fn(|i| f(self.data[i], rhs.data[i])))
    }
}

impl<T: Scalar> Vector<2, T> {
    /// First component
    pub const fn x(&self) -> T {
        self.data[0]
    }

    /// Second component
    pub const fn y(&self) -> T {
        self.data[1]
    }
}

impl<T: Scalar> Vector<3, T> {
    /// Unit vector along +X
    pub fn unit_x() -> Self {
        Self::new([T::ONE, T::ZERO, T::ZERO])
    }

    /// Unit vector along +Y
    pub fn unit_y() -> Self {
        Self::new([T::ZERO, T::ONE, T::ZERO])
    }

    /// Unit vector along +Z
    pub fn unit_z() -> Self {
        Self::new([T::ZERO, T::ZERO, T::ONE])
    }

    /// First component
    pub const fn x(&self) -> T {
        self.data[0]
    }

    /// Second component
    pub const fn y(&self) -> T {
        self.data[1]
    }

    /// Third component
    pub const fn z(&self) -> T {
        self.data[2]
    }

    /// Right-handed cross product `self × rhs`
    pub fn cross(&self, rhs: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = rhs.data;
        Self::new([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }

    /// Homogeneous extension with `w` as the fourth component
    pub const fn extend(&self, w: T) -> Vector<4, T> {
        let [x, y, z] = self.data;
        Vector::new([x, y, z, w])
    }
}

impl<T: Scalar> Vector<4, T> {
    /// First component
    pub const fn x(&self) -> T {
        self.data[0]
    }

    /// Second component
    pub const fn y(&self) -> T {
        self.data[1]
    }

    /// Third component
    pub const fn z(&self) -> T {
        self.data[2]
    }

    /// Fourth component
    pub const fn w(&self) -> T {
        self.data[3]
    }

    /// Drop the fourth component
    pub const fn truncate(&self) -> Vector<3, T> {
        let [x, y, z, _] = self.data;
        Vector::new([x, y, z])
    }
}

impl<const N: usize, T: Scalar> Default for Vector<N, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize, T: Scalar> From<[T; N]> for Vector<N, T> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize, T: Scalar> From<Vector<N, T>> for [T; N] {
    fn from(vector: Vector<N, T>) -> Self {
        vector.data
    }
}

impl<'a, const N: usize, T: Scalar> TryFrom<&'a [T]> for Vector<N, T> {
    type Error = MathError;

    fn try_from(values: &'a [T]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl<const N: usize, T: Scalar> Index<usize> for Vector<N, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.data.get(index) {
            Some(value) => value,
            None => panic!("{}", MathError::IndexOutOfRange { index, len: N }),
        }
    }
}

impl<const N: usize, T: Scalar> IndexMut<usize> for Vector<N, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.data.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", MathError::IndexOutOfRange { index, len: N }),
        }
    }
}

impl<const N: usize, T: Scalar> Add for Vector<N, T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<const N: usize, T: Scalar> Sub for Vector<N, T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<const N: usize, T: Scalar> Neg for Vector<N, T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<const N: usize, T: Scalar> Mul<T> for Vector<N, T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|a| a * rhs)
    }
}

impl<const N: usize, T: Scalar> Div<T> for Vector<N, T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|a| a / rhs)
    }
}

impl<const N: usize, T: Scalar> AddAssign for Vector<N, T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: usize, T: Scalar> SubAssign for Vector<N, T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const N: usize, T: Scalar> MulAssign<T> for Vector<N, T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<N, $t>> for $t {
                type Output = Vector<N, $t>;

                fn mul(self, rhs: Vector<N, $t>) -> Vector<N, $t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

impl<const N: usize, T: Scalar> fmt::Display for Vector<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, " }}")
    }
}

impl<const N: usize, T> AbsDiffEq for Vector<N, T>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize, T> RelativeEq for Vector<N, T>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
