use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::{approx::ApproxEq, traits::Number, Vector};

use super::{Mat3, Mat4};

impl<T> Index<(usize, usize)> for Mat3<T> {
    type Output = T;

    /// Returns the element at `(row, col)`.
    ///
    /// The padding elements are not addressable; like out-of-range indices,
    /// addressing them panics.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < 3 && col < 3,
            "matrix index ({row}, {col}) out of bounds"
        );
        &self.0[col * 4 + row]
    }
}

impl<T> IndexMut<(usize, usize)> for Mat3<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < 3 && col < 3,
            "matrix index ({row}, {col}) out of bounds"
        );
        &mut self.0[col * 4 + row]
    }
}

impl<T> Index<(usize, usize)> for Mat4<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < 4 && col < 4,
            "matrix index ({row}, {col}) out of bounds"
        );
        &self.0[col * 4 + row]
    }
}

impl<T> IndexMut<(usize, usize)> for Mat4<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < 4 && col < 4,
            "matrix index ({row}, {col}) out of bounds"
        );
        &mut self.0[col * 4 + row]
    }
}

// The padding elements of `Mat3` are maintained as zero, so whole-storage
// comparisons agree with element-by-element comparisons.

impl<T, U> PartialEq<Mat3<U>> for Mat3<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Mat3<U>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for Mat3<T> {}

impl<T, U> PartialEq<Mat4<U>> for Mat4<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Mat4<U>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for Mat4<T> {}

impl<T: ApproxEq> ApproxEq for Mat3<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, tolerance)
    }
}

impl<T: ApproxEq> ApproxEq for Mat4<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, tolerance)
    }
}

/// Matrix * Matrix.
impl<T: Number> Mul for Mat3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| {
            (0..3).fold(T::ZERO, |acc, k| acc + self[(row, k)] * rhs[(k, col)])
        })
    }
}

impl<T: Number> MulAssign for Mat3<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Matrix * Column Vector.
impl<T: Number> Mul<Vector<T, 3>> for Mat3<T> {
    type Output = Vector<T, 3>;

    fn mul(self, rhs: Vector<T, 3>) -> Self::Output {
        Vector::from_fn(|row| (0..3).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * Scalar.
impl<T: Number> Mul<T> for Mat3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_fn(|row, col| self[(row, col)] * rhs)
    }
}

/// Matrix * Matrix.
impl<T: Number> Mul for Mat4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| {
            (0..4).fold(T::ZERO, |acc, k| acc + self[(row, k)] * rhs[(k, col)])
        })
    }
}

impl<T: Number> MulAssign for Mat4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Matrix * Column Vector.
impl<T: Number> Mul<Vector<T, 4>> for Mat4<T> {
    type Output = Vector<T, 4>;

    fn mul(self, rhs: Vector<T, 4>) -> Self::Output {
        Vector::from_fn(|row| (0..4).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * Scalar.
impl<T: Number> Mul<T> for Mat4<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_fn(|row, col| self[(row, col)] * rhs)
    }
}
