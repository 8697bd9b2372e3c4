use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, traits::Number, vec3, Vector};

use super::Quat;

impl<T, U> PartialEq<Quat<U>> for Quat<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Quat<U>) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, tolerance)
    }
}

impl<T> Index<usize> for Quat<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.vec[index]
    }
}

impl<T> IndexMut<usize> for Quat<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.vec[index]
    }
}

/// The Hamilton product: composes two rotations.
///
/// `a * b` is the rotation that applies `b` first and then `a`, matching the
/// order of matrix multiplication.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [ax, ay, az, aw] = self.vec.into_array();
        let [bx, by, bz, bw] = rhs.vec.into_array();

        Self::from_xyzw(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector.
///
/// `self` must be of unit length.
impl<T: Number> Mul<Vector<T, 3>> for Quat<T> {
    type Output = Vector<T, 3>;

    fn mul(self, rhs: Vector<T, 3>) -> Self::Output {
        let [x, y, z, w] = self.vec.into_array();
        let imaginary = vec3(x, y, z);
        let two = T::ONE + T::ONE;

        let t = imaginary.cross(rhs) * two;
        rhs + t * w + imaginary.cross(t)
    }
}

/// Componentwise negation.
///
/// The negation of a unit quaternion describes the same rotation.
impl<T: Number> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self { vec: -self.vec }
    }
}

/// Componentwise addition.
impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            vec: self.vec + rhs.vec,
        }
    }
}

impl<T: Number + AddAssign> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.vec += rhs.vec;
    }
}

/// Componentwise subtraction.
impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            vec: self.vec - rhs.vec,
        }
    }
}

impl<T: Number + SubAssign> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.vec -= rhs.vec;
    }
}

/// Quaternion-Scalar multiplication (scaling).
impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self {
            vec: self.vec * rhs,
        }
    }
}

/// Quaternion-Scalar division (scaling).
impl<T: Number> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self {
            vec: self.vec / rhs,
        }
    }
}

impl<T: Number + DivAssign> DivAssign<T> for Quat<T> {
    fn div_assign(&mut self, rhs: T) {
        self.vec /= rhs;
    }
}
