use std::{array, fmt};

use crate::{
    scalar,
    traits::{Float, Number, Sqrt},
    MinMax, One, Trig, Zero,
};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly
///   create vectors from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each
///   element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the
///   index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are the unit
///   vectors along the corresponding axes.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, and `w` (for the
///   dimensions the vector has).
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`]
///   expose the underlying elements directly.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow
///   safe transmutation when the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a
    /// closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original
    /// elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length
    /// `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of
    /// length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors: it is positive when the angle between them
    /// is below 90°, zero at exactly 90°, and negative above.
    ///
    /// Also see [`Vector::abs_angle_to`] for computing the exact angle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns the squared distance between the points `self` and `other`.
    pub fn distance2(self, other: Self) -> T
    where
        T: Number,
    {
        (other - self).length2()
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// assert_eq!(vec2(1.0, 2.0).distance(vec2(4.0, 6.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (other - self).length()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A vector of (near-)zero length has no meaningful direction; for those,
    /// the zero vector is returned instead of a division by near-zero
    /// producing huge or non-finite elements. The cutoff length is `1e-5`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Float,
    {
        let length = self.length();
        if length > T::from_f64(1e-5) {
            self / length
        } else {
            Self::ZERO
        }
    }

    /// Returns a vector pointing in the direction of `self` with the given
    /// length.
    ///
    /// Like [`Vector::normalize`], this returns the zero vector when `self`
    /// has near-zero length.
    pub fn with_length(self, length: T) -> Self
    where
        T: Float,
    {
        self.normalize() * length
    }

    /// Shortens this vector to `max_length` if it is longer than that.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// assert_approx_eq!(vec2(3.0f32, 4.0).clamp_length(2.5), vec2(1.5, 2.0));
    /// assert_eq!(vec2(3.0f32, 4.0).clamp_length(10.0), vec2(3.0, 4.0));
    /// ```
    pub fn clamp_length(self, max_length: T) -> Self
    where
        T: Float,
    {
        if self.length() > max_length {
            self.with_length(max_length)
        } else {
            self
        }
    }

    /// Componentwise reciprocal.
    pub fn recip(self) -> Self
    where
        T: Number,
    {
        self.map(|elem| T::ONE / elem)
    }

    /// Adds `other`, scaled by `scale`, to `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// assert_eq!(vec2(1.0, 2.0).add_scaled(vec2(10.0, 20.0), 0.5), vec2(6.0, 12.0));
    /// ```
    pub fn add_scaled(self, other: Self, scale: T) -> Self
    where
        T: Number,
    {
        self + other * scale
    }

    /// Linearly interpolates between `self` and `other` by the factor `t`.
    ///
    /// The factor is *not* clamped: `t` outside of 0..1 extrapolates beyond
    /// the endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let a = vec2(0.0, 10.0);
    /// let b = vec2(4.0, 20.0);
    /// assert_eq!(a.lerp(b, 0.5), vec2(2.0, 15.0));
    /// assert_eq!(a.lerp(b, 2.0), vec2(8.0, 30.0));
    /// ```
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        self.zip(other).map(|(a, b)| scalar::lerp(a, b, t))
    }

    /// Returns the point halfway between `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self
    where
        T: Number,
    {
        let one_half = T::ONE / (T::ONE + T::ONE);
        self.lerp(other, one_half)
    }

    /// Computes the smallest positive angle between `self` and `other`, in
    /// radians.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be
    /// meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// use std::f32::consts::TAU;
    ///
    /// let a = Vec3f::Y;
    /// let b = Vec3f::X;
    /// assert_approx_eq!(a.abs_angle_to(b), TAU / 4.0);  // quarter turn
    /// assert_approx_eq!(a.abs_angle_to(-a), TAU / 2.0); // half a turn
    /// ```
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        let dot = self.dot(other);
        (dot / (self.length() * other.length())).acos()
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and
    /// `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let v = vec3(-2.0, 0.5, 9.0);
    /// assert_eq!(v.clamp(Vec3f::ZERO, Vector::splat(1.0)), vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Rounds every element down to the next integer.
    pub fn floor(self) -> Self
    where
        T: Float,
    {
        self.map(T::floor)
    }

    /// Rounds every element up to the next integer.
    pub fn ceil(self) -> Self
    where
        T: Float,
    {
        self.map(T::ceil)
    }

    /// Rounds every element to the nearest integer.
    pub fn round(self) -> Self
    where
        T: Float,
    {
        self.map(T::round)
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is the scalar 2D analog of the cross product: its magnitude is
    /// the area of the parallelogram the two vectors span, and its sign
    /// encodes their relative orientation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let x = Vec2f::X;
    /// let y = Vec2f::Y;
    /// assert_eq!(x.perp_dot(y), 1.0);
    /// assert_eq!(y.perp_dot(x), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        let [ax, ay] = self.into_array();
        let [bx, by] = other.into_array();
        ax * by - ay * bx
    }

    /// Computes the cross product of `self` and `other`, both extended with
    /// a zero Z component.
    ///
    /// Since the Z coordinates of both inputs are zero, the X and Y
    /// coordinates of the result are too; the Z coordinate carries the
    /// scalar 2D cross product (see [`Vector::perp_dot`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// assert_eq!(vec2(2.0, 0.0).cross(vec2(0.0, 3.0)), vec3(0.0, 0.0, 6.0));
    /// ```
    pub fn cross(self, other: Self) -> Vector<T, 3>
    where
        T: Number,
    {
        [T::ZERO, T::ZERO, self.perp_dot(other)].into()
    }

    /// Computes the (signed) clockwise rotation in radians needed to align
    /// `self` with `other`.
    ///
    /// This operation assumes that the Y axis points up, and the X axis
    /// points to the right. If the Y axis points *down*, swap the arguments
    /// to make the method work correctly.
    ///
    /// Also see [`Vector::abs_angle_to`] for a more general way of getting
    /// the unsigned angle between vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// use std::f32::consts::TAU;
    ///
    /// // The Y axis aligns with the X axis after a clockwise quarter turn.
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
    /// assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::Y), 0.0);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + Trig,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }

    /// Rotates `self` counterclockwise around the point `center`.
    ///
    /// This operation assumes that the Y axis points up, and the X axis
    /// points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec2f::X.rotate_around(Vec2f::ZERO, TAU / 4.0), Vec2f::Y);
    /// assert_approx_eq!(vec2(2.0, 1.0).rotate_around(vec2(1.0, 1.0), TAU / 2.0), vec2(0.0, 1.0));
    /// ```
    pub fn rotate_around(self, center: Self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let [px, py] = (self - center).into_array();
        let (sin, cos) = radians.sin_cos();
        vec2(px * cos - py * sin, px * sin + py * cos) + center
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2
    /// elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4
    /// dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and
    /// `other`. Its direction depends on the order of the arguments:
    /// swapping them will invert the direction of the resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Rotates `self` around an axis through `center` parallel to the X
    /// axis.
    pub fn rotate_x(self, center: Self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let [px, py, pz] = (self - center).into_array();
        let (sin, cos) = radians.sin_cos();
        vec3(px, py * cos - pz * sin, py * sin + pz * cos) + center
    }

    /// Rotates `self` around an axis through `center` parallel to the Y
    /// axis.
    pub fn rotate_y(self, center: Self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let [px, py, pz] = (self - center).into_array();
        let (sin, cos) = radians.sin_cos();
        vec3(pz * sin + px * cos, py, pz * cos - px * sin) + center
    }

    /// Rotates `self` around an axis through `center` parallel to the Z
    /// axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec3f::X.rotate_z(Vec3f::ZERO, TAU / 4.0), Vec3f::Y);
    /// ```
    pub fn rotate_z(self, center: Self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let [px, py, pz] = (self - center).into_array();
        let (sin, cos) = radians.sin_cos();
        vec3(px * cos - py * sin, px * sin + py * cos, pz) + center
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3
    /// elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::assert_approx_eq;

    use super::*;

    fn random_vec3() -> Vec3f {
        Vec3f::from_fn(|_| fastrand::f32() * 20.0 - 10.0)
    }

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);
        v.x = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v[0], 777);
        assert_eq!(v[1], 1);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn add() {
        assert_eq!(vec2(1, 2) + vec2(2, 3), vec2(3, 5));
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    }

    #[test]
    fn normalize_guards_near_zero() {
        assert_eq!(vec3(0.0, 3.0, 4.0).normalize(), vec3(0.0, 0.6, 0.8));
        assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
        assert_eq!(vec2(1e-6, -1e-6).normalize(), Vec2f::ZERO);
        // Small but above the cutoff still normalizes.
        assert_approx_eq!(vec2(1e-4f32, 0.0).normalize(), Vec2f::X);
    }

    #[test]
    fn normalize_is_idempotent() {
        fastrand::seed(7);
        for _ in 0..100 {
            let v = random_vec3();
            if v.length() < 1e-3 {
                continue;
            }
            assert_approx_eq!(v.normalize().normalize(), v.normalize());
            assert_approx_eq!(v.normalize().length(), 1.0);
        }
    }

    #[test]
    fn length_helpers() {
        assert_eq!(vec2(3.0f32, 4.0).length(), 5.0);
        assert_eq!(vec2(3.0f32, 4.0).length2(), 25.0);
        assert_approx_eq!(vec2(3.0f32, 4.0).with_length(10.0), vec2(6.0, 8.0));
        assert_eq!(vec2(3.0f32, 4.0).clamp_length(5.0), vec2(3.0, 4.0));
        assert_approx_eq!(vec2(3.0f32, 4.0).clamp_length(2.5), vec2(1.5, 2.0));
        assert_eq!(vec2(1.0f32, -1.0).distance2(vec2(1.0, 1.0)), 4.0);
    }

    #[test]
    fn lerp_is_unclamped() {
        let a = vec3(0.0, 0.0, 0.0);
        let b = vec3(1.0, 2.0, 3.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), vec3(0.5, 1.0, 1.5));
        assert_eq!(a.lerp(b, 2.0), vec3(2.0, 4.0, 6.0));
        assert_eq!(a.lerp(b, -1.0), vec3(-1.0, -2.0, -3.0));
        assert_eq!(a.midpoint(b), vec3(0.5, 1.0, 1.5));
    }

    #[test]
    fn rounding() {
        let v = vec3(-1.5f32, 0.2, 2.7);
        assert_eq!(v.floor(), vec3(-2.0, 0.0, 2.0));
        assert_eq!(v.ceil(), vec3(-1.0, 1.0, 3.0));
        assert_eq!(v.round(), vec3(-2.0, 0.0, 3.0));
        assert_eq!(
            v.clamp(Vector::splat(0.0), Vector::splat(1.0)),
            vec3(0.0, 0.2, 1.0)
        );
    }

    #[test]
    fn cross_products() {
        assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
        assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
        assert_eq!(Vec2f::X.cross(Vec2f::Y), Vec3f::Z);
        assert_eq!(vec2(2.0, 0.0).cross(vec2(0.0, 3.0)), vec3(0.0, 0.0, 6.0));
    }

    #[test]
    fn angles() {
        assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::X), TAU / 4.0);
        assert_approx_eq!(Vec3f::Y.abs_angle_to(-Vec3f::Y), TAU / 2.0);
        assert_approx_eq!(vec2(0.0, 2.0).abs_angle_to(vec2(-3.0, 0.0)), TAU / 4.0);

        assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
        assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);
        assert_approx_eq!(Vec2f::Y.signed_angle_to(-Vec2f::Y), -TAU / 2.0);
    }

    #[test]
    fn rotation_around_points() {
        assert_approx_eq!(Vec2f::Y.rotate_around(Vec2f::ZERO, TAU / 2.0), -Vec2f::Y);
        assert_approx_eq!(
            vec2(2.0, 1.0).rotate_around(vec2(1.0, 1.0), TAU / 4.0),
            vec2(1.0, 2.0)
        );

        assert_approx_eq!(Vec3f::Y.rotate_x(Vec3f::ZERO, TAU / 4.0), Vec3f::Z);
        assert_approx_eq!(Vec3f::Z.rotate_y(Vec3f::ZERO, TAU / 4.0), Vec3f::X);
        assert_approx_eq!(Vec3f::X.rotate_z(Vec3f::ZERO, TAU / 4.0), Vec3f::Y);
        assert_approx_eq!(
            vec3(1.0, 5.0, 0.0).rotate_x(vec3(0.0, 4.0, 0.0), TAU / 4.0),
            vec3(1.0, 4.0, 1.0)
        );
    }

    #[test]
    fn assign_ops_match_value_ops() {
        fastrand::seed(31);
        for _ in 0..100 {
            let a = random_vec3();
            let b = random_vec3();
            let s = fastrand::f32() * 4.0 + 0.5;

            let mut v = a;
            v += b;
            assert_eq!(v, a + b);

            let mut v = a;
            v -= b;
            assert_eq!(v, a - b);

            let mut v = a;
            v *= b;
            assert_eq!(v, a * b);

            let mut v = a;
            v *= s;
            assert_eq!(v, a * s);

            let mut v = a;
            v /= s;
            assert_eq!(v, a / s);
        }
    }

    #[test]
    fn elementwise_and_scalar_ops() {
        assert_eq!(vec2(1, 2) - vec2(3, 1), vec2(-2, 1));
        assert_eq!(vec2(2, 3) * vec2(4, 5), vec2(8, 15));
        assert_eq!(vec2(8.0, 15.0) / vec2(4.0, 5.0), vec2(2.0, 3.0));
        assert_eq!(vec2(1, 2) * 3, vec2(3, 6));
        assert_eq!(vec2(3.0, 6.0) / 3.0, vec2(1.0, 2.0));
        assert_eq!(-vec2(1, -2), vec2(-1, 2));
        assert_eq!(vec2(1.0, 2.0).recip(), vec2(1.0, 0.5));
        assert_eq!(vec2(1.0, 2.0).add_scaled(vec2(4.0, 4.0), 0.25), vec2(2.0, 3.0));
    }

    #[test]
    fn min_max() {
        let a = vec3(-1.0, 2.0, f32::NAN);
        let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
        assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
        assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    }

    #[test]
    fn extend_truncate() {
        assert_eq!(vec2(1, 2).extend(3), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec3(1, 2, 3).truncate(), vec2(1, 2));
        assert_eq!(vec4(1, 2, 3, 4).truncate(), vec3(1, 2, 3));
    }
}
