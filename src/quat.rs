use std::fmt;

use crate::{
    approx::DefaultTolerance,
    traits::{Float, Number, One, Sqrt, Trig, Zero},
    vec4, Mat3, Mat4, Vec3, Vector,
};

mod ops;
mod view;

/// A quaternion with [`f32`] elements.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] elements.
pub type Quatd = Quat<f64>;

/// The axis order of an Euler-angle rotation.
///
/// Each variant names the order in which the per-axis rotations are applied.
/// The same three angles produce six different orientations depending on the
/// order, so APIs taking Euler angles need to agree on one; [`Zyx`] is the
/// common "yaw, then pitch, then roll" convention.
///
/// [`Zyx`]: EulerOrder::Zyx
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EulerOrder {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
}

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent
/// rotations in 3D space. All rotation-related operations on this type
/// assume unit length; quaternions built from the rotation constructors
/// ([`Quat::from_axis_angle`], [`Quat::from_euler`], and so on) satisfy this, and
/// [`Quat::normalize`] restores it after accumulated drift.
///
/// Quaternions are represented like a 4-dimensional vector with `x`, `y`,
/// `z` and `w` components, where `w` is the real part. A [`Quat`] can be
/// cast to raw bytes via [`bytemuck`] for GPU upload.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is
    /// multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k`
    /// imaginary parts, while the `w` component corresponds to the real
    /// number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Creates a quaternion from its four components.
    pub fn from_xyzw(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: [x, y, z, w].into(),
        }
    }

    /// Returns the components of this quaternion as a 4-dimensional
    /// [`Vector`].
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion representing a rotation around the X axis.
    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_xyzw(sin, T::ZERO, T::ZERO, cos)
    }

    /// Creates a quaternion representing a rotation around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_xyzw(T::ZERO, sin, T::ZERO, cos)
    }

    /// Creates a quaternion representing a rotation around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_xyzw(T::ZERO, T::ZERO, sin, cos)
    }

    /// Creates a quaternion from a rotation axis and an angle.
    ///
    /// `axis` must be of unit length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// use std::f32::consts::TAU;
    ///
    /// let q = Quat::from_axis_angle(Vec3f::Y, TAU / 4.0);
    /// assert_approx_eq!(q * Vec3f::Z, Vec3f::X);
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self {
            vec: (axis * sin).extend(cos),
        }
    }

    /// Splits this rotation into its axis and rotation angle.
    ///
    /// The returned angle is in `0..TAU`. For a (near-)identity rotation the
    /// axis is arbitrary; the X axis is returned.
    pub fn to_axis_angle(self) -> (Vec3<T>, T)
    where
        T: Float + DefaultTolerance,
    {
        let two = T::ONE + T::ONE;
        let angle = self.vec.w.clamp(-T::ONE, T::ONE).acos() * two;
        let sin = (angle * Self::one_half()).sin();
        let axis = if sin.abs() > T::TOLERANCE {
            self.vec.truncate() / sin
        } else {
            Vec3::X
        };
        (axis, angle)
    }

    /// Creates a quaternion from Euler angles.
    ///
    /// The rotations around the X, Y, and Z axes (by the angles `x`, `y` and
    /// `z`, in radians) are applied in the sequence given by `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// use std::f32::consts::TAU;
    ///
    /// let q = Quat::from_euler(TAU / 4.0, 0.0, TAU / 4.0, EulerOrder::Xyz);
    /// assert_approx_eq!(q * Vec3f::X, Vec3f::Z);
    /// ```
    pub fn from_euler(x: T, y: T, z: T, order: EulerOrder) -> Self
    where
        T: Number + Trig,
    {
        let qx = Self::from_rotation_x(x);
        let qy = Self::from_rotation_y(y);
        let qz = Self::from_rotation_z(z);

        match order {
            EulerOrder::Xyz => qx * qy * qz,
            EulerOrder::Xzy => qx * qz * qy,
            EulerOrder::Yxz => qy * qx * qz,
            EulerOrder::Yzx => qy * qz * qx,
            EulerOrder::Zxy => qz * qx * qy,
            EulerOrder::Zyx => qz * qy * qx,
        }
    }

    /// Extracts the rotation of a 3x3 rotation matrix.
    ///
    /// Uses the trace-based method, branching on the largest diagonal
    /// element so that the square root argument stays well away from zero.
    /// The result is one of the two unit quaternions (`q` and `-q` describe
    /// the same rotation) equivalent to `mat`; which one is unspecified.
    pub fn from_mat3(mat: Mat3<T>) -> Self
    where
        T: Number + Sqrt,
    {
        let one_half = Self::one_half();
        let trace = mat[(0, 0)] + mat[(1, 1)] + mat[(2, 2)];

        if trace > T::ZERO {
            let root = (trace + T::ONE).sqrt();
            let inv = one_half / root;
            Self::from_xyzw(
                (mat[(2, 1)] - mat[(1, 2)]) * inv,
                (mat[(0, 2)] - mat[(2, 0)]) * inv,
                (mat[(1, 0)] - mat[(0, 1)]) * inv,
                root * one_half,
            )
        } else {
            // The largest diagonal element picks the stable branch.
            let mut i = 0;
            if mat[(1, 1)] > mat[(0, 0)] {
                i = 1;
            }
            if mat[(2, 2)] > mat[(i, i)] {
                i = 2;
            }
            let j = (i + 1) % 3;
            let k = (j + 1) % 3;

            let root = (mat[(i, i)] - mat[(j, j)] - mat[(k, k)] + T::ONE).sqrt();
            let inv = one_half / root;

            let mut vec = Vector::ZERO;
            vec[i] = root * one_half;
            vec[3] = (mat[(k, j)] - mat[(j, k)]) * inv;
            vec[j] = (mat[(i, j)] + mat[(j, i)]) * inv;
            vec[k] = (mat[(i, k)] + mat[(k, i)]) * inv;
            Self { vec }
        }
    }

    /// Extracts the rotation of the upper-left 3x3 submatrix of `mat`.
    ///
    /// `mat` must not contain scaling for the result to be meaningful; see
    /// [`Quat::from_mat3`].
    pub fn from_mat4(mat: Mat4<T>) -> Self
    where
        T: Number + Sqrt,
    {
        Self::from_mat3(Mat3::from_mat4(mat))
    }

    /// Computes the shortest-arc rotation that maps the direction `from` to
    /// the direction `to`.
    ///
    /// Both inputs must be of unit length. The degenerate case of
    /// (near-)opposite directions has no unique shortest arc; a half turn
    /// around an arbitrary perpendicular axis is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let q = Quat::rotation_to(Vec3f::X, Vec3f::Y);
    /// assert_approx_eq!(q * Vec3f::X, Vec3f::Y);
    /// ```
    pub fn rotation_to(from: Vec3<T>, to: Vec3<T>) -> Self
    where
        T: Float,
    {
        let threshold = T::from_f64(0.999999);
        let dot = from.dot(to);

        if dot < -threshold {
            let mut axis = Vec3::X.cross(from);
            if axis.length() < T::from_f64(1e-6) {
                axis = Vec3::Y.cross(from);
            }
            Self::from_axis_angle(axis.normalize(), T::from_f64(std::f64::consts::PI))
        } else if dot > threshold {
            Self::IDENTITY
        } else {
            let axis = from.cross(to);
            Self {
                vec: axis.extend(T::ONE + dot),
            }
            .normalize()
        }
    }

    /// Returns this quaternion with the imaginary components negated.
    ///
    /// For a *unit* quaternion the conjugate equals the [inverse] and undoes
    /// the rotation without the cost of a division.
    ///
    /// [inverse]: Quat::inverse
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        let [x, y, z, w] = self.vec.into_array();
        Self::from_xyzw(-x, -y, -z, w)
    }

    /// Returns the multiplicative inverse of this quaternion.
    ///
    /// Unlike [`Quat::conjugate`], this divides by the squared length and is
    /// therefore also correct for non-unit quaternions. The zero quaternion
    /// has no inverse; it is returned unchanged.
    pub fn inverse(self) -> Self
    where
        T: Number,
    {
        let length2 = self.length2();
        let inv = if length2 == T::ZERO {
            T::ZERO
        } else {
            T::ONE / length2
        };
        Self {
            vec: self.conjugate().vec * inv,
        }
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// For unit quaternions the dot product measures how similar the two
    /// orientations are; note that `q` and `-q` describe the same rotation
    /// but have opposite dot products.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this
    /// quaternion will scale the vector in addition to rotating it. When
    /// using quaternions to model rotations, it is advisable to ensure that
    /// quaternions are always of length one.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals
    /// one).
    pub fn normalize(self) -> Self
    where
        T: Float,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Computes the rotation angle, in radians, between `self` and `other`.
    ///
    /// Both quaternions must be of unit length.
    pub fn angle_to(self, other: Self) -> T
    where
        T: Float,
    {
        let two = T::ONE + T::ONE;
        let dot = self.dot(other);
        (two * dot * dot - T::ONE).clamp(-T::ONE, T::ONE).acos()
    }

    /// Componentwise linear interpolation between `self` and `other`.
    ///
    /// The result is generally not of unit length even when both inputs
    /// are; [`Quat::slerp`] interpolates rotations properly. The factor is
    /// not clamped.
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        Self {
            vec: self.vec.lerp(other.vec, t),
        }
    }

    /// Spherical linear interpolation: interpolates along the great-circle
    /// arc between the orientations `self` and `other`.
    ///
    /// Of the two arcs connecting the orientations, the shorter one is
    /// taken. When the orientations are (nearly) identical, the great
    /// circle through them is ill-conditioned (the interpolation weights
    /// divide by the near-zero sine of the arc angle); plain linear
    /// interpolation is used instead, which is indistinguishable at those
    /// angles.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// use std::f32::consts::TAU;
    ///
    /// let a = Quatf::IDENTITY;
    /// let b = Quat::from_rotation_x(TAU / 4.0);
    /// let half = a.slerp(b, 0.5);
    /// assert_approx_eq!(half.angle_to(Quat::from_rotation_x(TAU / 8.0)), 0.0, tolerance = 1e-3);
    /// ```
    pub fn slerp(self, other: Self, t: T) -> Self
    where
        T: Float + DefaultTolerance,
    {
        let mut cos_omega = self.dot(other);
        let mut end = other;
        if cos_omega < T::ZERO {
            // `other` and `-other` are the same rotation; negating picks
            // the shorter arc.
            cos_omega = -cos_omega;
            end = -end;
        }

        let (scale_start, scale_end) = if T::ONE - cos_omega > T::TOLERANCE {
            let omega = cos_omega.acos();
            let sin_omega = omega.sin();
            (
                ((T::ONE - t) * omega).sin() / sin_omega,
                (t * omega).sin() / sin_omega,
            )
        } else {
            (T::ONE - t, t)
        };

        Self {
            vec: self.vec * scale_start + end.vec * scale_end,
        }
    }

    /// Spherical cubic interpolation between `self` and `d`, shaped by the
    /// control orientations `b` and `c`.
    ///
    /// Implemented as nested [slerps][Quat::slerp]: the outer interpolation
    /// blends `slerp(self, d, t)` toward `slerp(b, c, t)` by `2t(1 - t)`,
    /// which is 0 at both endpoints.
    pub fn sqlerp(self, b: Self, c: Self, d: Self, t: T) -> Self
    where
        T: Float + DefaultTolerance,
    {
        let two = T::ONE + T::ONE;
        self.slerp(d, t).slerp(b.slerp(c, t), two * t * (T::ONE - t))
    }

    /// Composes a rotation around the X axis onto this rotation.
    pub fn rotate_x(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        self * Self::from_rotation_x(radians)
    }

    /// Composes a rotation around the Y axis onto this rotation.
    pub fn rotate_y(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        self * Self::from_rotation_y(radians)
    }

    /// Composes a rotation around the Z axis onto this rotation.
    pub fn rotate_z(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        self * Self::from_rotation_z(radians)
    }
}

impl<T: Zero + One> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.vec.fmt(f)
    }
}
