use std::fmt;

use crate::{
    traits::{Float, Number, One, Sqrt, Trig, Zero},
    vec2, vec3, vec4, Quat, Vec2, Vec3, Vector,
};

mod ops;

/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A column-major 3x3 matrix, stored in the GPU buffer layout.
///
/// The element storage is 12 values, not 9: each of the 3 columns occupies a
/// block of 4 elements, of which the last (indices 3, 7 and 11) is padding.
/// This matches how `mat3x3<f32>` is laid out in WGSL uniform and storage
/// buffers, so a [`Mat3`] can be written into a GPU buffer as-is (via
/// [`bytemuck`] or [`Mat3::as_slice`]).
///
/// Every constructor and operation writes zeroes into the padding elements.
/// Code that writes padding through the raw-storage escape hatches is on its
/// own; no operation reads the padding.
///
/// # Construction
///
/// - [`Mat3::from_rows`], [`Mat3::from_columns`], and [`Mat3::from_fn`]
///   build a matrix from its 9 logical elements.
/// - [`Mat3::from_diagonal`] builds a matrix that is zero outside of its
///   diagonal.
/// - [`Mat3::from_mat4`] extracts the upper-left 3x3 submatrix of a
///   [`Mat4`]; [`Mat3::from_quat`] converts a rotation quaternion.
/// - The transform builders ([`Mat3::translation`], [`Mat3::rotation`],
///   [`Mat3::scaling`], and so on) create 2D (and partially 3D) transform matrices.
/// - [`Mat3::ZERO`] and [`Mat3::IDENTITY`] are the obvious constants.
///
/// # Element Access
///
/// [`Mat3`] implements [`Index`] and [`IndexMut`] for `(usize, usize)`
/// tuples. The first element of the tuple is the *row*, the second the
/// *column*, matching common mathematical notation; indices are 0-based and
/// the padding elements are not addressable this way. [`Mat3::get`] and
/// [`Mat3::get_mut`] are the non-panicking variants, and [`Mat3::row`] /
/// [`Mat3::column`] read whole vectors.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Mat3<T>([T; 12]);

/// A column-major 4x4 matrix.
///
/// The element storage is 16 values; each column occupies 4 consecutive
/// elements, which is the layout of `mat4x4<f32>` in WGSL, so a [`Mat4`] can
/// be written into a GPU buffer as-is.
///
/// # Construction
///
/// - [`Mat4::from_rows`], [`Mat4::from_columns`], [`Mat4::from_fn`], and
///   [`Mat4::from_diagonal`] build a matrix from raw elements.
/// - [`Mat4::from_mat3`] embeds a 3x3 matrix into the upper-left corner of
///   an identity matrix; [`Mat4::from_quat`] converts a rotation quaternion.
/// - The transform builders ([`Mat4::translation`], [`Mat4::rotation_x`],
///   [`Mat4::axis_rotation`], [`Mat4::scaling`], and so on) create 3D transform
///   matrices; each has a `*d` companion that composes the transform onto an
///   existing matrix (e.g. [`Mat4::translated`]).
/// - The camera builders [`Mat4::perspective`], [`Mat4::ortho`],
///   [`Mat4::frustum`], [`Mat4::look_at`], [`Mat4::aim`], and
///   [`Mat4::camera_aim`] produce view and projection matrices.
///
/// # Element Access
///
/// Identical to [`Mat3`]: `(row, column)` indexing, [`Mat4::get`] /
/// [`Mat4::get_mut`], and [`Mat4::row`] / [`Mat4::column`].
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Mat4<T>([T; 16]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat3<T> {}
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat4<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat4<T> {}

macro_rules! impl_matrix_debug {
    ($mat:ident, $dim:expr) => {
        impl<T: fmt::Debug> fmt::Debug for $mat<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                struct FormatRow<'a, T>(&'a $mat<T>, usize);
                impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
                    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        write!(f, "[")?;
                        for col in 0..$dim {
                            if col != 0 {
                                write!(f, ", ")?;
                            }
                            write!(f, "{:?}", self.0[(self.1, col)])?;
                        }
                        write!(f, "]")
                    }
                }

                // Natural (row-wise) writing order for debug output.
                let mut list = f.debug_list();
                for row in 0..$dim {
                    list.entry(&FormatRow(self, row));
                }
                list.finish()
            }
        }
    };
}
impl_matrix_debug!(Mat3, 3);
impl_matrix_debug!(Mat4, 4);

impl<T: Zero> Mat3<T> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([T::ZERO; 12]);
}

impl<T: Zero + One> Mat3<T> {
    /// The identity matrix: 1 on the diagonal, 0 everywhere else.
    ///
    /// Multiplying any vector or matrix with this matrix returns it
    /// unchanged.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        T::ONE, T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ONE, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ONE, T::ZERO,
    ]);
}

impl<T> Mat3<T> {
    /// Creates a [`Mat3`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let rows = Mat3::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    ///     [6, 7, 8],
    /// ]);
    /// let columns = Mat3::from_columns([
    ///     [0, 3, 6],
    ///     [1, 4, 7],
    ///     [2, 5, 8],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    #[rustfmt::skip]
    pub fn from_columns<U: Into<Vector<T, 3>>>(columns: [U; 3]) -> Self
    where
        T: Zero,
    {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] =
            columns.map(|col| col.into().into_array());
        Self([
            a00, a01, a02, T::ZERO,
            a10, a11, a12, T::ZERO,
            a20, a21, a22, T::ZERO,
        ])
    }

    /// Creates a [`Mat3`] from an array of row vectors.
    pub fn from_rows<U: Into<Vector<T, 3>>>(rows: [U; 3]) -> Self
    where
        T: Zero,
    {
        let [[a00, a10, a20], [a01, a11, a21], [a02, a12, a22]] =
            rows.map(|row| row.into().into_array());
        Self::from_columns([[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]])
    }

    /// Creates a [`Mat3`] by invoking a closure with the position (row and
    /// column) of each element.
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
        T: Zero,
    {
        let mut out = Self::ZERO;
        for col in 0..3 {
            for row in 0..3 {
                out.0[col * 4 + row] = cb(row, col);
            }
        }
        out
    }

    /// Creates a matrix with the given diagonal and 0 outside of it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let diag = Mat3::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Mat3::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, 3>>>(diagonal: D) -> Self
    where
        T: Zero,
    {
        let [x, y, z] = diagonal.into().into_array();
        let mut out = Self::ZERO;
        out.0[0] = x;
        out.0[5] = y;
        out.0[10] = z;
        out
    }

    /// Extracts the upper-left 3x3 submatrix of a [`Mat4`].
    ///
    /// For an affine transform matrix this is its rotation/scale part, with
    /// the translation dropped.
    pub fn from_mat4(mat: Mat4<T>) -> Self
    where
        T: Number,
    {
        Self::from_fn(|row, col| mat[(row, col)])
    }

    /// Converts a rotation quaternion into the equivalent rotation matrix.
    ///
    /// `quat` must be of unit length for the result to be a pure rotation.
    pub fn from_quat(quat: Quat<T>) -> Self
    where
        T: Number,
    {
        let [x, y, z, w] = quat.into_vec().into_array();
        let two = T::ONE + T::ONE;
        let (x2, y2, z2) = (x * two, y * two, z * two);
        let (xx, yx, zx) = (x * x2, y * x2, z * x2);
        let (yy, zy, zz) = (y * y2, z * y2, z * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);

        Self::from_columns([
            [T::ONE - yy - zz, yx + wz, zx - wy],
            [yx - wz, T::ONE - xx - zz, zy + wx],
            [zx + wy, zy - wx, T::ONE - xx - yy],
        ])
    }

    /// Returns the underlying elements, including the padding, as a slice of
    /// length 12.
    ///
    /// This is the layout expected by WGSL `mat3x3` uniform/storage buffer
    /// fields.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if
    /// out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < 3 && col < 3 {
            Some(&self.0[col * 4 + row])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `(row, col)`, or
    /// [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < 3 && col < 3 {
            Some(&mut self.0[col * 4 + row])
        } else {
            None
        }
    }

    /// Returns the given row as a vector.
    pub fn row(&self, row: usize) -> Vector<T, 3>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(row, col)])
    }

    /// Returns the given column as a vector.
    pub fn column(&self, col: usize) -> Vector<T, 3>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self[(row, col)])
    }

    /// Replaces the given column.
    pub fn set_column(&mut self, col: usize, column: Vector<T, 3>)
    where
        T: Copy,
    {
        for (row, value) in column.into_array().into_iter().enumerate() {
            self[(row, col)] = value;
        }
    }

    /// Swaps the rows and columns of this matrix.
    pub fn transpose(self) -> Self
    where
        T: Number,
    {
        Self::from_fn(|row, col| self[(col, row)])
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T
    where
        T: Number,
    {
        let [a00, a01, a02, _, a10, a11, a12, _, a20, a21, a22, _] = self.0;
        a00 * (a11 * a22 - a12 * a21) + a01 * (a12 * a20 - a10 * a22) + a02 * (a10 * a21 - a11 * a20)
    }

    /// Inverts this matrix via cofactor expansion.
    ///
    /// There is no singularity check: inverting a matrix whose determinant
    /// is zero divides by zero and yields infinite or `NaN` elements, the
    /// same way the equivalent shader code would. Callers that need to
    /// detect the case can test [`Mat3::determinant`] beforehand.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// assert_eq!(Mat3f::IDENTITY.invert(), Mat3f::IDENTITY);
    /// ```
    pub fn invert(&self) -> Self
    where
        T: Number,
    {
        let [a00, a01, a02, _, a10, a11, a12, _, a20, a21, a22, _] = self.0;

        let b01 = a22 * a11 - a12 * a21;
        let b11 = a12 * a20 - a22 * a10;
        let b21 = a21 * a10 - a11 * a20;

        let inv_det = T::ONE / (a00 * b01 + a01 * b11 + a02 * b21);

        Self::from_columns([
            [
                b01 * inv_det,
                (a02 * a21 - a22 * a01) * inv_det,
                (a12 * a01 - a02 * a11) * inv_det,
            ],
            [
                b11 * inv_det,
                (a22 * a00 - a02 * a20) * inv_det,
                (a02 * a10 - a12 * a00) * inv_det,
            ],
            [
                b21 * inv_det,
                (a01 * a20 - a21 * a00) * inv_det,
                (a11 * a00 - a01 * a10) * inv_det,
            ],
        ])
    }

    /// Creates a 2D translation matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let m = Mat3f::translation(vec2(10.0, 20.0));
    /// assert_eq!(m.transform_point(vec2(1.0, 2.0)), vec2(11.0, 22.0));
    /// ```
    pub fn translation(v: Vec2<T>) -> Self
    where
        T: Number,
    {
        let [x, y] = v.into_array();
        Self::from_columns([
            [T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, T::ONE, T::ZERO],
            [x, y, T::ONE],
        ])
    }

    /// Composes a 2D translation onto this matrix.
    ///
    /// Equivalent to `self * Mat3::translation(v)`: the translation is
    /// applied *before* whatever transform `self` performs.
    pub fn translated(self, v: Vec2<T>) -> Self
    where
        T: Number,
    {
        self * Self::translation(v)
    }

    /// Creates a 2D rotation matrix (a counterclockwise rotation around the
    /// Z axis).
    pub fn rotation(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([
            [cos, sin, T::ZERO],
            [-sin, cos, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Composes a 2D rotation onto this matrix.
    pub fn rotated(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        self * Self::rotation(radians)
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([
            [T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, cos, sin],
            [T::ZERO, -sin, cos],
        ])
    }

    /// Composes a rotation around the X axis onto this matrix.
    pub fn rotated_x(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        self * Self::rotation_x(radians)
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([
            [cos, T::ZERO, -sin],
            [T::ZERO, T::ONE, T::ZERO],
            [sin, T::ZERO, cos],
        ])
    }

    /// Composes a rotation around the Y axis onto this matrix.
    pub fn rotated_y(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        self * Self::rotation_y(radians)
    }

    /// Creates a 2D scaling matrix.
    pub fn scaling(v: Vec2<T>) -> Self
    where
        T: Number,
    {
        let [x, y] = v.into_array();
        Self::from_diagonal([x, y, T::ONE])
    }

    /// Composes a 2D scale onto this matrix.
    pub fn scaled(self, v: Vec2<T>) -> Self
    where
        T: Number,
    {
        self * Self::scaling(v)
    }

    /// Creates a 3D scaling matrix.
    pub fn scaling_3d(v: Vec3<T>) -> Self
    where
        T: Number,
    {
        Self::from_diagonal(v)
    }

    /// Composes a 3D scale onto this matrix.
    pub fn scaled_3d(self, v: Vec3<T>) -> Self
    where
        T: Number,
    {
        self * Self::scaling_3d(v)
    }

    /// Creates a 2D scaling matrix that scales both axes by `scale`.
    pub fn uniform_scaling(scale: T) -> Self
    where
        T: Number,
    {
        Self::scaling(Vector::splat(scale))
    }

    /// Returns the 2D translation component of this matrix.
    pub fn translation_part(&self) -> Vec2<T>
    where
        T: Copy,
    {
        vec2(self.0[8], self.0[9])
    }

    /// Replaces the 2D translation component of this matrix.
    ///
    /// The homogeneous element in the translation column is reset to 1, so
    /// the result is a proper 2D affine transform.
    pub fn set_translation(&mut self, v: Vec2<T>)
    where
        T: Number,
    {
        let [x, y] = v.into_array();
        self.0[8] = x;
        self.0[9] = y;
        self.0[10] = T::ONE;
    }

    /// Returns the scale that this matrix applies to 2D vectors, per axis.
    pub fn scaling_part(&self) -> Vec2<T>
    where
        T: Number + Sqrt,
    {
        vec2(
            vec2(self.0[0], self.0[1]).length(),
            vec2(self.0[4], self.0[5]).length(),
        )
    }

    /// Returns the scale that this matrix applies to 3D vectors, per axis.
    pub fn scaling_3d_part(&self) -> Vec3<T>
    where
        T: Number + Sqrt,
    {
        vec3(
            self.column(0).length(),
            self.column(1).length(),
            self.column(2).length(),
        )
    }

    /// Transforms a 2D point by this matrix, applying the translation
    /// component.
    pub fn transform_point(&self, point: Vec2<T>) -> Vec2<T>
    where
        T: Number,
    {
        let [x, y] = point.into_array();
        let [a00, a01, _, _, a10, a11, _, _, a20, a21, _, _] = self.0;
        vec2(a00 * x + a10 * y + a20, a01 * x + a11 * y + a21)
    }

    /// Transforms a 2D direction vector by this matrix, ignoring the
    /// translation component.
    pub fn transform_vector(&self, vector: Vec2<T>) -> Vec2<T>
    where
        T: Number,
    {
        let [x, y] = vector.into_array();
        let [a00, a01, _, _, a10, a11, _, _, _, _, _, _] = self.0;
        vec2(a00 * x + a10 * y, a01 * x + a11 * y)
    }
}

impl<T: Zero> Mat4<T> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([T::ZERO; 16]);
}

impl<T: Zero + One> Mat4<T> {
    /// The identity matrix: 1 on the diagonal, 0 everywhere else.
    ///
    /// Multiplying any vector or matrix with this matrix returns it
    /// unchanged.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        T::ONE, T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ONE, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ONE, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO, T::ONE,
    ]);
}

impl<T> Mat4<T> {
    /// Creates a [`Mat4`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, 4>>>(columns: [U; 4]) -> Self {
        let [c0, c1, c2, c3] = columns.map(|col| col.into().into_array());
        let mut elements = c0.into_iter().chain(c1).chain(c2).chain(c3);
        Self(std::array::from_fn(|_| elements.next().unwrap()))
    }

    /// Creates a [`Mat4`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let rows = Mat4::from_rows([
    ///     [0, 1, 2, 3],
    ///     [4, 5, 6, 7],
    ///     [8, 9, 10, 11],
    ///     [12, 13, 14, 15],
    /// ]);
    /// assert_eq!(rows[(1, 2)], 6);
    /// assert_eq!(rows.column(2), vec4(2, 6, 10, 14));
    /// ```
    pub fn from_rows<U: Into<Vector<T, 4>>>(rows: [U; 4]) -> Self {
        let [[a00, a10, a20, a30], [a01, a11, a21, a31], [a02, a12, a22, a32], [a03, a13, a23, a33]] =
            rows.map(|row| row.into().into_array());
        Self::from_columns([
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ])
    }

    /// Creates a [`Mat4`] by invoking a closure with the position (row and
    /// column) of each element.
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(std::array::from_fn(|i| cb(i % 4, i / 4)))
    }

    /// Creates a matrix with the given diagonal and 0 outside of it.
    pub fn from_diagonal<D: Into<Vector<T, 4>>>(diagonal: D) -> Self
    where
        T: Zero + Copy,
    {
        let diagonal = diagonal.into();
        Self::from_fn(|row, col| if row == col { diagonal[row] } else { T::ZERO })
    }

    /// Embeds a 3x3 matrix into the upper-left corner of an identity
    /// matrix.
    pub fn from_mat3(mat: Mat3<T>) -> Self
    where
        T: Number,
    {
        Self::from_fn(|row, col| match mat.get(row, col) {
            Some(&elem) => elem,
            None if row == col => T::ONE,
            None => T::ZERO,
        })
    }

    /// Converts a rotation quaternion into the equivalent rotation matrix.
    ///
    /// `quat` must be of unit length for the result to be a pure rotation.
    pub fn from_quat(quat: Quat<T>) -> Self
    where
        T: Number,
    {
        Self::from_mat3(Mat3::from_quat(quat))
    }

    /// Returns the underlying elements as a slice of length 16, in column
    /// major order.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if
    /// out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < 4 && col < 4 {
            Some(&self.0[col * 4 + row])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `(row, col)`, or
    /// [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < 4 && col < 4 {
            Some(&mut self.0[col * 4 + row])
        } else {
            None
        }
    }

    /// Returns the given row as a vector.
    pub fn row(&self, row: usize) -> Vector<T, 4>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(row, col)])
    }

    /// Returns the given column as a vector.
    pub fn column(&self, col: usize) -> Vector<T, 4>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self[(row, col)])
    }

    /// Replaces the given column.
    pub fn set_column(&mut self, col: usize, column: Vector<T, 4>)
    where
        T: Copy,
    {
        for (row, value) in column.into_array().into_iter().enumerate() {
            self[(row, col)] = value;
        }
    }

    /// Swaps the rows and columns of this matrix.
    pub fn transpose(self) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| self[(col, row)])
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T
    where
        T: Number,
    {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.0;

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }

    /// Inverts this matrix via cofactor expansion.
    ///
    /// There is no singularity check: inverting a matrix whose determinant
    /// is zero divides by zero and yields infinite or `NaN` elements, the
    /// same way the equivalent shader code would. Callers that need to
    /// detect the case can test [`Mat4::determinant`] beforehand.
    pub fn invert(&self) -> Self
    where
        T: Number,
    {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.0;

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        let inv_det = T::ONE / det;

        Self::from_columns([
            [
                (a11 * b11 - a12 * b10 + a13 * b09) * inv_det,
                (a02 * b10 - a01 * b11 - a03 * b09) * inv_det,
                (a31 * b05 - a32 * b04 + a33 * b03) * inv_det,
                (a22 * b04 - a21 * b05 - a23 * b03) * inv_det,
            ],
            [
                (a12 * b08 - a10 * b11 - a13 * b07) * inv_det,
                (a00 * b11 - a02 * b08 + a03 * b07) * inv_det,
                (a32 * b02 - a30 * b05 - a33 * b01) * inv_det,
                (a20 * b05 - a22 * b02 + a23 * b01) * inv_det,
            ],
            [
                (a10 * b10 - a11 * b08 + a13 * b06) * inv_det,
                (a01 * b08 - a00 * b10 - a03 * b06) * inv_det,
                (a30 * b04 - a31 * b02 + a33 * b00) * inv_det,
                (a21 * b02 - a20 * b04 - a23 * b00) * inv_det,
            ],
            [
                (a11 * b07 - a10 * b09 - a12 * b06) * inv_det,
                (a00 * b09 - a01 * b07 + a02 * b06) * inv_det,
                (a31 * b01 - a30 * b03 - a32 * b00) * inv_det,
                (a20 * b03 - a21 * b01 + a22 * b00) * inv_det,
            ],
        ])
    }

    /// Creates a 3D translation matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gpumath::*;
    /// let m = Mat4f::translation(vec3(2.0, 3.0, 4.0));
    /// assert_eq!(m.column(3), vec4(2.0, 3.0, 4.0, 1.0));
    /// assert_eq!(m.transform_point(Vec3f::ZERO), vec3(2.0, 3.0, 4.0));
    /// ```
    pub fn translation(v: Vec3<T>) -> Self
    where
        T: Number,
    {
        let mut out = Self::IDENTITY;
        out.set_translation(v);
        out
    }

    /// Composes a translation onto this matrix.
    ///
    /// Equivalent to `self * Mat4::translation(v)`: the translation is
    /// applied *before* whatever transform `self` performs.
    pub fn translated(self, v: Vec3<T>) -> Self
    where
        T: Number,
    {
        self * Self::translation(v)
    }

    /// Creates a rotation matrix around the X axis.
    ///
    /// The rotation follows the right-hand rule: looking from +X toward the
    /// origin, positive angles rotate counterclockwise (Y toward Z).
    pub fn rotation_x(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([
            [T::ONE, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, cos, sin, T::ZERO],
            [T::ZERO, -sin, cos, T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Composes a rotation around the X axis onto this matrix.
    pub fn rotated_x(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        self * Self::rotation_x(radians)
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([
            [cos, T::ZERO, -sin, T::ZERO],
            [T::ZERO, T::ONE, T::ZERO, T::ZERO],
            [sin, T::ZERO, cos, T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Composes a rotation around the Y axis onto this matrix.
    pub fn rotated_y(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        self * Self::rotation_y(radians)
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn rotation_z(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([
            [cos, sin, T::ZERO, T::ZERO],
            [-sin, cos, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE, T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Composes a rotation around the Z axis onto this matrix.
    pub fn rotated_z(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        self * Self::rotation_z(radians)
    }

    /// Creates a rotation matrix around an arbitrary axis.
    ///
    /// The axis does not need to be normalized.
    pub fn axis_rotation(axis: Vec3<T>, radians: T) -> Self
    where
        T: Float,
    {
        let [x, y, z] = axis.normalize().into_array();
        let (sin, cos) = radians.sin_cos();
        let omc = T::ONE - cos;

        Self::from_columns([
            [
                x * x * omc + cos,
                x * y * omc + z * sin,
                x * z * omc - y * sin,
                T::ZERO,
            ],
            [
                x * y * omc - z * sin,
                y * y * omc + cos,
                y * z * omc + x * sin,
                T::ZERO,
            ],
            [
                x * z * omc + y * sin,
                y * z * omc - x * sin,
                z * z * omc + cos,
                T::ZERO,
            ],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Composes a rotation around an arbitrary axis onto this matrix.
    pub fn axis_rotated(self, axis: Vec3<T>, radians: T) -> Self
    where
        T: Float,
    {
        self * Self::axis_rotation(axis, radians)
    }

    /// Creates a scaling matrix.
    pub fn scaling(v: Vec3<T>) -> Self
    where
        T: Number,
    {
        Self::from_diagonal(v.extend(T::ONE))
    }

    /// Composes a scale onto this matrix.
    pub fn scaled(self, v: Vec3<T>) -> Self
    where
        T: Number,
    {
        self * Self::scaling(v)
    }

    /// Creates a scaling matrix that scales all three axes by `scale`.
    pub fn uniform_scaling(scale: T) -> Self
    where
        T: Number,
    {
        Self::scaling(Vector::splat(scale))
    }

    /// Returns the translation component of this matrix.
    pub fn translation_part(&self) -> Vec3<T>
    where
        T: Copy,
    {
        vec3(self.0[12], self.0[13], self.0[14])
    }

    /// Replaces the translation component of this matrix.
    ///
    /// The homogeneous element in the translation column is reset to 1, so
    /// the result is a proper affine transform.
    pub fn set_translation(&mut self, v: Vec3<T>)
    where
        T: Number,
    {
        let [x, y, z] = v.into_array();
        self.0[12] = x;
        self.0[13] = y;
        self.0[14] = z;
        self.0[15] = T::ONE;
    }

    /// Returns the scale that this matrix applies, per axis.
    pub fn scaling_part(&self) -> Vec3<T>
    where
        T: Number + Sqrt,
    {
        vec3(
            self.column(0).truncate().length(),
            self.column(1).truncate().length(),
            self.column(2).truncate().length(),
        )
    }

    /// Transforms a 3D point by this matrix.
    ///
    /// The point is extended with `w = 1`, transformed, and divided by the
    /// resulting `w` (so this also works for projection matrices). A
    /// resulting `w` of exactly zero is treated as 1 instead of producing an
    /// all-infinite point.
    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T>
    where
        T: Number,
    {
        let [x, y, z] = point.into_array();
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.0;

        let mut w = a03 * x + a13 * y + a23 * z + a33;
        if w == T::ZERO {
            w = T::ONE;
        }

        vec3(
            (a00 * x + a10 * y + a20 * z + a30) / w,
            (a01 * x + a11 * y + a21 * z + a31) / w,
            (a02 * x + a12 * y + a22 * z + a32) / w,
        )
    }

    /// Transforms a 3D direction vector by this matrix.
    ///
    /// Only the upper-left 3x3 part participates; the translation component
    /// does not apply to directions.
    pub fn transform_vector(&self, vector: Vec3<T>) -> Vec3<T>
    where
        T: Number,
    {
        let [x, y, z] = vector.into_array();
        let [a00, a01, a02, _, a10, a11, a12, _, a20, a21, a22, _, _, _, _, _] = self.0;

        vec3(
            a00 * x + a10 * y + a20 * z,
            a01 * x + a11 * y + a21 * z,
            a02 * x + a12 * y + a22 * z,
        )
    }

    /// Creates a perspective projection matrix.
    ///
    /// - `fov_y`: full vertical field of view, in radians.
    /// - `aspect`: viewport width divided by height.
    /// - `z_near`, `z_far`: distances of the clip planes along -Z. Both must
    ///   be positive; `z_far` may be [infinite](Float::INFINITY).
    ///
    /// The resulting matrix maps the view frustum to WebGPU clip space:
    /// X and Y in -1..1, depth in 0..1 with depth 0 at the near plane and
    /// depth 1 at the far plane.
    ///
    /// An infinite far plane is special-cased rather than evaluated with
    /// infinity arithmetic (which would produce `NaN` terms): the depth
    /// mapping degenerates to `z_near / -z`, which is 0 at the near plane
    /// and approaches 1 as points recede to infinity.
    pub fn perspective(fov_y: T, aspect: T, z_near: T, z_far: T) -> Self
    where
        T: Float,
    {
        let one_half = T::from_f64(0.5);
        let focal = T::ONE / (fov_y * one_half).tan();

        let mut out = Self::ZERO;
        out.0[0] = focal / aspect;
        out.0[5] = focal;
        out.0[11] = -T::ONE;
        if z_far.is_finite() {
            let range_inv = T::ONE / (z_near - z_far);
            out.0[10] = z_far * range_inv;
            out.0[14] = z_far * z_near * range_inv;
        } else {
            out.0[10] = -T::ONE;
            out.0[14] = -z_near;
        }
        out
    }

    /// Creates an orthographic projection matrix.
    ///
    /// Maps the axis-aligned box given by `left`/`right`, `bottom`/`top`,
    /// and the clip plane distances `z_near`/`z_far` (along -Z) to WebGPU
    /// clip space: X and Y in -1..1, depth in 0..1.
    pub fn ortho(left: T, right: T, bottom: T, top: T, z_near: T, z_far: T) -> Self
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;

        let mut out = Self::ZERO;
        out.0[0] = two / (right - left);
        out.0[5] = two / (top - bottom);
        out.0[10] = T::ONE / (z_near - z_far);
        out.0[12] = (right + left) / (left - right);
        out.0[13] = (top + bottom) / (bottom - top);
        out.0[14] = z_near / (z_near - z_far);
        out.0[15] = T::ONE;
        out
    }

    /// Creates a perspective projection matrix from an explicit, possibly
    /// asymmetric, frustum.
    ///
    /// `left`/`right` and `bottom`/`top` describe the frustum cross-section
    /// at the near plane. For a symmetric frustum this is equivalent to
    /// [`Mat4::perspective`].
    pub fn frustum(left: T, right: T, bottom: T, top: T, z_near: T, z_far: T) -> Self
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        let dx = right - left;
        let dy = top - bottom;
        let dz = z_near - z_far;

        let mut out = Self::ZERO;
        out.0[0] = two * z_near / dx;
        out.0[5] = two * z_near / dy;
        out.0[8] = (left + right) / dx;
        out.0[9] = (top + bottom) / dy;
        out.0[10] = z_far / dz;
        out.0[11] = -T::ONE;
        out.0[14] = z_near * z_far / dz;
        out
    }

    /// Creates a view matrix: the transform that moves the world into a
    /// camera's coordinate system.
    ///
    /// The camera sits at `eye` and looks at `target`; `up` picks the roll
    /// angle. In the resulting space, `eye` is at the origin and the view
    /// direction is -Z.
    ///
    /// This is the inverse of [`Mat4::camera_aim`].
    pub fn look_at(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self
    where
        T: Float,
    {
        let z_axis = (eye - target).normalize();
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis).normalize();

        Self::from_rows([
            x_axis.extend(-x_axis.dot(eye)),
            y_axis.extend(-y_axis.dot(eye)),
            z_axis.extend(-z_axis.dot(eye)),
            vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
        ])
    }

    /// Creates a model matrix that positions an object at `position`, with
    /// its +Z axis pointing at `target`.
    ///
    /// Useful for objects that should face something, e.g. a turret
    /// tracking a target or a billboard facing a point.
    pub fn aim(position: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self
    where
        T: Float,
    {
        let z_axis = (target - position).normalize();
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis).normalize();

        Self::from_columns([
            x_axis.extend(T::ZERO),
            y_axis.extend(T::ZERO),
            z_axis.extend(T::ZERO),
            position.extend(T::ONE),
        ])
    }

    /// Creates a model matrix that positions a camera at `position`, looking
    /// at `target`.
    ///
    /// Cameras look down their -Z axis, so this aims *away* from the target;
    /// otherwise it behaves like [`Mat4::aim`]. The inverse of the result is
    /// the view matrix produced by [`Mat4::look_at`].
    pub fn camera_aim(position: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self
    where
        T: Float,
    {
        let z_axis = (position - target).normalize();
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis).normalize();

        Self::from_columns([
            x_axis.extend(T::ZERO),
            y_axis.extend(T::ZERO),
            z_axis.extend(T::ZERO),
            position.extend(T::ONE),
        ])
    }
}

impl<T: Zero> Default for Mat3<T> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Zero> Default for Mat4<T> {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::{assert_approx_eq, Quat, Vec2f, Vec3f};

    use super::*;

    fn random_unit() -> f32 {
        fastrand::f32() * 2.0 - 1.0
    }

    /// A random, comfortably invertible affine transform.
    fn random_transform() -> Mat4f {
        Mat4::translation(vec3(random_unit(), random_unit(), random_unit()) * 5.0)
            .rotated_x(random_unit() * TAU)
            .rotated_y(random_unit() * TAU)
            .rotated_z(random_unit() * TAU)
            .scaled(vec3(1.0, 1.0, 1.0) + vec3(random_unit(), random_unit(), random_unit()) * 0.5)
    }

    fn assert_padding_zero(m: &Mat3f) {
        assert_eq!(m.as_slice()[3], 0.0);
        assert_eq!(m.as_slice()[7], 0.0);
        assert_eq!(m.as_slice()[11], 0.0);
    }

    #[test]
    fn fmt() {
        let mat = Mat3::from_rows([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(format!("{:?}", mat), "[[0, 1, 2], [3, 4, 5], [6, 7, 8]]");
    }

    #[test]
    fn indexing() {
        let mat = Mat4::from_rows([
            [0, 1, 2, 3],
            [4, 5, 6, 7],
            [8, 9, 10, 11],
            [12, 13, 14, 15],
        ]);
        assert_eq!(mat[(0, 0)], 0);
        assert_eq!(mat[(0, 3)], 3);
        assert_eq!(mat[(3, 0)], 12);
        assert_eq!(mat.row(1), vec4(4, 5, 6, 7));
        assert_eq!(mat.column(1), vec4(1, 5, 9, 13));

        let mat = Mat3::from_rows([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(mat[(2, 1)], 7);
        assert_eq!(mat.get(2, 2), Some(&8));
        assert_eq!(mat.get(3, 0), None);
        assert_eq!(mat.get(0, 3), None);
    }

    #[test]
    #[should_panic]
    fn mat3_index_rejects_padding() {
        let mat = Mat3f::IDENTITY;
        let _ = mat[(0, 3)];
    }

    #[test]
    fn mat3_padding_stays_zero() {
        let q = Quat::from_rotation_x(1.0f32);
        for m in [
            Mat3f::IDENTITY,
            Mat3::rotation(1.0),
            Mat3::rotation_x(2.5),
            Mat3::translation(vec2(3.0, -1.0)),
            Mat3::scaling(vec2(2.0, 0.5)),
            Mat3::from_quat(q),
            Mat3::from_quat(q).invert(),
            Mat3::rotation_y(0.5).transpose(),
            Mat3::rotation(1.0) * Mat3::translation(vec2(5.0, 6.0)),
            Mat3::rotation(1.0) * 4.0,
        ] {
            assert_padding_zero(&m);
        }
    }

    #[test]
    fn identity_is_multiplicative_neutral() {
        fastrand::seed(123);
        for _ in 0..20 {
            let m = random_transform();
            assert_approx_eq!(m * Mat4::IDENTITY, m);
            assert_approx_eq!(Mat4::IDENTITY * m, m);

            let m3 = Mat3::from_mat4(m);
            assert_approx_eq!(m3 * Mat3::IDENTITY, m3);
            assert_approx_eq!(Mat3::IDENTITY * m3, m3);
        }
    }

    #[test]
    fn transpose_involution() {
        let m = Mat4::from_rows([
            [0, 1, 2, 3],
            [4, 5, 6, 7],
            [8, 9, 10, 11],
            [12, 13, 14, 15],
        ]);
        assert_eq!(m.transpose().row(0), vec4(0, 4, 8, 12));
        assert_eq!(m.transpose().transpose(), m);

        let m = Mat3::from_rows([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(m.transpose().row(0), vec3(0, 3, 6));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);

        let m = Mat3::from_rows([[-2, -1, 2], [2, 1, 4], [-3, 3, -1]]);
        assert_eq!(m.determinant(), 54);
        assert_eq!(m.transpose().determinant(), 54);

        assert_approx_eq!(Mat4f::scaling(vec3(2.0, 3.0, 4.0)).determinant(), 24.0);
        assert_approx_eq!(Mat4f::rotation_y(1.234).determinant(), 1.0, tolerance = 1e-5);
        // The determinant is invariant under translation.
        let m = Mat4::scaling(vec3(2.0, 3.0, 4.0)).translated(vec3(7.0, -2.0, 9.0));
        assert_approx_eq!(m.determinant(), 24.0, tolerance = 1e-4);
    }

    #[test]
    fn invert_round_trips() {
        fastrand::seed(99);
        for _ in 0..50 {
            let m = random_transform();
            assert_approx_eq!(m.invert().invert(), m, tolerance = 1e-3);
            assert_approx_eq!(m * m.invert(), Mat4::IDENTITY, tolerance = 1e-4);
            assert_approx_eq!(m.invert() * m, Mat4::IDENTITY, tolerance = 1e-4);

            let m3 = Mat3::from_mat4(m);
            assert_approx_eq!(m3.invert().invert(), m3, tolerance = 1e-3);
            assert_approx_eq!(m3 * m3.invert(), Mat3::IDENTITY, tolerance = 1e-4);
        }
    }

    #[test]
    fn singular_inversion_is_non_finite() {
        // Not an error: mirrors what the equivalent shader code computes.
        let inverted = Mat4f::ZERO.invert();
        assert!(inverted.as_slice().iter().any(|elem| !elem.is_finite()));

        let inverted = Mat3f::from_diagonal([1.0, 1.0, 0.0]).invert();
        assert!(inverted.as_slice().iter().any(|elem| !elem.is_finite()));
    }

    #[test]
    fn translation_affects_points_not_vectors() {
        let m = Mat4::translation(vec3(2.0, 3.0, 4.0));
        assert_eq!(m.transform_point(vec3(1.0, 1.0, 1.0)), vec3(3.0, 4.0, 5.0));
        assert_eq!(m.transform_vector(vec3(1.0, 1.0, 1.0)), vec3(1.0, 1.0, 1.0));

        let m = Mat3::translation(vec2(2.0, 3.0));
        assert_eq!(m.transform_point(vec2(1.0, 1.0)), vec2(3.0, 4.0));
        assert_eq!(m.transform_vector(vec2(1.0, 1.0)), vec2(1.0, 1.0));
    }

    #[test]
    fn rotations_follow_right_hand_rule() {
        let quarter = TAU / 4.0;
        assert_approx_eq!(Mat4::rotation_x(quarter).transform_vector(Vec3f::Y), Vec3f::Z);
        assert_approx_eq!(Mat4::rotation_y(quarter).transform_vector(Vec3f::Z), Vec3f::X);
        assert_approx_eq!(Mat4::rotation_z(quarter).transform_vector(Vec3f::X), Vec3f::Y);

        assert_approx_eq!(
            Mat3::rotation(quarter).transform_vector(Vec2f::X),
            Vec2f::Y
        );
        assert_approx_eq!(
            Mat3::rotation_x(quarter) * Vec3f::Y,
            Vec3f::Z
        );
    }

    #[test]
    fn axis_rotation_matches_fixed_axes() {
        for radians in [0.0f32, 0.5, 2.0, -1.2] {
            assert_approx_eq!(
                Mat4::axis_rotation(Vec3f::X, radians),
                Mat4::rotation_x(radians)
            );
            assert_approx_eq!(
                Mat4::axis_rotation(Vec3f::Y * 3.0, radians),
                Mat4::rotation_y(radians)
            );
            assert_approx_eq!(
                Mat4::axis_rotation(Vec3f::Z, radians),
                Mat4::rotation_z(radians)
            );
        }
    }

    #[test]
    fn composition_order() {
        // `translated` composes on the right: scale-then-translate moves the
        // scaled point, translate-then-scale scales the offset too.
        let m = Mat4::scaling(vec3(2.0, 2.0, 2.0)).translated(vec3(1.0, 0.0, 0.0));
        assert_approx_eq!(m.transform_point(Vec3f::ZERO), vec3(2.0, 0.0, 0.0));

        let m = Mat4::translation(vec3(1.0, 0.0, 0.0)).scaled(vec3(2.0, 2.0, 2.0));
        assert_approx_eq!(m.transform_point(Vec3f::ZERO), vec3(1.0, 0.0, 0.0));
        assert_approx_eq!(m.transform_point(Vec3f::X), vec3(3.0, 0.0, 0.0));
    }

    #[test]
    fn decomposition_accessors() {
        let m = Mat4::translation(vec3(2.0, 3.0, 4.0))
            .rotated_y(0.7)
            .scaled(vec3(2.0, 3.0, 4.0));
        assert_eq!(m.translation_part(), vec3(2.0, 3.0, 4.0));
        assert_approx_eq!(m.scaling_part(), vec3(2.0, 3.0, 4.0), tolerance = 1e-5);

        let mut m = Mat4f::IDENTITY;
        m.set_translation(vec3(5.0, 6.0, 7.0));
        assert_eq!(m, Mat4::translation(vec3(5.0, 6.0, 7.0)));

        let m3 = Mat3::translation(vec2(5.0, 6.0)).rotated(0.3).scaled(vec2(2.0, 3.0));
        assert_eq!(m3.translation_part(), vec2(5.0, 6.0));
        assert_approx_eq!(m3.scaling_part(), vec2(2.0, 3.0), tolerance = 1e-5);
    }

    #[test]
    fn mat3_mat4_round_trip() {
        let m3 = Mat3::rotation_x(0.5) * Mat3::rotation_y(1.25);
        assert_approx_eq!(Mat3::from_mat4(Mat4::from_mat3(m3)), m3);

        let m4 = Mat4::from_mat3(m3);
        assert_eq!(m4.column(3), vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(m4.row(3), vec4(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn perspective_depth_range() {
        let m = Mat4::perspective(TAU / 8.0, 16.0 / 9.0, 0.5, 100.0);
        assert_approx_eq!(m.transform_point(vec3(0.0, 0.0, -0.5)).z, 0.0, tolerance = 1e-5);
        assert_approx_eq!(m.transform_point(vec3(0.0, 0.0, -100.0)).z, 1.0, tolerance = 1e-5);
        // Depth is nonlinear: halfway is far beyond 0.5.
        let mid = m.transform_point(vec3(0.0, 0.0, -50.0)).z;
        assert!(mid > 0.9 && mid < 1.0);
    }

    #[test]
    fn perspective_infinite_far_plane() {
        let m = Mat4::perspective(TAU / 8.0, 1.0, 0.5, f32::INFINITY);
        assert!(m.as_slice().iter().all(|elem| elem.is_finite()));
        assert_approx_eq!(m.transform_point(vec3(0.0, 0.0, -0.5)).z, 0.0, tolerance = 1e-5);

        // Depth approaches (but never reaches) 1 as points recede.
        let far = m.transform_point(vec3(0.0, 0.0, -1e6)).z;
        assert!(far > 0.999 && far <= 1.0);
        assert!(m.transform_point(vec3(0.0, 0.0, -10.0)).z < far);
    }

    #[test]
    fn perspective_field_of_view() {
        // With a 90° vertical fov, y = |z| lands exactly on the top clip edge.
        let m = Mat4::perspective(TAU / 4.0, 1.0, 0.1, 100.0);
        assert_approx_eq!(m.transform_point(vec3(0.0, 5.0, -5.0)).y, 1.0, tolerance = 1e-5);
        assert_approx_eq!(m.transform_point(vec3(0.0, -5.0, -5.0)).y, -1.0, tolerance = 1e-5);

        // Doubling the aspect ratio halves the horizontal extent.
        let m = Mat4::perspective(TAU / 4.0, 2.0, 0.1, 100.0);
        assert_approx_eq!(m.transform_point(vec3(10.0, 0.0, -5.0)).x, 1.0, tolerance = 1e-5);
    }

    #[test]
    fn frustum_matches_symmetric_perspective() {
        let (fov_y, aspect, near, far) = (TAU / 6.0, 16.0 / 9.0, 0.25, 64.0);
        let top = near * (fov_y / 2.0).tan();
        let right = top * aspect;
        assert_approx_eq!(
            Mat4::frustum(-right, right, -top, top, near, far),
            Mat4::perspective(fov_y, aspect, near, far),
            tolerance = 1e-5,
        );
    }

    #[test]
    fn ortho_maps_box_corners() {
        let m = Mat4::ortho(-4.0, 4.0, -1.0, 3.0, 2.0, 10.0);
        assert_approx_eq!(
            m.transform_point(vec3(-4.0, -1.0, -2.0)),
            vec3(-1.0, -1.0, 0.0)
        );
        assert_approx_eq!(
            m.transform_point(vec3(4.0, 3.0, -10.0)),
            vec3(1.0, 1.0, 1.0)
        );
        assert_approx_eq!(m.transform_point(vec3(0.0, 1.0, -6.0)), vec3(0.0, 0.0, 0.5));
    }

    #[test]
    fn look_at_moves_world_into_view_space() {
        let eye = vec3(3.0, 4.0, 5.0);
        let target = vec3(0.0, 0.0, 0.0);
        let m = Mat4::look_at(eye, target, Vec3f::Y);

        assert_approx_eq!(m.transform_point(eye), Vec3f::ZERO, tolerance = 1e-4);
        // The target ends up straight ahead, on the -Z axis.
        let viewed = m.transform_point(target);
        assert_approx_eq!(viewed.x, 0.0, tolerance = 1e-4);
        assert_approx_eq!(viewed.y, 0.0, tolerance = 1e-4);
        assert_approx_eq!(viewed.z, -eye.length(), tolerance = 1e-4);
    }

    #[test]
    fn camera_aim_inverts_look_at() {
        let eye = vec3(3.0, -2.0, 5.0);
        let target = vec3(1.0, 1.0, 1.0);
        let view = Mat4::look_at(eye, target, Vec3f::Y);
        let camera = Mat4::camera_aim(eye, target, Vec3f::Y);
        assert_approx_eq!(view * camera, Mat4::IDENTITY, tolerance = 1e-5);
        assert_approx_eq!(camera, view.invert(), tolerance = 1e-4);
    }

    #[test]
    fn aim_points_object_z_at_target() {
        let position = vec3(1.0, 2.0, 3.0);
        let target = vec3(4.0, -1.0, 0.5);
        let m = Mat4::aim(position, target, Vec3f::Y);

        assert_approx_eq!(m.transform_point(Vec3f::ZERO), position, tolerance = 1e-5);
        let distance = position.distance(target);
        assert_approx_eq!(
            m.transform_point(vec3(0.0, 0.0, distance)),
            target,
            tolerance = 1e-4,
        );
    }

    #[test]
    fn mul_assign_matches_mul() {
        fastrand::seed(7);
        for _ in 0..20 {
            let a = random_transform();
            let b = random_transform();
            let mut m = a;
            m *= b;
            assert_eq!(m, a * b);

            let (a3, b3) = (Mat3::from_mat4(a), Mat3::from_mat4(b));
            let mut m3 = a3;
            m3 *= b3;
            assert_eq!(m3, a3 * b3);
        }
    }

    #[test]
    fn matrix_vector_products() {
        let m = Mat3::from_rows([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(m * vec3(1, 2, 3), vec3(8, 26, 44));

        let m = Mat4::translation(vec3(1.0, 2.0, 3.0));
        assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));
        // With w = 0, the translation column does not contribute.
        assert_eq!(m * vec4(5.0, 0.0, 0.0, 0.0), vec4(5.0, 0.0, 0.0, 0.0));
    }
}
