use super::ApproxEq;

macro_rules! impl_approx_eq_float {
    ($($types:ty),+) => {
        $(
            impl ApproxEq for $types {
                type Tolerance = Self;

                fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        // `inf == inf`, `-inf == -inf`, `inf != -inf`, and
                        // `NaN` equals nothing.
                        return self == other;
                    }

                    (self - other).abs() <= tolerance
                }
            }
        )+
    };
}
impl_approx_eq_float!(f32, f64);

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &U, tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| T::abs_diff_eq(a, b, tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), tolerance)
    }
}
