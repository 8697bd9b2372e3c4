//! Approximate equality.

mod impls;

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of
/// their components are. Comparisons are *absolute*: two values are equal if
/// the magnitude of their difference is at most the tolerance. This is the
/// right comparison for the values graphics code works with (coordinates,
/// matrix elements, quaternion components), which cluster around magnitude
/// one; it degrades for values many orders of magnitude away from that.
///
/// Non-finite values only compare equal to themselves: infinities of equal
/// sign are equal, and `NaN` is never equal to anything.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The scalar tolerance type, [`f32`] or [`f64`] depending on the
    /// underlying element type.
    type Tolerance: DefaultTolerance + Copy;

    /// Compares `self` and `other` with an explicit `tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// Compares `self` and `other` with the default tolerance
    /// ([`DefaultTolerance::TOLERANCE`]).
    fn approx_eq(&self, other: &Rhs) -> bool {
        self.abs_diff_eq(other, <Self::Tolerance as DefaultTolerance>::TOLERANCE)
    }
}

/// Supplies the tolerance used by [`ApproxEq::approx_eq`] and the
/// [`assert_approx_eq!`][crate::assert_approx_eq] macro when no explicit
/// tolerance is given.
pub trait DefaultTolerance {
    /// The default comparison tolerance.
    const TOLERANCE: Self;
}

impl DefaultTolerance for f32 {
    const TOLERANCE: Self = 1e-6;
}

impl DefaultTolerance for f64 {
    const TOLERANCE: Self = 1e-6;
}

/// Asserts that two expressions are approximately equal (via [`ApproxEq`]).
///
/// Functions like [`assert_eq!`], but compares with [`ApproxEq::approx_eq`].
/// Pass `tolerance = <value>` as the third argument to compare with an
/// explicit tolerance instead of the default.
///
/// Also see [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// # Examples
///
/// ```
/// # use gpumath::*;
/// let one = (0..10).fold(0.0f32, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// assert_approx_eq!(100.0, 99.0, tolerance = 1.0);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, tolerance = $tolerance:expr $(,)?) => {
        match (&$left, &$right, $tolerance) {
            (left, right, tolerance) => {
                if !$crate::approx::ApproxEq::abs_diff_eq(left, right, tolerance) {
                    panic!(
                        "assertion `left ≈ right` failed (tolerance {:?})\n  left: {:?}\n right: {:?}",
                        tolerance, left, right,
                    );
                }
            }
        }
    };
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if !$crate::approx::ApproxEq::approx_eq(left, right) {
                    panic!(
                        "assertion `left ≈ right` failed\n  left: {:?}\n right: {:?}",
                        left, right,
                    );
                }
            }
        }
    };
}

/// Asserts that two expressions are *not* approximately equal (via
/// [`ApproxEq`]).
///
/// Functions like [`assert_ne!`], but compares with [`ApproxEq::approx_eq`].
/// Pass `tolerance = <value>` as the third argument to compare with an
/// explicit tolerance instead of the default.
///
/// Also see [`assert_approx_eq!`][crate::assert_approx_eq].
///
/// # Examples
///
/// ```
/// # use gpumath::*;
/// assert_approx_ne!(100.0, 99.0);
/// assert_approx_ne!(100.0, 99.0, tolerance = 0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($left:expr, $right:expr, tolerance = $tolerance:expr $(,)?) => {
        match (&$left, &$right, $tolerance) {
            (left, right, tolerance) => {
                if $crate::approx::ApproxEq::abs_diff_eq(left, right, tolerance) {
                    panic!(
                        "assertion `left !≈ right` failed (tolerance {:?})\n  left: {:?}\n right: {:?}",
                        tolerance, left, right,
                    );
                }
            }
        }
    };
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if $crate::approx::ApproxEq::approx_eq(left, right) {
                    panic!(
                        "assertion `left !≈ right` failed\n  left: {:?}\n right: {:?}",
                        left, right,
                    );
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "assertion `left !≈ right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left ≈ right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    fn default_tolerance() {
        assert_approx_eq!(1.0f32, 1.0 + 1e-7);
        assert_approx_ne!(1.0f32, 1.0 + 1e-5);

        assert_approx_eq!(1.0f64, 1.0 + 1e-7);
        assert_approx_ne!(1.0f64, 1.0 + 1e-5);
    }

    #[test]
    fn explicit_tolerance() {
        assert_approx_eq!(100.0, 99.0, tolerance = 1.0);
        assert_approx_ne!(100.0, 99.0, tolerance = 0.99);
        assert_approx_eq!(-1.0, 1.0, tolerance = 2.0);
        assert_approx_eq!(-1.0, -1.0, tolerance = 0.0);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(f32::NAN, f32::NAN);
        assert_approx_ne!(f32::NAN, f32::NAN, tolerance = f32::INFINITY);
        assert_approx_ne!(f32::NAN, 0.0);
    }

    #[test]
    fn inf() {
        assert_approx_eq!(f32::INFINITY, f32::INFINITY, tolerance = 0.0);
        assert_approx_ne!(f32::INFINITY, f32::NEG_INFINITY, tolerance = f32::INFINITY);
        assert_approx_ne!(f32::INFINITY, f32::MAX, tolerance = f32::MAX);
        assert_approx_ne!(f64::INFINITY, f64::MAX, tolerance = f64::MAX);
        assert_approx_eq!(f64::NEG_INFINITY, f64::NEG_INFINITY);
    }

    #[test]
    fn arrays() {
        assert_approx_eq!([1.0, 2.0], [1.0, 2.0]);
        assert_approx_eq!([1.0, 2.0], [1.0, 2.5], tolerance = 0.5);
        assert_approx_ne!([1.0, 2.0], [1.0, 2.5], tolerance = 0.4);
    }
}
