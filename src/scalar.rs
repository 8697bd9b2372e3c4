//! Scalar utility functions shared by the vector, matrix, and quaternion
//! operations.

use std::ops::{Add, Rem};

use crate::{
    approx::DefaultTolerance,
    traits::{Float, Number},
};

/// Converts an angle given in degrees to radians.
///
/// # Examples
///
/// ```
/// # use gpumath::*;
/// use std::f32::consts::PI;
///
/// assert_approx_eq!(degrees_to_radians(180.0f32), PI);
/// assert_approx_eq!(degrees_to_radians(90.0f32), PI / 2.0);
/// ```
pub fn degrees_to_radians<T: Float>(degrees: T) -> T {
    degrees * T::from_f64(std::f64::consts::PI / 180.0)
}

/// Converts an angle given in radians to degrees.
///
/// # Examples
///
/// ```
/// # use gpumath::*;
/// use std::f32::consts::PI;
///
/// assert_approx_eq!(radians_to_degrees(PI), 180.0, tolerance = 1e-4);
/// ```
pub fn radians_to_degrees<T: Float>(radians: T) -> T {
    radians * T::from_f64(180.0 / std::f64::consts::PI)
}

/// Linearly interpolates between `a` and `b` by the factor `t`.
///
/// The factor is *not* clamped: `t` outside of 0..1 extrapolates beyond the
/// endpoints.
///
/// # Examples
///
/// ```
/// # use gpumath::*;
/// assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
/// assert_eq!(lerp(10.0, 20.0, 2.0), 30.0);
/// assert_eq!(lerp(10.0, 20.0, -1.0), 0.0);
/// ```
pub fn lerp<T: Number>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Computes the interpolation factor that [`lerp`] would need to produce
/// `value` from the endpoints `a` and `b`.
///
/// When the endpoints are (nearly) identical there is no meaningful factor;
/// in that case `a` is returned instead of a division by near-zero producing
/// `NaN` or a huge value.
///
/// # Examples
///
/// ```
/// # use gpumath::*;
/// assert_eq!(inverse_lerp(10.0, 20.0, 15.0), 0.5);
/// assert_eq!(inverse_lerp(10.0, 20.0, 30.0), 2.0);
/// assert_eq!(inverse_lerp(5.0, 5.0, 30.0), 5.0);
/// ```
pub fn inverse_lerp<T: Float + DefaultTolerance>(a: T, b: T, value: T) -> T {
    let range = b - a;
    if range.abs() < T::TOLERANCE {
        a
    } else {
        (value - a) / range
    }
}

/// Euclidean modulo: the remainder of `value / modulus`, shifted into
/// `0..modulus`.
///
/// Unlike the `%` operator, the result is never negative for a positive
/// modulus, which is what angle-wrapping code wants.
///
/// # Examples
///
/// ```
/// # use gpumath::*;
/// assert_eq!(euclidean_mod(7, 4), 3);
/// assert_eq!(euclidean_mod(-1, 4), 3);
/// assert_eq!(euclidean_mod(-1.5, 1.0), 0.5);
/// ```
pub fn euclidean_mod<T>(value: T, modulus: T) -> T
where
    T: Add<Output = T> + Rem<Output = T> + Copy,
{
    ((value % modulus) + modulus) % modulus
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn angle_conversion_round_trips() {
        for degrees in [-720.0f32, -90.0, 0.0, 45.0, 360.5] {
            assert_approx_eq!(
                radians_to_degrees(degrees_to_radians(degrees)),
                degrees,
                tolerance = 1e-3,
            );
        }
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 8.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 8.0, 1.0), 8.0);
    }

    #[test]
    fn inverse_lerp_inverts_lerp() {
        for t in [-1.0f32, 0.0, 0.25, 1.0, 3.0] {
            assert_approx_eq!(inverse_lerp(2.0, 8.0, lerp(2.0, 8.0, t)), t);
        }
    }

    #[test]
    fn inverse_lerp_degenerate_range() {
        // A (near-)empty range yields the start value, not NaN.
        assert_eq!(inverse_lerp(3.0f32, 3.0, 100.0), 3.0);
        assert_eq!(inverse_lerp(3.0f32, 3.0 + 1e-8, 100.0), 3.0);
    }

    #[test]
    fn euclidean_mod_is_non_negative() {
        assert_eq!(euclidean_mod(-5, 3), 1);
        assert_eq!(euclidean_mod(5, 3), 2);
        assert_eq!(euclidean_mod(-3, 3), 0);
        assert_approx_eq!(euclidean_mod(-0.25f32, 1.0), 0.75);
    }
}
