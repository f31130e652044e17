use core::ops::Neg;

use num_traits::{Num, NumCast, Zero};

use crate::error::{NumericError, Result};

/// Convergence threshold used by [`sqrt`] when the caller does not supply one.
pub const DEFAULT_SQRT_THRESHOLD: f64 = 1e-3;

/// Hard bound on Newton-Raphson iterations in [`sqrt_with_threshold`].
///
/// If the threshold is never met (e.g. it is tighter than the component
/// type can represent), the best current estimate is returned once this
/// many iterations have run.
pub const MAX_SQRT_ITERATIONS: usize = 100;

/// Returns the absolute value of `value`.
#[must_use]
pub fn abs<T>(value: T) -> T
where
    T: Zero + PartialOrd + Neg<Output = T>,
{
    if value >= T::zero() {
        value
    } else {
        -value
    }
}

/// Approximates the square root of `value` by Newton-Raphson iteration,
/// converging to within [`DEFAULT_SQRT_THRESHOLD`].
///
/// The threshold is cast into `T`; for integral types it truncates to
/// zero, which makes the iteration run until two successive estimates
/// are equal (or the iteration bound is hit).
///
/// # Errors
///
/// Returns [`NumericError::NegativeSqrt`] if `value` is negative.
pub fn sqrt<T>(value: T) -> Result<T>
where
    T: Num + NumCast + PartialOrd + Neg<Output = T> + Copy,
{
    let threshold = NumCast::from(DEFAULT_SQRT_THRESHOLD).unwrap_or_else(T::zero);
    sqrt_with_threshold(value, threshold)
}

/// Approximates the square root of `value`, iterating until two
/// successive estimates differ by at most `threshold`.
///
/// Iteration is bounded by [`MAX_SQRT_ITERATIONS`]; if the bound is
/// reached without convergence the current estimate is returned.
///
/// # Errors
///
/// Returns [`NumericError::NegativeSqrt`] if `value` is negative.
pub fn sqrt_with_threshold<T>(value: T, threshold: T) -> Result<T>
where
    T: Num + PartialOrd + Neg<Output = T> + Copy,
{
    if value < T::zero() {
        return Err(NumericError::NegativeSqrt.into());
    }
    if value.is_zero() {
        return Ok(T::zero());
    }

    let two = T::one() + T::one();
    let mut guess = value / two;
    if guess.is_zero() {
        // Integral division floored the seed to zero; reseed with the
        // value itself so the loop never divides by zero.
        guess = value;
    }

    for _ in 0..MAX_SQRT_ITERATIONS {
        let next = (value / guess + guess) / two;
        if abs(next - guess) <= threshold {
            return Ok(next);
        }
        guess = next;
    }

    Ok(guess)
}
