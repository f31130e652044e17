use core::ops::{Mul, Neg, Sub};

use num_traits::{Num, NumCast, Zero};

use crate::coord::Coord;
use crate::error::Result;
use crate::scalar;

/// Returns the squared Euclidean distance between two coordinates of
/// equal dimension.
///
/// The component types may differ; they resolve through their `Sub`
/// impl exactly as elementwise subtraction does.
#[must_use]
pub fn square_distance<T, U, V, const N: usize>(a: Coord<T, N>, b: Coord<U, N>) -> V
where
    T: Sub<U, Output = V> + Copy,
    U: Copy,
    V: Mul<Output = V> + Zero + Copy,
{
    (a.into_vector() - b.into_vector()).square()
}

/// Returns the Euclidean distance between two coordinates of equal
/// dimension, using the crate's iterative [`scalar::sqrt`].
///
/// # Errors
///
/// Propagates the square-root domain contract. For real component
/// types the squared distance is never negative, so the error arm is
/// unreachable in practice; component types with exotic `Sub`/`Mul`
/// impls may still produce a negative square.
pub fn distance<T, U, V, const N: usize>(a: Coord<T, N>, b: Coord<U, N>) -> Result<V>
where
    T: Sub<U, Output = V> + Copy,
    U: Copy,
    V: Num + NumCast + PartialOrd + Neg<Output = V> + Copy,
{
    scalar::sqrt(square_distance(a, b))
}
