use core::array;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_traits::Zero;

use crate::error::{ConstructionError, Result};

/// A fixed-dimension vector of `N` numeric components.
///
/// Storage is a plain `[T; N]`; copying produces an independent value
/// and no two vectors ever share storage. The dimension is part of the
/// type, so mixing dimensions in any binary operation is rejected at
/// compile time.
///
/// Arithmetic is elementwise. Binary operators accept another vector of
/// the same dimension or a primitive scalar (broadcast against every
/// component), and the result component type follows the component
/// types' own `Op` impl, so promotion across mixed component types is
/// whatever those types define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    components: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    /// Number of components, as a type-level constant.
    pub const DIMENSION: usize = N;

    /// Creates a vector from exactly `N` components.
    #[must_use]
    pub const fn new(components: [T; N]) -> Self {
        Self { components }
    }

    /// Creates a vector from a runtime slice, validating its length.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ComponentCountMismatch`] if the
    /// slice does not hold exactly `N` values. The slice is never
    /// truncated or padded.
    pub fn from_slice(values: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        let components: [T; N] =
            values
                .try_into()
                .map_err(|_| ConstructionError::ComponentCountMismatch {
                    expected: N,
                    supplied: values.len(),
                })?;
        Ok(Self { components })
    }

    /// Returns the number of components.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        N
    }

    /// Returns the components as an array reference.
    #[must_use]
    pub const fn as_array(&self) -> &[T; N] {
        &self.components
    }
}

impl<T: Zero + Copy, const N: usize> Vector<T, N> {
    /// Returns the vector with every component set to zero.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            components: [T::zero(); N],
        }
    }
}

impl<T: Zero + Copy, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(components: [T; N]) -> Self {
        Self { components }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(vector: Vector<T, N>) -> Self {
        vector.components
    }
}

/// Component access. The index must be in `0..N`; anything outside
/// panics, as with array indexing.
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components[index]
    }
}

impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        Vector {
            components: self.components.map(T::neg),
        }
    }
}

// Elementwise vector-vector operators. Equal dimension is enforced by
// the type parameter N; the output component type is whatever the
// component types' own impl produces.
macro_rules! impl_elementwise_op {
    ($trait:ident, $method:ident) => {
        impl<T, U, const N: usize> $trait<Vector<U, N>> for Vector<T, N>
        where
            T: $trait<U> + Copy,
            U: Copy,
        {
            type Output = Vector<<T as $trait<U>>::Output, N>;

            fn $method(self, rhs: Vector<U, N>) -> Self::Output {
                Vector {
                    components: array::from_fn(|i| self.components[i].$method(rhs.components[i])),
                }
            }
        }
    };
}

impl_elementwise_op!(Add, add);
impl_elementwise_op!(Sub, sub);
impl_elementwise_op!(Mul, mul);
impl_elementwise_op!(Div, div);

macro_rules! impl_elementwise_assign {
    ($trait:ident, $method:ident) => {
        impl<T, U, const N: usize> $trait<Vector<U, N>> for Vector<T, N>
        where
            T: $trait<U>,
        {
            fn $method(&mut self, rhs: Vector<U, N>) {
                for (lhs, rhs) in self.components.iter_mut().zip(rhs.components) {
                    lhs.$method(rhs);
                }
            }
        }
    };
}

impl_elementwise_assign!(AddAssign, add_assign);
impl_elementwise_assign!(SubAssign, sub_assign);
impl_elementwise_assign!(MulAssign, mul_assign);
impl_elementwise_assign!(DivAssign, div_assign);

// Scalar broadcasting. A blanket `impl Add<U> for Vector<T, N>` over
// every scalar U would overlap the vector-vector impl above, so the
// broadcast impls are generated per primitive scalar type instead.
macro_rules! impl_broadcast_op {
    ($scalar:ty, $trait:ident, $method:ident) => {
        impl<T, const N: usize> $trait<$scalar> for Vector<T, N>
        where
            T: $trait<$scalar> + Copy,
        {
            type Output = Vector<<T as $trait<$scalar>>::Output, N>;

            fn $method(self, rhs: $scalar) -> Self::Output {
                Vector {
                    components: array::from_fn(|i| self.components[i].$method(rhs)),
                }
            }
        }

        impl<T, const N: usize> $trait<Vector<T, N>> for $scalar
        where
            $scalar: $trait<T>,
            T: Copy,
        {
            type Output = Vector<<$scalar as $trait<T>>::Output, N>;

            fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                Vector {
                    components: array::from_fn(|i| self.$method(rhs.components[i])),
                }
            }
        }
    };
}

macro_rules! impl_broadcast_assign {
    ($scalar:ty, $trait:ident, $method:ident) => {
        impl<T, const N: usize> $trait<$scalar> for Vector<T, N>
        where
            T: $trait<$scalar>,
        {
            fn $method(&mut self, rhs: $scalar) {
                for component in &mut self.components {
                    component.$method(rhs);
                }
            }
        }
    };
}

macro_rules! impl_broadcast {
    ($($scalar:ty)*) => {$(
        impl_broadcast_op!($scalar, Add, add);
        impl_broadcast_op!($scalar, Sub, sub);
        impl_broadcast_op!($scalar, Mul, mul);
        impl_broadcast_op!($scalar, Div, div);
        impl_broadcast_assign!($scalar, AddAssign, add_assign);
        impl_broadcast_assign!($scalar, SubAssign, sub_assign);
        impl_broadcast_assign!($scalar, MulAssign, mul_assign);
        impl_broadcast_assign!($scalar, DivAssign, div_assign);
    )*};
}

impl_broadcast!(f32 f64 i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl<T, const N: usize> Vector<T, N>
where
    T: Mul<Output = T> + Zero + Copy,
{
    /// Returns the sum of the squares of all components (the squared
    /// Euclidean norm).
    #[must_use]
    pub fn square(&self) -> T {
        self.components
            .iter()
            .fold(T::zero(), |acc, &c| acc + c * c)
    }
}

/// Returns the dot product of two vectors of equal dimension.
///
/// The accumulator type is the product type of the two component
/// types, so mixed component types resolve through their `Mul` impl.
#[must_use]
pub fn dot<T, U, V, const N: usize>(lhs: &Vector<T, N>, rhs: &Vector<U, N>) -> V
where
    T: Mul<U, Output = V> + Copy,
    U: Copy,
    V: Zero,
{
    lhs.components
        .iter()
        .zip(rhs.components.iter())
        .fold(V::zero(), |acc, (&a, &b)| acc + a * b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CartesError, ConstructionError};

    const TOL: f64 = 1e-12;

    #[test]
    fn default_is_all_zeros() {
        let v: Vector<f64, 3> = Vector::default();
        assert_eq!(v, Vector::new([0.0, 0.0, 0.0]));
    }

    #[test]
    fn new_preserves_component_order() {
        let v = Vector::new([1, 2, 3, 4]);
        assert_eq!(v[0], 1);
        assert_eq!(v[1], 2);
        assert_eq!(v[2], 3);
        assert_eq!(v[3], 4);
    }

    #[test]
    fn from_slice_accepts_exact_length() {
        let v: Vector<i32, 3> = Vector::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(v, Vector::new([1, 2, 3]));
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        let err = Vector::<i32, 3>::from_slice(&[1, 2]).unwrap_err();
        assert_eq!(
            err,
            CartesError::Construction(ConstructionError::ComponentCountMismatch {
                expected: 3,
                supplied: 2,
            })
        );
    }

    #[test]
    fn indexed_write_is_observable() {
        let mut v = Vector::new([1.0, 2.0]);
        v[1] = 5.0;
        assert_eq!(v, Vector::new([1.0, 5.0]));
    }

    #[test]
    fn add_then_sub_round_trips() {
        let a: Vector<f64, 3> = Vector::new([1.0, 2.0, 3.0]);
        let b = Vector::new([4.0, -5.0, 6.0]);
        let r = a + b - b;
        for i in 0..3 {
            assert!((r[i] - a[i]).abs() < TOL, "component {i}");
        }
    }

    #[test]
    fn negation_is_an_involution() {
        let a = Vector::new([1.5, -2.5, 0.0]);
        assert_eq!(-(-a), a);
    }

    #[test]
    fn elementwise_mul_and_div() {
        let a = Vector::new([2.0, 6.0]);
        let b = Vector::new([4.0, 3.0]);
        assert_eq!(a * b, Vector::new([8.0, 18.0]));
        assert_eq!(a / b, Vector::new([0.5, 2.0]));
    }

    #[test]
    fn scalar_broadcast_on_the_right() {
        let a = Vector::new([1.0, 2.0, 3.0]);
        assert_eq!(a + 1.0, Vector::new([2.0, 3.0, 4.0]));
        assert_eq!(a - 1.0, Vector::new([0.0, 1.0, 2.0]));
        assert_eq!(a * 2.0, Vector::new([2.0, 4.0, 6.0]));
        assert_eq!(a / 2.0, Vector::new([0.5, 1.0, 1.5]));
    }

    #[test]
    fn scalar_broadcast_on_the_left() {
        let a = Vector::new([1.0, 2.0, 4.0]);
        assert_eq!(2.0 + a, Vector::new([3.0, 4.0, 6.0]));
        assert_eq!(2.0 * a, Vector::new([2.0, 4.0, 8.0]));
        assert_eq!(8.0 / a, Vector::new([8.0, 4.0, 2.0]));
        assert_eq!(1.0 - a, Vector::new([0.0, -1.0, -3.0]));
    }

    #[test]
    fn compound_assign_with_vector() {
        let mut a = Vector::new([1, 2, 3]);
        a += Vector::new([10, 20, 30]);
        assert_eq!(a, Vector::new([11, 22, 33]));
        a -= Vector::new([1, 2, 3]);
        assert_eq!(a, Vector::new([10, 20, 30]));
        a *= Vector::new([2, 2, 2]);
        assert_eq!(a, Vector::new([20, 40, 60]));
        a /= Vector::new([10, 10, 10]);
        assert_eq!(a, Vector::new([2, 4, 6]));
    }

    #[test]
    fn compound_assign_with_scalar() {
        let mut a = Vector::new([1.0, 2.0]);
        a *= 3.0;
        assert_eq!(a, Vector::new([3.0, 6.0]));
        a += 1.0;
        assert_eq!(a, Vector::new([4.0, 7.0]));
        a -= 2.0;
        assert_eq!(a, Vector::new([2.0, 5.0]));
        a /= 2.0;
        assert_eq!(a, Vector::new([1.0, 2.5]));
    }

    #[test]
    fn square_of_three_four_is_twenty_five() {
        let v: Vector<f64, 2> = Vector::new([3.0, 4.0]);
        assert!((v.square() - 25.0).abs() < TOL);
        let vi = Vector::new([3, 4]);
        assert_eq!(vi.square(), 25);
    }

    #[test]
    fn dot_is_commutative() {
        let a = Vector::new([1.0, -2.0, 3.0]);
        let b = Vector::new([4.0, 5.0, -6.0]);
        let ab: f64 = dot(&a, &b);
        let ba: f64 = dot(&b, &a);
        assert!((ab - ba).abs() < TOL);
    }

    #[test]
    fn square_equals_self_dot() {
        let a = Vector::new([1.5, -2.5, 4.0]);
        let d: f64 = dot(&a, &a);
        assert!((a.square() - d).abs() < TOL);
    }

    #[test]
    fn division_by_zero_component_follows_float_semantics() {
        let a: Vector<f64, 2> = Vector::new([1.0, -1.0]);
        let r = a / 0.0;
        assert_eq!(r[0], f64::INFINITY);
        assert_eq!(r[1], f64::NEG_INFINITY);
    }

    #[test]
    fn dimension_is_reported() {
        let v: Vector<i32, 4> = Vector::zero();
        assert_eq!(v.dimension(), 4);
        assert_eq!(Vector::<i32, 4>::DIMENSION, 4);
    }

    #[test]
    fn array_conversions_round_trip() {
        let v = Vector::from([1, 2, 3]);
        let back: [i32; 3] = v.into();
        assert_eq!(back, [1, 2, 3]);
    }
}
