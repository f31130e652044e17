use core::array;
use core::ops::{
    Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_traits::Zero;

use crate::error::Result;
use crate::vector::Vector;

/// A position in N-dimensional space.
///
/// `Coord` wraps a [`Vector`] and exposes its whole surface through
/// `Deref` (indexing, `square`, conversions), adding named accessors
/// for the 2-, 3- and 4-dimensional cases. The accessors alias the
/// underlying storage: writing through [`Coord::x_mut`] is observably
/// identical to writing index 0. Dimensions outside 2..=4 simply have
/// no named accessors; calling `z()` on a `Coord<T, 2>` does not
/// compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord<T, const N: usize> {
    vector: Vector<T, N>,
}

/// Creates a 2-D coordinate from its components.
#[must_use]
pub const fn coord2<T>(x: T, y: T) -> Coord<T, 2> {
    Coord::new([x, y])
}

/// Creates a 3-D coordinate from its components.
#[must_use]
pub const fn coord3<T>(x: T, y: T, z: T) -> Coord<T, 3> {
    Coord::new([x, y, z])
}

/// Creates a 4-D coordinate from its components.
#[must_use]
pub const fn coord4<T>(x: T, y: T, z: T, w: T) -> Coord<T, 4> {
    Coord::new([x, y, z, w])
}

impl<T, const N: usize> Coord<T, N> {
    /// Creates a coordinate from exactly `N` components.
    #[must_use]
    pub const fn new(components: [T; N]) -> Self {
        Self {
            vector: Vector::new(components),
        }
    }

    /// Creates a coordinate from a runtime slice, validating its length.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConstructionError::ComponentCountMismatch`]
    /// if the slice does not hold exactly `N` values.
    pub fn from_slice(values: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        Ok(Self {
            vector: Vector::from_slice(values)?,
        })
    }

    /// Returns the underlying vector.
    #[must_use]
    pub const fn as_vector(&self) -> &Vector<T, N> {
        &self.vector
    }

    /// Returns the underlying vector mutably.
    pub fn as_vector_mut(&mut self) -> &mut Vector<T, N> {
        &mut self.vector
    }

    /// Consumes the coordinate, returning the underlying vector.
    #[must_use]
    pub fn into_vector(self) -> Vector<T, N> {
        self.vector
    }
}

impl<T: Zero + Copy, const N: usize> Coord<T, N> {
    /// Returns the origin, with every component set to zero.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            vector: Vector::zero(),
        }
    }
}

impl<T: Zero + Copy, const N: usize> Default for Coord<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> Deref for Coord<T, N> {
    type Target = Vector<T, N>;

    fn deref(&self) -> &Vector<T, N> {
        &self.vector
    }
}

impl<T, const N: usize> DerefMut for Coord<T, N> {
    fn deref_mut(&mut self) -> &mut Vector<T, N> {
        &mut self.vector
    }
}

impl<T, const N: usize> From<Vector<T, N>> for Coord<T, N> {
    fn from(vector: Vector<T, N>) -> Self {
        Self { vector }
    }
}

impl<T, const N: usize> From<Coord<T, N>> for Vector<T, N> {
    fn from(coord: Coord<T, N>) -> Self {
        coord.vector
    }
}

impl<T, const N: usize> From<[T; N]> for Coord<T, N> {
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

// Named accessors, aliasing indices 0..=3 of the backing storage.

impl<T> Coord<T, 2> {
    /// First component.
    #[must_use]
    pub fn x(&self) -> &T {
        &self.vector[0]
    }

    /// First component, mutably.
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.vector[0]
    }

    /// Second component.
    #[must_use]
    pub fn y(&self) -> &T {
        &self.vector[1]
    }

    /// Second component, mutably.
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.vector[1]
    }
}

impl<T> Coord<T, 3> {
    /// First component.
    #[must_use]
    pub fn x(&self) -> &T {
        &self.vector[0]
    }

    /// First component, mutably.
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.vector[0]
    }

    /// Second component.
    #[must_use]
    pub fn y(&self) -> &T {
        &self.vector[1]
    }

    /// Second component, mutably.
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.vector[1]
    }

    /// Third component.
    #[must_use]
    pub fn z(&self) -> &T {
        &self.vector[2]
    }

    /// Third component, mutably.
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.vector[2]
    }
}

impl<T> Coord<T, 4> {
    /// First component.
    #[must_use]
    pub fn x(&self) -> &T {
        &self.vector[0]
    }

    /// First component, mutably.
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.vector[0]
    }

    /// Second component.
    #[must_use]
    pub fn y(&self) -> &T {
        &self.vector[1]
    }

    /// Second component, mutably.
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.vector[1]
    }

    /// Third component.
    #[must_use]
    pub fn z(&self) -> &T {
        &self.vector[2]
    }

    /// Third component, mutably.
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.vector[2]
    }

    /// Fourth component.
    #[must_use]
    pub fn w(&self) -> &T {
        &self.vector[3]
    }

    /// Fourth component, mutably.
    pub fn w_mut(&mut self) -> &mut T {
        &mut self.vector[3]
    }
}

impl<T: Neg, const N: usize> Neg for Coord<T, N> {
    type Output = Coord<<T as Neg>::Output, N>;

    fn neg(self) -> Self::Output {
        Coord {
            vector: -self.vector,
        }
    }
}

// Operators delegate to the vector engine and re-wrap, so a coordinate
// supports the same elementwise arithmetic as a vector.
macro_rules! impl_coord_op {
    ($trait:ident, $method:ident) => {
        impl<T, U, const N: usize> $trait<Coord<U, N>> for Coord<T, N>
        where
            T: $trait<U> + Copy,
            U: Copy,
        {
            type Output = Coord<<T as $trait<U>>::Output, N>;

            fn $method(self, rhs: Coord<U, N>) -> Self::Output {
                Coord {
                    vector: self.vector.$method(rhs.vector),
                }
            }
        }
    };
}

impl_coord_op!(Add, add);
impl_coord_op!(Sub, sub);
impl_coord_op!(Mul, mul);
impl_coord_op!(Div, div);

macro_rules! impl_coord_assign {
    ($trait:ident, $method:ident) => {
        impl<T, U, const N: usize> $trait<Coord<U, N>> for Coord<T, N>
        where
            T: $trait<U>,
        {
            fn $method(&mut self, rhs: Coord<U, N>) {
                self.vector.$method(rhs.vector);
            }
        }
    };
}

impl_coord_assign!(AddAssign, add_assign);
impl_coord_assign!(SubAssign, sub_assign);
impl_coord_assign!(MulAssign, mul_assign);
impl_coord_assign!(DivAssign, div_assign);

macro_rules! impl_coord_broadcast {
    ($($scalar:ty)*) => {$(
        impl_coord_broadcast_op!($scalar, Add, add);
        impl_coord_broadcast_op!($scalar, Sub, sub);
        impl_coord_broadcast_op!($scalar, Mul, mul);
        impl_coord_broadcast_op!($scalar, Div, div);
        impl_coord_broadcast_assign!($scalar, AddAssign, add_assign);
        impl_coord_broadcast_assign!($scalar, SubAssign, sub_assign);
        impl_coord_broadcast_assign!($scalar, MulAssign, mul_assign);
        impl_coord_broadcast_assign!($scalar, DivAssign, div_assign);
    )*};
}

macro_rules! impl_coord_broadcast_op {
    ($scalar:ty, $trait:ident, $method:ident) => {
        impl<T, const N: usize> $trait<$scalar> for Coord<T, N>
        where
            T: $trait<$scalar> + Copy,
        {
            type Output = Coord<<T as $trait<$scalar>>::Output, N>;

            fn $method(self, rhs: $scalar) -> Self::Output {
                Coord {
                    vector: self.vector.$method(rhs),
                }
            }
        }

        impl<T, const N: usize> $trait<Coord<T, N>> for $scalar
        where
            $scalar: $trait<T> + Copy,
            T: Copy,
        {
            type Output = Coord<<$scalar as $trait<T>>::Output, N>;

            fn $method(self, rhs: Coord<T, N>) -> Self::Output {
                Coord {
                    vector: Vector::new(array::from_fn(|i| self.$method(rhs.vector[i]))),
                }
            }
        }
    };
}

macro_rules! impl_coord_broadcast_assign {
    ($scalar:ty, $trait:ident, $method:ident) => {
        impl<T, const N: usize> $trait<$scalar> for Coord<T, N>
        where
            T: $trait<$scalar>,
        {
            fn $method(&mut self, rhs: $scalar) {
                self.vector.$method(rhs);
            }
        }
    };
}

impl_coord_broadcast!(f32 f64 i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
