// SPDX-License-Identifier: MPL-2.0

use core::fmt;
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

mod sealed {
    pub trait Sealed {}
}

/// An integer primitive that can represent a [`BitwiseEnum`](crate::BitwiseEnum).
///
/// This trait is sealed and implemented for the unsigned and signed integer primitives.
pub trait Primitive:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Binary
    + BitOr<Output = Self>
    + BitOrAssign
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
{
    /// The value with no bit set.
    const ZERO: Self;

    /// The bit-width of this primitive.
    const WIDTH: usize;
}

macro_rules! impl_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const ZERO: Self = 0;
                const WIDTH: usize = <$ty>::BITS as usize;
            }
        )*
    };
}

impl_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
