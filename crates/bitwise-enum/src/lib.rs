// SPDX-License-Identifier: MPL-2.0

//! Opt-in bitwise operators for enums.
//!
//! Applying [`bitwise`] to a fieldless enum registers it with the [`BitwiseEnum`] trait and gives
//! it `|`, `&`, `^`, their compound-assignment forms, and `!`. Enums that are not registered keep
//! none of these, and registered enums can only be combined with themselves.
//!
//! ```
//! #[bitwise_enum::bitwise]
//! #[derive(Debug)]
//! enum Access {
//!     None = 0,
//!     Read = 0b01,
//!     Write = 0b10,
//! }
//!
//! let rw = Access::Read | Access::Write;
//! assert_eq!(rw & !Access::Write, Access::Read);
//! assert!(!rw.is_zero());
//! assert!(Access::None.is_zero());
//! ```
//!
//! Refer to the [`spec`] module for the full syntax and output of the macro.

#![no_std]

pub mod spec;

#[cfg(doctest)]
mod compile_fail;
mod debug;
mod primitive;
mod registry;

use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

pub use bitwise_enum_internals::bitwise;
pub use primitive::Primitive;

/// An enum registered for bitwise operators.
///
/// This trait is implemented by [`bitwise`] and should not be implemented by hand. Every
/// implementor is a `#[repr(transparent)]` wrapper over [`Repr`](Self::Repr), so any value of the
/// representation, named or not, is a valid value of the enum.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not registered for bitwise operators",
    note = "apply `#[bitwise_enum::bitwise]` to the definition of `{Self}`"
)]
pub trait BitwiseEnum:
    Copy
    + Eq
    + Ord
    + Hash
    + BitOr<Output = Self>
    + BitOrAssign
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
{
    /// The integer primitive that represents this type in-memory.
    type Repr: Primitive;

    /// Reinterprets `repr` as a value of this type.
    ///
    /// This never fails; the result need not equal any declared variant.
    fn from_repr(repr: Self::Repr) -> Self;

    fn into_repr(self) -> Self::Repr;

    /// Whether no bit is set.
    ///
    /// This is the logical negation of a value. `!x.is_zero()` tests whether any bit is set.
    fn is_zero(self) -> bool {
        self.into_repr() == Self::Repr::ZERO
    }
}

pub trait BitwiseEnumExt: BitwiseEnum {
    /// The bit-width of this type in memory.
    ///
    /// This is eight times the size, in bytes, of [`Repr`](BitwiseEnum::Repr).
    const REPR_WIDTH: usize;
}

impl<T: BitwiseEnum> BitwiseEnumExt for T {
    const REPR_WIDTH: usize = 8 * core::mem::size_of::<Self::Repr>();
}

#[doc(hidden)]
pub mod __private {
    pub use crate::debug::fmt_flags;
    pub use crate::registry::{Probe, Unregistered};
}
