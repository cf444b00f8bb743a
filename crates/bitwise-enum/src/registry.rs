// SPDX-License-Identifier: MPL-2.0

//! Queries against the set of registered enums.
//!
//! Generic code asks with a `T: BitwiseEnum` bound. Code that names a concrete type can instead ask
//! [`is_bitwise_enum!`], which answers `false` rather than failing when the type is not registered.
//! This works by giving [`Probe`] an inherent constant only when its parameter is registered, and
//! a trait constant of the same name for every parameter; path resolution prefers the former
//! whenever its bounds hold.

use core::marker::PhantomData;

use crate::BitwiseEnum;

pub struct Probe<T: ?Sized>(PhantomData<T>);

pub trait Unregistered {
    const IS_BITWISE_ENUM: bool = false;
}

impl<T: ?Sized> Unregistered for Probe<T> {}

impl<T: BitwiseEnum> Probe<T> {
    pub const IS_BITWISE_ENUM: bool = true;
}

/// Whether the given type is registered for bitwise operators.
///
/// This expands to a constant expression, so it can be used in `const` items and assertions.
/// Unlike a `T: BitwiseEnum` bound, it only sees through concrete types; inside generic code it
/// answers `false` for every type parameter.
///
/// # Examples
///
/// ```
/// #[bitwise_enum::bitwise]
/// enum Registered { A = 1 }
/// enum Plain { A = 1 }
///
/// const _: () = assert!(bitwise_enum::is_bitwise_enum!(Registered));
/// const _: () = assert!(!bitwise_enum::is_bitwise_enum!(Plain));
/// const _: () = assert!(!bitwise_enum::is_bitwise_enum!(u8));
/// ```
#[macro_export]
macro_rules! is_bitwise_enum {
    ($ty:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::Unregistered as _;

        <$crate::__private::Probe<$ty>>::IS_BITWISE_ENUM
    }};
}

/// Fails to compile unless every given type is registered for bitwise operators.
///
/// # Examples
///
/// ```
/// #[bitwise_enum::bitwise]
/// enum Flags { A = 1, B = 2 }
///
/// bitwise_enum::assert_bitwise_enum!(Flags);
/// ```
///
/// ```compile_fail
/// enum Plain { A = 1, B = 2 }
///
/// bitwise_enum::assert_bitwise_enum!(Plain);
/// ```
#[macro_export]
macro_rules! assert_bitwise_enum {
    ($($ty:ty),+ $(,)?) => {
        const _: () = {
            const fn assert_registered<T: $crate::BitwiseEnum>() {}
            $(assert_registered::<$ty>();)+
        };
    };
}

#[cfg(test)]
mod tests {
    use crate::BitwiseEnum;

    #[crate::bitwise(crate = "crate")]
    #[derive(Debug)]
    enum Local {
        A = 1,
        B = 2,
    }

    #[allow(dead_code)]
    enum Plain {
        A,
    }

    crate::assert_bitwise_enum!(Local);

    #[test]
    fn answers_for_concrete_types() {
        assert!(crate::is_bitwise_enum!(Local));
        assert!(!crate::is_bitwise_enum!(Plain));
        assert!(!crate::is_bitwise_enum!(u32));
        assert!(!crate::is_bitwise_enum!(str));
    }

    #[test]
    fn resolves_a_renamed_crate() {
        let both = <Local as BitwiseEnum>::from_repr(3);

        assert_eq!(both, Local::A | Local::B);
        assert_eq!(both.into_repr(), 3u8);
    }
}
