// SPDX-License-Identifier: MPL-2.0

//! A documentation-only module describing the enum form of [`bitwise`].
//!
//! [`bitwise`]: crate::bitwise
//!
//! ## Syntax
//!
//! ```abnf
//! enum-item = 1*item-attr %r"Visibility" "enum" %r"IDENTIFIER" enum-body
//! enum-body = "{" *(variant ",") variant [","] "}"
//! ; Note: variants cannot contain fields.
//! variant = *%r"OuterAttribute" %r"IDENTIFIER" ["=" %r"Expression"]
//! ```
//!
//! The enum cannot be generic and must have at least one variant. Variants cannot be named after
//! the emitted methods: `or`, `and`, `xor`, `or_assign`, `and_assign`, `xor_assign`, `complement`,
//! `is_zero`, `from_repr`, or `into_repr`.
//!
//! ## Semantics
//!
//! ### Representation
//!
//! The representation of the enum is given by its `#[repr]` attribute, which must name one of the
//! integer primitives `u8`, `u16`, `u32`, `u64`, `u128`, `usize`, `i8`, `i16`, `i32`, `i64`,
//! `i128`, or `isize`. Without `#[repr]`, the representation is the smallest of `u8` through `u128`
//! that can hold every discriminant.
//!
//! ### Discriminants
//!
//! Discriminants follow the rules for ordinary enums: an explicit discriminant is used as-is, and
//! an implicit one is one greater than the previous variant's, or zero for the first variant.
//!
//! Without `#[repr]`, discriminants must be integer literals or expressions of integer literals
//! and the operators `|`, `&`, `^`, `+`, `-`, `*`, `<<`, and `>>`. The macro evaluates them to
//! pick the representation. With `#[repr]`, any constant expression is accepted, such as a path to
//! a constant or `1 << 31` in an `i32`; only a bare literal that does not fit the representation
//! is rejected by the macro, and the compiler evaluates the rest as it would for an ordinary enum.
//!
//! The macro runs before `#[cfg]` attributes on variants are evaluated, so it cannot tell whether
//! a `#[cfg]` variant exists. A variant that directly follows one must therefore have an explicit
//! discriminant.
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A, #[cfg(unix)] B, C }
//! ```
//!
//! ```
//! const EXEC: u8 = 0b100;
//!
//! #[bitwise_enum::bitwise]
//! #[repr(u8)]
//! enum Mode { Read = 1 << 0, Write = 1 << 1, Exec = EXEC }
//!
//! assert_eq!(Mode::Exec.into_repr(), 4);
//! ```
//!
//! ### Operators
//!
//! For an enum `T` with representation `U`, every operator acts on the representation and wraps
//! the result back into `T`:
//!
//! | Operator | Trait | `const fn` | Result |
//! |---|---|---|---|
//! | `a \| b` | `BitOr` | `T::or(a, b)` | `T(U(a) \| U(b))` |
//! | `a \|= b` | `BitOrAssign` | `a.or_assign(b)` | `a = a \| b` |
//! | `a & b` | `BitAnd` | `T::and(a, b)` | `T(U(a) & U(b))` |
//! | `a &= b` | `BitAndAssign` | `a.and_assign(b)` | `a = a & b` |
//! | `a ^ b` | `BitXor` | `T::xor(a, b)` | `T(U(a) ^ U(b))` |
//! | `a ^= b` | `BitXorAssign` | `a.xor_assign(b)` | `a = a ^ b` |
//! | `!a` | `Not` | `a.complement()` | `T(!U(a))` |
//! | | | `a.is_zero()` | `U(a) == 0` |
//!
//! The result of an operator need not equal any variant. Values are never validated.
//!
//! Trait methods cannot be called in constant expressions, so each operator also has an inherent
//! `const fn` form:
//!
//! ```
//! #[bitwise_enum::bitwise]
//! enum Flags { Zero = 0, A = 0b01, B = 0b10 }
//!
//! const AB: Flags = Flags::A.or(Flags::B);
//! const ONLY_A: Flags = AB.and(Flags::B.complement());
//! const _: () = assert!(ONLY_A.into_repr() == Flags::A.into_repr());
//! const _: () = assert!(Flags::Zero.is_zero() && !AB.is_zero());
//! const _: () = {
//!     let mut x = Flags::A;
//!     x.xor_assign(Flags::A);
//!     assert!(x.is_zero());
//! };
//! ```
//!
//! Operands must be of the same registered type. Enums that are not registered have no operators:
//!
//! ```compile_fail
//! #[derive(Clone, Copy)]
//! enum Plain { A = 1, B = 2 }
//!
//! let _ = Plain::A | Plain::B;
//! ```
//!
//! Two registered enums cannot be mixed:
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Color { Red = 1 }
//! #[bitwise_enum::bitwise]
//! enum Shape { Round = 1 }
//!
//! let _ = Color::Red | Shape::Round;
//! ```
//!
//! Neither can a registered enum and its representation:
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A | 1u8;
//! ```
//!
//! Arithmetic and shift operators are not provided:
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A + Flags::A;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A << 1;
//! ```
//!
//! A registered enum does not convert to `bool`. Test it with [`is_zero`] instead:
//!
//! [`is_zero`]: crate::BitwiseEnum::is_zero
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! if Flags::A {}
//! ```
//!
//! ### Conversions
//!
//! `T::from_repr` reinterprets any `U` as a `T`, and `T::into_repr` and `U::from` do the reverse.
//! Neither conversion is implicit.
//!
//! ### Derives
//!
//! The output always derives `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, and `Hash`,
//! which compare values by their representation. Deriving any of these on the input is allowed and
//! has no further effect.
//!
//! `#[derive(Debug)]` formats a value as the name of the first variant equal to it, or as
//! `T(repr)` if there is none. `#[derive(Default)]` requires exactly one variant marked
//! `#[default]`. Other derives are applied to the output as written.
//!
//! ## Output
//!
//! This form of `bitwise` produces:
//!
//! - A `#[repr(transparent)]` tuple struct with the name, visibility, and attributes of the enum,
//!   wrapping a private field of the representation.
//! - An inherent impl block with one associated constant per variant, named after the variant and
//!   carrying its attributes.
//! - An inherent impl block with the `const fn` forms of the operators, `from_repr`, and
//!   `into_repr`.
//! - An `impl ::bitwise_enum::BitwiseEnum` block.
//! - Implementations of `BitOr`, `BitOrAssign`, `BitAnd`, `BitAndAssign`, `BitXor`,
//!   `BitXorAssign`, and `Not`.
//! - An implementation of `From<T>` for the representation.
//! - Implementations of `Debug` and `Default`, if derived.
