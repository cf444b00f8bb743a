// SPDX-License-Identifier: MPL-2.0

//! A documentation-only module that explains how to use [`bitwise`].
//!
//! [`bitwise`]: crate::bitwise
//!
//! This module is dedicated to describing the syntax and behavior of the `bitwise` attribute macro.
//! Supporting items exported by *bitwise-enum*, including the [`BitwiseEnum`] and
//! [`BitwiseEnumExt`] traits, are documented separately.
//!
//! [`BitwiseEnum`]: crate::BitwiseEnum
//! [`BitwiseEnumExt`]: crate::BitwiseEnumExt
//!
//! `bitwise` can only be applied to enum items. Applying it registers the enum for bitwise
//! operators: the output implements `BitwiseEnum` along with the `core::ops` traits it requires.
//! Any other item is rejected.
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! struct Flags(u8);
//! ```
//!
//! The enum form is described in the [`enum`](self::enum) submodule.
//!
//! ## Syntax Reference
//!
//! At macro evaluation time, `bitwise` parses the input item and validates it against its own
//! syntactical rules. This syntax is a subset of Rust syntax and is notated in a modified
//! [Augmented Backus-Naur Form] where:
//!
//! [Augmented Backus-Naur Form]: https://en.wikipedia.org/wiki/Augmented_Backus%E2%80%93Naur_form
//!
//! - implicit whitespace is allowed between concatenated rule elements (and may be required,
//!   depending on the context);
//! - literal text strings are case sensitive by default; and
//! - <code>%r"<em>rule</em>"</code> is a rule from [The Rust Reference] (and should not be
//!   interpreted as a literal text string).
//!
//! [The Rust Reference]: https://doc.rust-lang.org/reference/
//!
//! Syntactical rules common to all uses of `bitwise` are:
//!
//! ```abnf
//! item-attr = bitwise-attr / %r"OuterAttribute"
//! bitwise-attr = "#[" "bitwise" [bitwise-attr-input] "]"
//! bitwise-attr-input = "(" [crate-arg [","]] ")"
//! crate-arg = "crate" "=" %r"STRING_LITERAL"
//! ```
//!
//! The `crate` argument is a string literal containing the path through which *bitwise-enum* is
//! reachable. It defaults to `::bitwise_enum` and is only needed by crates that re-export
//! *bitwise-enum* under another name.
//!
//! An item can carry at most one `bitwise` attribute.
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1, B = 2 }
//! ```

pub mod r#enum;
