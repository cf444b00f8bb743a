// SPDX-License-Identifier: MPL-2.0

//! Operator misuse that must not compile, one case per operator.
//!
//! Enums that are not registered have no operators.
//!
//! ```compile_fail
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! enum Plain { A = 1, B = 2 }
//!
//! let _ = Plain::A | Plain::B;
//! ```
//!
//! ```compile_fail
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! enum Plain { A = 1, B = 2 }
//!
//! let _ = Plain::A & Plain::B;
//! ```
//!
//! ```compile_fail
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! enum Plain { A = 1, B = 2 }
//!
//! let _ = Plain::A ^ Plain::B;
//! ```
//!
//! ```compile_fail
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! enum Plain { A = 1, B = 2 }
//!
//! let _ = !Plain::A;
//! ```
//!
//! ```compile_fail
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! enum Plain { A = 1, B = 2 }
//!
//! let mut x = Plain::A;
//! x |= Plain::B;
//! ```
//!
//! ```compile_fail
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! enum Plain { A = 1, B = 2 }
//!
//! let mut x = Plain::A;
//! x &= Plain::B;
//! ```
//!
//! ```compile_fail
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! enum Plain { A = 1, B = 2 }
//!
//! let mut x = Plain::A;
//! x ^= Plain::B;
//! ```
//!
//! Two registered enums cannot be mixed.
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
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Color { Red = 1 }
//! #[bitwise_enum::bitwise]
//! enum Shape { Round = 1 }
//!
//! let _ = Color::Red & Shape::Round;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Color { Red = 1 }
//! #[bitwise_enum::bitwise]
//! enum Shape { Round = 1 }
//!
//! let _ = Color::Red ^ Shape::Round;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Color { Red = 1 }
//! #[bitwise_enum::bitwise]
//! enum Shape { Round = 1 }
//!
//! let _ = Shape::Round | Color::Red;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Color { Red = 1 }
//! #[bitwise_enum::bitwise]
//! enum Shape { Round = 1 }
//!
//! let mut x = Color::Red;
//! x |= Shape::Round;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Color { Red = 1 }
//! #[bitwise_enum::bitwise]
//! enum Shape { Round = 1 }
//!
//! let mut x = Color::Red;
//! x &= Shape::Round;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Color { Red = 1 }
//! #[bitwise_enum::bitwise]
//! enum Shape { Round = 1 }
//!
//! let mut x = Color::Red;
//! x ^= Shape::Round;
//! ```
//!
//! A registered enum cannot be mixed with an integer, including its representation.
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A | 1;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A | 1u8;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A & 1u8;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A ^ 1u8;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = 1u8 | Flags::A;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let mut x = Flags::A;
//! x |= 1;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let mut x = Flags::A;
//! x &= 1u8;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let mut x = Flags::A;
//! x ^= 1u8;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A == 1u8;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _: u8 = Flags::A;
//! ```
//!
//! Arithmetic and shift operators are not provided.
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
//! let _ = Flags::A - Flags::A;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A * Flags::A;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A / Flags::A;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A % Flags::A;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = -Flags::A;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A << 1;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A >> 1;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let mut x = Flags::A;
//! x += Flags::A;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let mut x = Flags::A;
//! x -= Flags::A;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let mut x = Flags::A;
//! x <<= 1;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let mut x = Flags::A;
//! x >>= 1;
//! ```
//!
//! A registered enum does not convert to `bool`.
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! if Flags::A {}
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! while Flags::A {}
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A && true;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _ = Flags::A || false;
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitwise]
//! enum Flags { A = 1 }
//!
//! let _: bool = Flags::A;
//! ```
