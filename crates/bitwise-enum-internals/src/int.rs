// SPDX-License-Identifier: MPL-2.0

//! Types modeling integer primitives.

use std::fmt;

use super::*;

/// The bit-width of an integer primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IntWidth {
    /// One of 8, 16, 32, 64, or 128.
    Fixed(usize),
    /// The width of a pointer on the target (`usize` and `isize`).
    ///
    /// This is unknown at macro evaluation time.
    Pointer,
}

/// Models an integer primitive that exists in Rust: `u8`, `u16`, `u32`, `u64`, `u128`, `usize`,
/// `i8`, `i16`, `i32`, `i64`, `i128`, or `isize`.
///
/// This type is not [spanned].
///
/// [spanned]: Span2
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IntType {
    signed: bool,
    width: IntWidth,
}

impl IntType {
    /// Attempts to parse an `IntType` from a [`syn::Ident`].
    ///
    /// This returns `None` if `ident` does not look like an integer (i.e., is not of the form
    /// <code>u&#8239;<em>width</em></code> or <code>i&#8239;<em>width</em></code>),
    /// `Some(Err(_))` if it looks like one but the width is not that of a Rust primitive (e.g.,
    /// `u7`), and `Some(Ok(_))` otherwise.
    pub(crate) fn parse(ident: &syn::Ident) -> Option<Result<Self>> {
        let (span, ident) = (ident.span(), ident.to_string());
        let (signed, suffix) = if let Some(suffix) = ident.strip_prefix('u') {
            (false, suffix)
        } else if let Some(suffix) = ident.strip_prefix('i') {
            (true, suffix)
        } else {
            return None;
        };

        if suffix == "size" {
            return Some(Ok(Self { signed, width: IntWidth::Pointer }));
        }
        if suffix.is_empty() || !suffix.bytes().all(|it| it.is_ascii_digit()) {
            return None;
        }

        match suffix.parse() {
            Ok(width @ (8 | 16 | 32 | 64 | 128)) => {
                Some(Ok(Self { signed, width: IntWidth::Fixed(width) }))
            }
            _ => Some(Err(err!(span; "argument must be an existing Rust primitive"))),
        }
    }

    /// The smallest unsigned primitive, of at least 8 bits, that can hold `max`.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(IntType::smallest_unsigned(0).to_string(), "u8");
    /// assert_eq!(IntType::smallest_unsigned(0x1_00).to_string(), "u16");
    /// assert_eq!(IntType::smallest_unsigned(u128::MAX).to_string(), "u128");
    /// ```
    pub(crate) fn smallest_unsigned(max: u128) -> Self {
        let bits = (u128::BITS - max.leading_zeros()) as usize;
        let mut width = 8;
        while width < bits {
            width *= 2;
        }

        Self { signed: false, width: IntWidth::Fixed(width) }
    }

    /// Removes the `#[repr]` attribute from `item_attrs` and parses its argument, if present.
    ///
    /// # Errors
    ///
    /// An error is returned if the argument cannot [be parsed] as an `IntType`.
    ///
    /// [be parsed]: Self::parse
    pub(crate) fn take_repr(item_attrs: &mut Vec<syn::Attribute>) -> Result<Option<Self>> {
        let Some(i) = item_attrs.iter().position(|attr| attr.path().is_ident("repr")) else {
            return Ok(None);
        };
        let ident = item_attrs[i].parse_args::<syn::Ident>().map_err(Error)?;
        let repr = match Self::parse(&ident) {
            Some(it) => it,
            None => Err(err!(ident.span(); "argument must be an integer primitive")),
        }?;
        item_attrs.remove(i);

        Ok(Some(repr))
    }

    /// Determines the representation, or storage type, of an enum.
    ///
    /// # Arguments
    ///
    /// - `declared` is the representation [taken] from the `#[repr]` attribute, if any.
    /// - `discrims` are the discriminants of every variant.
    ///
    /// # Errors
    ///
    /// An error is returned
    ///
    /// 1. if `declared` is `Some` and a discriminant known at macro evaluation time does not [fit]
    ///    in it; or
    /// 2. if `declared` is `None` and any discriminant depends on compile-time information.
    ///
    /// [taken]: Self::take_repr
    /// [fit]: Self::fits
    pub(crate) fn repr_for_item<'a>(
        declared: Option<Self>,
        discrims: impl IntoIterator<Item = &'a Discrim>,
    ) -> Result<Self> {
        if let Some(repr) = declared {
            for discrim in discrims {
                if let Discrim::Met(span, value) = discrim {
                    if !repr.fits(*value) {
                        return Err(err!(*span; "discriminant {value} does not fit in `{repr}`"));
                    }
                }
            }

            return Ok(repr);
        }

        let mut max = 0;
        for discrim in discrims {
            match discrim {
                Discrim::Met(_, value) => max = max.max(*value),
                Discrim::Ct(_) => {
                    return Err(err!(
                        discrim.span();
                        "discriminant must be a non-negative integer unless the enum has a \
                         `#[repr]` attribute",
                    ));
                }
            }
        }

        Ok(Self::smallest_unsigned(max))
    }

    /// Determines if `value` can be represented by this type.
    ///
    /// Pointer-sized types accept every value; a literal that overflows one is rejected later by
    /// the compiler.
    pub(crate) fn fits(&self, value: u128) -> bool {
        let IntWidth::Fixed(width) = self.width else {
            return true;
        };
        let bits = if self.signed { width - 1 } else { width };

        bits >= 128 || value >> bits == 0
    }

    /// Converts this into a [`syn::Type`] with the given span.
    pub(crate) fn into_syn_type(self, span: Span2) -> syn::Type {
        ty_path!(syn::Ident::new(&self.to_string(), span))
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.signed { 'i' } else { 'u' };
        match self.width {
            IntWidth::Fixed(width) => write!(f, "{sign}{width}"),
            IntWidth::Pointer => write!(f, "{sign}size"),
        }
    }
}
