// SPDX-License-Identifier: MPL-2.0

//! The discriminant of an enum variant.

use super::*;

/// The discriminant of an enum variant.
///
/// In the common case&mdash;an integer literal, an expression built from integer literals with
/// bitwise, shift, or additive operators, or an implicit discriminant following one of
/// those&mdash;the value can be calculated exactly at macro evaluation time (MET). In other cases,
/// such as a reference to a constant, the value depends on information available only at
/// compile-time (CT) of the crate invoking [`bitwise!`].
///
/// The `Discrim` enum unifies these cases under a common interface. It converts into a
/// [`syn::Expr`] that evaluates to the discriminant at compile-time.
///
/// This type is [spanned]. The associated span can be obtained from the [`span`] method.
///
/// [spanned]: Span2
/// [`span`]: Self::span
#[derive(Clone)]
pub(crate) enum Discrim {
    /// A value known at macro evaluation time (MET).
    Met(Span2, u128),
    /// A value that depends on compile-time (CT) information.
    Ct(syn::Expr),
}

impl Discrim {
    /// Interprets an explicit discriminant expression.
    ///
    /// An integer literal is always read. Any other expression is evaluated only if `fold` is
    /// `true`; otherwise it is left to the compiler, so that it wraps in the declared
    /// representation exactly as it would in an ordinary enum (e.g., `1 << 31` in an `i32`).
    ///
    /// # Errors
    ///
    /// An error is returned if an integer literal fails to parse.
    pub(crate) fn parse(expr: &syn::Expr, fold: bool) -> Result<Self> {
        let value = match expr {
            syn::Expr::Lit(_) => Self::evaluate(expr)?,
            _ if fold => Self::evaluate(expr)?,
            _ => None,
        };
        let discrim = match value {
            Some(value) => Self::Met(expr.span(), value),
            None => Self::Ct(expr.clone()),
        };

        Ok(discrim)
    }

    /// Attempts to compute the value of `expr` at macro evaluation time.
    ///
    /// `Ok(None)` means the expression is not made only of integer literals and supported
    /// operators, or that evaluating it would overflow.
    fn evaluate(expr: &syn::Expr) -> Result<Option<u128>> {
        let value = match expr {
            syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Int(lit), .. }) => {
                Some(lit.base10_parse().map_err(Error)?)
            }
            syn::Expr::Group(syn::ExprGroup { expr, .. })
            | syn::Expr::Paren(syn::ExprParen { expr, .. }) => Self::evaluate(expr)?,
            syn::Expr::Binary(syn::ExprBinary { left, op, right, .. }) => {
                let (Some(lhs), Some(rhs)) = (Self::evaluate(left)?, Self::evaluate(right)?) else {
                    return Ok(None);
                };

                match op {
                    syn::BinOp::BitOr(_) => Some(lhs | rhs),
                    syn::BinOp::BitAnd(_) => Some(lhs & rhs),
                    syn::BinOp::BitXor(_) => Some(lhs ^ rhs),
                    syn::BinOp::Add(_) => lhs.checked_add(rhs),
                    syn::BinOp::Sub(_) => lhs.checked_sub(rhs),
                    syn::BinOp::Mul(_) => lhs.checked_mul(rhs),
                    syn::BinOp::Shl(_) => u32::try_from(rhs)
                        .ok()
                        .and_then(|rhs| lhs.checked_shl(rhs))
                        .filter(|it| it >> rhs == lhs),
                    syn::BinOp::Shr(_) => {
                        u32::try_from(rhs).ok().and_then(|rhs| lhs.checked_shr(rhs))
                    }
                    _ => None,
                }
            }
            _ => None,
        };

        Ok(value)
    }

    /// The discriminant of the variant following one with this discriminant.
    ///
    /// The span of the result is `span`, which should cover the identifier of the following
    /// variant.
    ///
    /// # Errors
    ///
    /// An error is returned if the value is known and incrementing it would overflow.
    pub(crate) fn next(&self, span: Span2) -> Result<Self> {
        match self {
            Self::Met(_, value) => value
                .checked_add(1)
                .map(|it| Self::Met(span, it))
                .ok_or_else(|| err!(span; "enum discriminant overflowed")),
            Self::Ct(expr) => {
                let one = syn::ExprLit { attrs: vec![], lit: syn::LitInt::new("1", span).into() };
                let expr = syn::ExprBinary {
                    attrs: vec![],
                    left: Box::new(parenthesize(expr.clone())),
                    op: syn::BinOp::Add(syn::Token![+](span)),
                    right: Box::new(one.into()),
                };

                Ok(Self::Ct(expr.into()))
            }
        }
    }

    /// The associated span.
    pub(crate) fn span(&self) -> Span2 {
        match self {
            Self::Met(span, _) => *span,
            Self::Ct(expr) => expr.span(),
        }
    }
}

impl From<Discrim> for syn::Expr {
    fn from(discrim: Discrim) -> Self {
        match discrim {
            Discrim::Met(span, value) => syn::ExprLit {
                attrs: vec![],
                lit: syn::LitInt::new(&value.to_string(), span).into(),
            }
            .into(),
            Discrim::Ct(expr) => expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(expr: &str) -> Option<u128> {
        match Discrim::parse(&syn::parse_str(expr).unwrap(), true) {
            Ok(Discrim::Met(_, value)) => Some(value),
            Ok(Discrim::Ct(_)) => None,
            Err(e) => panic!("{}", e.0),
        }
    }

    #[test]
    fn evaluates_literals_in_any_radix() {
        assert_eq!(value("0"), Some(0));
        assert_eq!(value("0b10"), Some(2));
        assert_eq!(value("0x80"), Some(128));
        assert_eq!(value("7u8"), Some(7));
    }

    #[test]
    fn evaluates_flag_expressions() {
        assert_eq!(value("1 << 3"), Some(8));
        assert_eq!(value("(1 << 0) | (1 << 2)"), Some(5));
        assert_eq!(value("0xf0 & 0x3c"), Some(0x30));
        assert_eq!(value("0b11 ^ 0b01"), Some(2));
        assert_eq!(value("2 * 3 + 1"), Some(7));
    }

    #[test]
    fn defers_everything_else() {
        assert_eq!(value("-1"), None);
        assert_eq!(value("FLAG"), None);
        assert_eq!(value("1 << FLAG"), None);
        assert_eq!(value("0 - 1"), None);
        assert_eq!(value("1 << 200"), None);
    }

    #[test]
    fn reads_only_literals_without_folding() {
        let parse = |expr: &str| Discrim::parse(&syn::parse_str(expr).unwrap(), false).unwrap();

        assert!(matches!(parse("0x80"), Discrim::Met(_, 0x80)));
        assert!(matches!(parse("1 << 31"), Discrim::Ct(_)));
        assert!(matches!(parse("(1 << 7) | 1"), Discrim::Ct(_)));
    }

    #[test]
    fn next_increments() {
        let first = Discrim::parse(&syn::parse_str("0b0111").unwrap(), true).unwrap();
        let Ok(Discrim::Met(_, value)) = first.next(Span2::call_site()) else {
            panic!("expected a known value");
        };
        assert_eq!(value, 8);

        let last = Discrim::Met(Span2::call_site(), u128::MAX);
        assert!(last.next(Span2::call_site()).is_err());
    }

    #[test]
    fn next_defers_unknown_values() {
        let unknown = Discrim::parse(&syn::parse_str("FLAG").unwrap(), true).unwrap();
        let Ok(next) = unknown.next(Span2::call_site()) else {
            panic!("unknown values never overflow");
        };
        assert_eq!(syn::Expr::from(next).into_token_stream().to_string(), "FLAG + 1");
    }
}
