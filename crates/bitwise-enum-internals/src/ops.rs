// SPDX-License-Identifier: MPL-2.0

//! The operator set emitted for a registered enum.
//!
//! Each operator exists twice: as an inherent `const fn`, usable in constant expressions, and as
//! an implementation of the matching `core::ops` trait, which delegates to the former.

use super::*;
use emit::*;

/// A binary bitwise operator.
#[derive(Clone, Copy)]
pub(crate) enum BinOp {
    Or,
    And,
    Xor,
}

impl BinOp {
    pub(crate) const ALL: [Self; 3] = [Self::Or, Self::And, Self::Xor];

    /// The name of the inherent `const fn`, e.g., `or`.
    fn method(self) -> &'static str {
        match self {
            Self::Or => "or",
            Self::And => "and",
            Self::Xor => "xor",
        }
    }

    /// The name of the compound-assignment `const fn`, e.g., `or_assign`.
    fn assign_method(self) -> &'static str {
        match self {
            Self::Or => "or_assign",
            Self::And => "and_assign",
            Self::Xor => "xor_assign",
        }
    }

    /// The `core::ops` trait and its method, e.g., `BitOr` and `bitor`.
    fn op_trait(self) -> (&'static str, &'static str) {
        match self {
            Self::Or => ("BitOr", "bitor"),
            Self::And => ("BitAnd", "bitand"),
            Self::Xor => ("BitXor", "bitxor"),
        }
    }

    /// The compound-assignment `core::ops` trait and its method, e.g., `BitOrAssign` and
    /// `bitor_assign`.
    fn assign_trait(self) -> (&'static str, &'static str) {
        match self {
            Self::Or => ("BitOrAssign", "bitor_assign"),
            Self::And => ("BitAndAssign", "bitand_assign"),
            Self::Xor => ("BitXorAssign", "bitxor_assign"),
        }
    }

    fn to_syn(self, span: Span2) -> syn::BinOp {
        match self {
            Self::Or => syn::BinOp::BitOr(syn::Token![|](span)),
            Self::And => syn::BinOp::BitAnd(syn::Token![&](span)),
            Self::Xor => syn::BinOp::BitXor(syn::Token![^](span)),
        }
    }

    fn to_syn_assign(self, span: Span2) -> syn::BinOp {
        match self {
            Self::Or => syn::BinOp::BitOrAssign(syn::Token![|=](span)),
            Self::And => syn::BinOp::BitAndAssign(syn::Token![&=](span)),
            Self::Xor => syn::BinOp::BitXorAssign(syn::Token![^=](span)),
        }
    }

    /// The docs attached to the inherent `const fn`.
    fn doc(self) -> &'static str {
        match self {
            Self::Or => "Bitwise-or of the underlying representations.",
            Self::And => "Bitwise-and of the underlying representations.",
            Self::Xor => "Bitwise-xor of the underlying representations.",
        }
    }
}

/// Whether `ident` names one of the inherent methods emitted by [`Emitter::methods_impl`], which
/// would collide with a variant constant of the same name.
pub(crate) fn is_reserved(ident: &syn::Ident) -> bool {
    const OTHERS: [&str; 4] = ["from_repr", "into_repr", "complement", "is_zero"];

    BinOp::ALL
        .iter()
        .flat_map(|op| [op.method(), op.assign_method()])
        .chain(OTHERS)
        .any(|name| ident == name)
}

/// Creates an expression of the form `self.0 #op rhs.0`.
fn combine(span: Span2, op: syn::BinOp) -> syn::Expr {
    syn::ExprBinary {
        attrs: vec![],
        left: Box::new(field(span, expr_path!(span; self))),
        op,
        right: Box::new(field(span, expr_path!(span; rhs))),
    }
    .into()
}

impl Emitter {
    /// Creates the inherent impl block holding the `const fn` forms of every operator, along with
    /// the explicit conversions to and from the representation.
    pub(crate) fn methods_impl(&self) -> syn::ItemImpl {
        let span = self.span;
        let method = |doc: &str,
                      builder: sig::Builder,
                      ident: &str,
                      inputs: Vec<syn::PatType>,
                      output: Option<syn::Type>,
                      block: syn::Block| {
            let sig = builder.with_const().build(
                span,
                syn::Ident::new(ident, span),
                |_| inputs,
                |_| output,
            );

            impl_fn(vec![doc_attr(span, doc), inline_attr(span)], self.vis.clone(), sig, block)
        };
        let rhs_arg = || vec![typed_arg(span, "rhs", ty_path!(span; Self))];
        let self_ty = || -> Option<syn::Type> { Some(ty_path!(span; Self)) };

        let mut items = vec![
            // Rendered:
            //   const fn from_repr(repr: #repr) -> Self { Self(repr) }
            method(
                "Reinterprets a raw representation, which need not equal any declared constant.",
                sig::Builder::new(),
                "from_repr",
                vec![typed_arg(span, "repr", self.repr_ty())],
                self_ty(),
                blockify(wrap(span, expr_path!(span; repr))),
            ),
            // Rendered:
            //   const fn into_repr(self) -> #repr { self.0 }
            method(
                "The underlying representation.",
                sig::Builder::new().with_receiver(Receiver::new_self()),
                "into_repr",
                vec![],
                Some(self.repr_ty()),
                blockify(field(span, expr_path!(span; self))),
            ),
        ];

        for op in BinOp::ALL {
            // Rendered:
            //   const fn or(self, rhs: Self) -> Self { Self(self.0 | rhs.0) }
            items.push(method(
                op.doc(),
                sig::Builder::new().with_receiver(Receiver::new_self()),
                op.method(),
                rhs_arg(),
                self_ty(),
                blockify(wrap(span, combine(span, op.to_syn(span)))),
            ));
            // Rendered:
            //   const fn or_assign(&mut self, rhs: Self) { self.0 |= rhs.0; }
            items.push(method(
                "Applies the operator of the same name without the `_assign` suffix in place.",
                sig::Builder::new().with_receiver(Receiver::new_ref_mut_self()),
                op.assign_method(),
                rhs_arg(),
                None,
                syn::Block {
                    brace_token: syn::token::Brace(span),
                    stmts: vec![syn::Stmt::Expr(
                        combine(span, op.to_syn_assign(span)),
                        Some(syn::Token![;](span)),
                    )],
                },
            ));
        }

        // Rendered:
        //   const fn complement(self) -> Self { Self(!self.0) }
        items.push(method(
            "Bitwise complement of the underlying representation.",
            sig::Builder::new().with_receiver(Receiver::new_self()),
            "complement",
            vec![],
            self_ty(),
            blockify(wrap(
                span,
                syn::ExprUnary {
                    attrs: vec![],
                    op: syn::UnOp::Not(syn::Token![!](span)),
                    expr: Box::new(field(span, expr_path!(span; self))),
                }
                .into(),
            )),
        ));
        // Rendered:
        //   const fn is_zero(self) -> bool { self.0 == 0 }
        items.push(method(
            "Whether no bit is set. Negate it to test whether any bit is set.",
            sig::Builder::new().with_receiver(Receiver::new_self()),
            "is_zero",
            vec![],
            Some(ty_path!(span; bool)),
            blockify(syn::ExprBinary {
                attrs: vec![],
                left: Box::new(field(span, expr_path!(span; self))),
                op: syn::BinOp::Eq(syn::Token![==](span)),
                right: Box::new(
                    syn::ExprLit { attrs: vec![], lit: syn::LitInt::new("0", span).into() }.into(),
                ),
            }),
        ));

        let mut item = item_impl(span, None, self.self_ty(), items);
        item.attrs.push(allow_attr(span, "dead_code"));

        item
    }

    /// Creates the `core::ops` implementations for every operator.
    ///
    /// Rendered, for `|`:
    ///
    /// ```ignore
    /// impl ::core::ops::BitOr for #ident {
    ///     type Output = Self;
    ///     fn bitor(self, rhs: Self) -> Self { Self::or(self, rhs) }
    /// }
    /// impl ::core::ops::BitOrAssign for #ident {
    ///     fn bitor_assign(&mut self, rhs: Self) { Self::or_assign(self, rhs) }
    /// }
    /// ```
    pub(crate) fn operator_impls(&self) -> Vec<syn::ItemImpl> {
        let span = self.span;
        let ops_trait = |name: &str| join_path(&path!(span; ::core::ops), span, [name]);
        let delegate = |method: &str, args: &[&str]| -> syn::Block {
            blockify(syn::ExprCall {
                attrs: vec![],
                func: Box::new(self_assoc(span, syn::Ident::new(method, span))),
                paren_token: syn::token::Paren(span),
                args: args
                    .iter()
                    .map(|arg| -> syn::Expr { expr_path!(syn::Ident::new(arg, span)) })
                    .collect(),
            })
        };
        let trait_fn = |receiver: Receiver,
                        ident: &str,
                        has_rhs: bool,
                        has_output: bool,
                        block: syn::Block| {
            let sig = sig::Builder::new().with_receiver(receiver).build(
                span,
                syn::Ident::new(ident, span),
                |span| has_rhs.then(|| typed_arg(span, "rhs", ty_path!(span; Self))),
                |span| has_output.then(|| ty_path!(span; Self)),
            );

            impl_fn(vec![inline_attr(span)], syn::Visibility::Inherited, sig, block)
        };

        let mut impls = vec![];
        for op in BinOp::ALL {
            let (op_trait, op_method) = op.op_trait();
            impls.push(item_impl(
                span,
                Some(ops_trait(op_trait)),
                self.self_ty(),
                vec![
                    impl_type(span, "Output", ty_path!(span; Self)),
                    trait_fn(
                        Receiver::new_self(),
                        op_method,
                        true,
                        true,
                        delegate(op.method(), &["self", "rhs"]),
                    ),
                ],
            ));

            let (assign_trait, assign_method) = op.assign_trait();
            impls.push(item_impl(
                span,
                Some(ops_trait(assign_trait)),
                self.self_ty(),
                vec![trait_fn(
                    Receiver::new_ref_mut_self(),
                    assign_method,
                    true,
                    false,
                    delegate(op.assign_method(), &["self", "rhs"]),
                )],
            ));
        }

        impls.push(item_impl(
            span,
            Some(ops_trait("Not")),
            self.self_ty(),
            vec![
                impl_type(span, "Output", ty_path!(span; Self)),
                trait_fn(Receiver::new_self(), "not", false, true, delegate("complement", &["self"])),
            ],
        ));

        impls
    }
}
