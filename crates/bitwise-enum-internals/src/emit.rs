// SPDX-License-Identifier: MPL-2.0

//! Building blocks for the items emitted by [`bitwise!`].

use super::*;

/// Everything needed to emit items for one registered enum.
pub(crate) struct Emitter {
    /// The span given to every emitted token.
    ///
    /// This is the span of the enum identifier.
    pub(crate) span: Span2,
    /// The name of the enum.
    pub(crate) ident: syn::Ident,
    /// The visibility of the enum, given to its constants and `const fn`s.
    pub(crate) vis: syn::Visibility,
    /// The representation, or storage type, of the enum.
    pub(crate) repr: IntType,
    /// The path to the *bitwise-enum* crate.
    pub(crate) krate: syn::Path,
}

impl Emitter {
    /// The emitted item as a [`syn::Type`].
    pub(crate) fn self_ty(&self) -> syn::Type {
        ty_path!(self.ident.clone())
    }

    /// The representation as a [`syn::Type`].
    pub(crate) fn repr_ty(&self) -> syn::Type {
        self.repr.into_syn_type(self.span)
    }

    /// Creates the `impl ::bitwise_enum::BitwiseEnum` block, i.e., the registry entry.
    ///
    /// Rendered:
    ///
    /// ```ignore
    /// impl ::bitwise_enum::BitwiseEnum for #ident {
    ///     type Repr = #repr;
    ///     fn from_repr(repr: Self::Repr) -> Self { Self(repr) }
    ///     fn into_repr(self) -> Self::Repr { self.0 }
    /// }
    /// ```
    pub(crate) fn registry_impl(&self) -> syn::ItemImpl {
        let span = self.span;
        let items = vec![
            impl_type(span, "Repr", self.repr_ty()),
            impl_fn(
                vec![inline_attr(span)],
                syn::Visibility::Inherited,
                sig::Builder::new().build(
                    span,
                    syn::Ident::new("from_repr", span),
                    |span| [typed_arg(span, "repr", ty_path!(span; Self::Repr))],
                    |span| Some(ty_path!(span; Self)),
                ),
                blockify(wrap(span, expr_path!(span; repr))),
            ),
            impl_fn(
                vec![inline_attr(span)],
                syn::Visibility::Inherited,
                sig::Builder::new().with_receiver(Receiver::new_self()).build(
                    span,
                    syn::Ident::new("into_repr", span),
                    |_| [],
                    |span| Some(ty_path!(span; Self::Repr)),
                ),
                blockify(field(span, expr_path!(span; self))),
            ),
        ];

        let trait_path = join_path(&self.krate, span, ["BitwiseEnum"]);

        item_impl(span, Some(trait_path), self.self_ty(), items)
    }

    /// Creates the conversion from the emitted item into its representation.
    ///
    /// Rendered:
    ///
    /// ```ignore
    /// impl ::core::convert::From<#ident> for #repr {
    ///     fn from(value: #ident) -> Self { value.0 }
    /// }
    /// ```
    pub(crate) fn into_repr_impl(&self) -> syn::ItemImpl {
        let span = self.span;
        let from = impl_fn(
            vec![inline_attr(span)],
            syn::Visibility::Inherited,
            sig::Builder::new().build(
                span,
                syn::Ident::new("from", span),
                |span| [typed_arg(span, "value", self.self_ty())],
                |span| Some(ty_path!(span; Self)),
            ),
            blockify(field(span, expr_path!(span; value))),
        );
        let trait_path = generic_path(
            path!(span; ::core::convert::From),
            span,
            syn::GenericArgument::Type(self.self_ty()),
        );

        item_impl(span, Some(trait_path), self.repr_ty(), vec![from])
    }

    /// Creates a `Debug` implementation that prints the name of the first declared constant equal
    /// to the value, or the raw representation if there is none.
    ///
    /// `consts` holds the name of each constant along with the `#[cfg]` attributes it was declared
    /// with.
    ///
    /// Rendered:
    ///
    /// ```ignore
    /// impl ::core::fmt::Debug for #ident {
    ///     fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
    ///         ::bitwise_enum::__private::fmt_flags(f, "#ident", self.0, &[("A", Self::A.0), /* ... */])
    ///     }
    /// }
    /// ```
    pub(crate) fn debug_impl(&self, consts: &[(syn::Ident, Vec<syn::Attribute>)]) -> syn::ItemImpl {
        let span = self.span;

        let names = syn::ExprArray {
            attrs: vec![],
            bracket_token: syn::token::Bracket(span),
            elems: consts
                .iter()
                .map(|(ident, cfgs)| -> syn::Expr {
                    let name =
                        syn::ExprLit { attrs: vec![], lit: syn::LitStr::new(&ident.to_string(), span).into() };
                    let value = field(span, self_assoc(span, ident.clone()));

                    syn::ExprTuple {
                        attrs: cfgs.clone(),
                        paren_token: syn::token::Paren(span),
                        elems: Punctuated::from_iter([name.into(), value]),
                    }
                    .into()
                })
                .collect(),
        };
        let call = syn::ExprCall {
            attrs: vec![],
            func: Box::new(expr_path!(join_path(&self.krate, span, ["__private", "fmt_flags"]))),
            paren_token: syn::token::Paren(span),
            args: Punctuated::from_iter([
                expr_path!(span; f),
                syn::ExprLit {
                    attrs: vec![],
                    lit: syn::LitStr::new(&self.ident.to_string(), span).into(),
                }
                .into(),
                field(span, expr_path!(span; self)),
                syn::ExprReference {
                    attrs: vec![],
                    and_token: syn::Token![&](span),
                    mutability: None,
                    expr: Box::new(names.into()),
                }
                .into(),
            ]),
        };

        let formatter_ty = syn::TypeReference {
            and_token: syn::Token![&](span),
            lifetime: None,
            mutability: Some(syn::Token![mut](span)),
            elem: Box::new(ty_path!(generic_path(
                path!(span; ::core::fmt::Formatter),
                span,
                syn::GenericArgument::Lifetime(syn::Lifetime::new("'_", span)),
            ))),
        };
        let fmt = impl_fn(
            vec![],
            syn::Visibility::Inherited,
            sig::Builder::new().with_receiver(Receiver::new_ref_self()).build(
                span,
                syn::Ident::new("fmt", span),
                |span| [typed_arg(span, "f", formatter_ty.into())],
                |span| Some(ty_path!(span; ::core::fmt::Result)),
            ),
            blockify(call),
        );

        item_impl(span, Some(path!(span; ::core::fmt::Debug)), self.self_ty(), vec![fmt])
    }

    /// Creates a `Default` implementation returning the given constant.
    ///
    /// Rendered:
    ///
    /// ```ignore
    /// impl ::core::default::Default for #ident {
    ///     fn default() -> Self { Self::#variant }
    /// }
    /// ```
    pub(crate) fn default_impl(&self, variant: syn::Ident) -> syn::ItemImpl {
        let span = self.span;
        let default = impl_fn(
            vec![inline_attr(span)],
            syn::Visibility::Inherited,
            sig::Builder::new().build(
                span,
                syn::Ident::new("default", span),
                |_| [],
                |span| Some(ty_path!(span; Self)),
            ),
            blockify(self_assoc(span, variant)),
        );

        item_impl(span, Some(path!(span; ::core::default::Default)), self.self_ty(), vec![default])
    }
}

/// Creates an expression of the form `Self(#repr)`.
pub(crate) fn wrap(span: Span2, repr: syn::Expr) -> syn::Expr {
    syn::ExprCall {
        attrs: vec![],
        func: Box::new(expr_path!(span; Self)),
        paren_token: syn::token::Paren(span),
        args: once(repr).collect(),
    }
    .into()
}

/// Creates an expression of the form `#base.0`.
pub(crate) fn field(span: Span2, base: syn::Expr) -> syn::Expr {
    syn::ExprField {
        attrs: vec![],
        base: Box::new(base),
        dot_token: syn::Token![.](span),
        member: syn::Member::Unnamed(syn::Index { index: 0, span }),
    }
    .into()
}

/// Creates an expression of the form `Self::#ident`.
pub(crate) fn self_assoc(span: Span2, ident: syn::Ident) -> syn::Expr {
    expr_path!(syn::Path {
        leading_colon: None,
        segments: [syn::Ident::new("Self", span), ident]
            .into_iter()
            .map(syn::PathSegment::from)
            .collect(),
    })
}

/// Produces a [`syn::PatType`] of the form `#ident: #ty` with the given span.
pub(crate) fn typed_arg(span: Span2, ident: &str, ty: syn::Type) -> syn::PatType {
    syn::PatType {
        attrs: vec![],
        pat: Box::new(pat_path!(syn::Ident::new(ident, span))),
        colon_token: syn::Token![:](span),
        ty: Box::new(ty),
    }
}

/// Creates an attribute of the form `#[inline]`.
pub(crate) fn inline_attr(span: Span2) -> syn::Attribute {
    syn::Attribute {
        pound_token: syn::Token![#](span),
        style: syn::AttrStyle::Outer,
        bracket_token: syn::token::Bracket(span),
        meta: syn::Meta::Path(path!(span; inline)),
    }
}

/// Creates an attribute of the form `#[doc = #text]`.
pub(crate) fn doc_attr(span: Span2, text: &str) -> syn::Attribute {
    syn::Attribute {
        pound_token: syn::Token![#](span),
        style: syn::AttrStyle::Outer,
        bracket_token: syn::token::Bracket(span),
        meta: syn::MetaNameValue {
            path: path!(span; doc),
            eq_token: syn::Token![=](span),
            value: syn::ExprLit {
                attrs: vec![],
                // Matches the leading space of a `///` comment.
                lit: syn::LitStr::new(&format!(" {text}"), span).into(),
            }
            .into(),
        }
        .into(),
    }
}

/// Creates a function item for an impl block.
pub(crate) fn impl_fn(
    attrs: Vec<syn::Attribute>,
    vis: syn::Visibility,
    sig: syn::Signature,
    block: syn::Block,
) -> syn::ImplItem {
    syn::ImplItemFn { attrs, vis, defaultness: None, sig, block }.into()
}

/// Creates an associated type item of the form `type #ident = #ty;`.
pub(crate) fn impl_type(span: Span2, ident: &str, ty: syn::Type) -> syn::ImplItem {
    syn::ImplItemType {
        attrs: vec![],
        vis: syn::Visibility::Inherited,
        defaultness: None,
        type_token: syn::Token![type](span),
        ident: syn::Ident::new(ident, span),
        generics: Default::default(),
        eq_token: syn::Token![=](span),
        ty,
        semi_token: syn::Token![;](span),
    }
    .into()
}

/// Creates an impl block.
///
/// The block implements `trait_path` for `self_ty` if `trait_path` is [`Some`], and is an inherent
/// impl block otherwise.
pub(crate) fn item_impl(
    span: Span2,
    trait_path: Option<syn::Path>,
    self_ty: syn::Type,
    items: Vec<syn::ImplItem>,
) -> syn::ItemImpl {
    syn::ItemImpl {
        attrs: vec![],
        defaultness: None,
        unsafety: None,
        impl_token: syn::Token![impl](span),
        generics: Default::default(),
        trait_: trait_path.map(|it| (None, it, syn::Token![for](span))),
        self_ty: Box::new(self_ty),
        brace_token: syn::token::Brace(span),
        items,
    }
}

/// Gives the last segment of `path` a single generic argument: `#path<#arg>`.
fn generic_path(mut path: syn::Path, span: Span2, arg: syn::GenericArgument) -> syn::Path {
    if let Some(seg) = path.segments.last_mut() {
        seg.arguments = syn::PathArguments::AngleBracketed(syn::AngleBracketedGenericArguments {
            colon2_token: None,
            lt_token: syn::Token![<](span),
            args: once(arg).collect(),
            gt_token: syn::Token![>](span),
        });
    }

    path
}
