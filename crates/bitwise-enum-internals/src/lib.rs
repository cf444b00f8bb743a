// SPDX-License-Identifier: MPL-2.0

//! Implementation details for *bitwise-enum*.
//!
//! This crate provides the [`bitwise!`] attribute macro that is re-exported by the main
//! *bitwise-enum* crate.

#![deny(rustdoc::broken_intra_doc_links, rustdoc::private_intra_doc_links)]

/// A type alias for [`Result<T, E>`] where `E` is [`Error`].
///
/// [`Result<T, E>`]: std::result::Result
type Result<T> = std::result::Result<T, Error>;

/// The error type returned by fallible functions in *bitwise-enum-internals*.
///
/// This is a wrapper over [`syn::Error`] and is convertible into [`TokenStream`] via a [`From`]
/// implementation.
#[derive(Debug)]
struct Error(syn::Error);

impl From<Error> for TokenStream {
    fn from(e: Error) -> Self {
        e.0.into_compile_error().into()
    }
}

/// Creates an [`Error`] with the given message and, optionally, span.
///
/// The syntax of this macro is similar to that of [`format!`] except that:
///
/// - [named parameters] (e.g., `var = 5`) are not allowed in the format argument list; and
/// - the format string may be preceded by a span expression and semicolon (e.g., `span;`).
///
/// The format string and format arguments are passed verbatim to `format!` to produce the error
/// message. The span of the error message is the span expression, if present, or
/// [`Span2::call_site`] otherwise.
///
/// [named parameters]: https://doc.rust-lang.org/std/fmt/index.html#named-parameters
///
/// # Examples
///
/// ```ignore
/// let lit: syn::LitInt;
/// # lit = syn::LitInt::new("256", Span2::call_site());
/// return Err(err!(lit.span(); "discriminant `{lit}` does not fit in `u8`"));
/// ```
macro_rules! err {
    ($fmt:expr $(, $fmt_arg:expr)* $(,)?) => {
        err!(Span2::call_site(); $fmt $(, $fmt_arg)*)
    };
    ($span:expr ; $fmt:expr $(, $fmt_arg:expr)* $(,)?) => {
        Error(syn::Error::new($span, format!($fmt $(, $fmt_arg)*)))
    };
}

/// Creates a [`syn::Path`] from the given path and span.
///
/// This macro accepts a span expression, semicolon ';', and path, in that order.
///
/// # Examples
///
/// ```ignore
/// let span: Span2;
/// # span = Span2::call_site();
/// let paths: [syn::Path; 3] = [
///     path!(span; repr),
///     path!(span; Self::Repr),
///     path!(span; ::core::ops::BitOr),
/// ];
/// ```
macro_rules! path {
    // Case for identifiers and paths without leading colons.
    ($span:expr ; $head_seg:ident $(:: $tail_seg:ident)*) => {
        path!(@internal => {
            span: $span,
            leading_colon: None,
            segments: $head_seg $($tail_seg)*,
        })
    };
    // Case for paths with leading colons `::`.
    ($span:expr ; :: $head_seg:ident $(:: $tail_seg:ident)*) => {
        path!(@internal => {
            span: $span,
            leading_colon: Some(syn::Token![::]($span)),
            segments: $head_seg $($tail_seg)*,
        })
    };
    // Implementation detail.
    (@internal => {
        span: $span:expr,
        leading_colon: $leading_colon:expr,
        segments: $($seg:ident)* $(,)?
    }) => {
        syn::Path {
            leading_colon: $leading_colon,
            segments: [$(stringify!($seg)),*]
                .into_iter()
                .map(|seg| syn::PathSegment::from(syn::Ident::new(seg, $span)))
                .collect(),
        }
    };
}

/// Creates an implementor of `From<syn::ExprPath>`.
///
/// This macro offers two syntaxes: one equivalent to [`path!`], and one that accepts an expression
/// implementing `Into<syn::Path>`.
///
/// The output is of the form `syn::ExprPath {/* ... */}.into()`. The concrete type of the
/// expression inferred from context.
macro_rules! expr_path {
    ($span:expr ; $($path_piece:tt)*) => {
        syn::ExprPath { attrs: vec![], qself: None, path: path!($span; $($path_piece)*) }.into()
    };
    ($path:expr $(,)?) => {
        syn::ExprPath { attrs: vec![], qself: None, path: $path.into() }.into()
    }
}

/// Creates an implementor of `From<syn::PatPath>`.
///
/// This macro offers two syntaxes: one equivalent to [`path!`], and one that accepts an expression
/// implementing `Into<syn::Path>`.
macro_rules! pat_path {
    ($span:expr ; $($path_piece:tt)*) => {
        syn::PatPath { attrs: vec![], qself: None, path: path!($span; $($path_piece)*) }.into()
    };
    ($path:expr $(,)?) => {
        syn::PatPath { attrs: vec![], qself: None, path: $path.into() }.into()
    }
}

/// Creates an implementor of `From<syn::TypePath>`.
///
/// This macro offers two syntaxes: one equivalent to [`path!`], and one that accepts an expression
/// implementing `Into<syn::Path>`.
macro_rules! ty_path {
    ($span:expr ; $($path_piece:tt)*) => {
        syn::TypePath { qself: None, path: path!($span; $($path_piece)*) }.into()
    };
    ($path:expr $(,)?) => {
        syn::TypePath { qself: None, path: $path.into() }.into()
    }
}

/// Wraps an expression in a [`syn::Block`].
///
/// # Examples
///
/// ```ignore
/// let span: Span2;
/// # span = Span2::call_site();
/// // Rendered:
/// //   { Self::Repr }
/// let repr_block: syn::Block = blockify::<syn::Expr>(expr_path!(span; Self::Repr));
/// ```
fn blockify<E: Into<syn::Expr>>(expr: E) -> syn::Block {
    let expr = expr.into();

    syn::Block {
        brace_token: syn::token::Brace(expr.span()),
        stmts: vec![syn::Stmt::Expr(expr, None)],
    }
}

/// Wraps an expression in parentheses.
///
/// This function is used to enforce a particular order of operations in case the associativity of
/// the expression, and adjacent expressions, otherwise lends to an incorrect interpretation.
///
/// In particular, if the expression is
///
/// - an assignment (e.g., `a = b`);
/// - a binary operation (e.g., `a + b`);
/// - a cast (e.g., `x as u32`);
/// - a closure (e.g., `|| x`);
/// - a `let` guard (e.g., `let Some(a) = b`);
/// - a range (e.g., `a..b`);
/// - a reference (e.g., `&mut x`);
/// - a unary operation (e.g., `!a`); or
/// - or a `None`-delimited [group],
///
/// it is parenthesized. Otherwise, it is returned without modification.
///
/// [group]: syn::ExprGroup
fn parenthesize<E: Into<syn::Expr>>(expr: E) -> syn::Expr {
    let expr = expr.into();

    let needs_parens = matches!(
        expr,
        syn::Expr::Assign(_)
            | syn::Expr::Binary(_)
            | syn::Expr::Cast(_)
            | syn::Expr::Closure(_)
            | syn::Expr::Group(_)
            | syn::Expr::Let(_)
            | syn::Expr::Range(_)
            | syn::Expr::Reference(_)
            | syn::Expr::Unary(_),
    );
    if !needs_parens {
        return expr;
    }

    syn::ExprParen {
        attrs: vec![],
        paren_token: syn::token::Paren(expr.span()),
        expr: Box::new(expr),
    }
    .into()
}

/// Creates an outer attribute of the form `#[#path(#tokens)]`.
fn outer_attr(span: Span2, path: syn::Path, tokens: TokenStream2) -> syn::Attribute {
    syn::Attribute {
        pound_token: syn::Token![#](span),
        style: syn::AttrStyle::Outer,
        bracket_token: syn::token::Bracket(span),
        meta: syn::MetaList {
            path,
            delimiter: syn::MacroDelimiter::Paren(syn::token::Paren(span)),
            tokens,
        }
        .into(),
    }
}

/// Creates an attribute of the form `#[allow(#lint)]`.
fn allow_attr(span: Span2, lint: &str) -> syn::Attribute {
    outer_attr(span, path!(span; allow), syn::Ident::new(lint, span).into_token_stream())
}

/// Appends the given segments to a copy of `base`.
///
/// This is how paths into the runtime crate are formed when the user overrides its location with
/// the `crate` argument.
fn join_path<'a>(base: &syn::Path, span: Span2, tail: impl IntoIterator<Item = &'a str>) -> syn::Path {
    let mut path = base.clone();
    path.segments.extend(tail.into_iter().map(|seg| syn::PathSegment::from(syn::Ident::new(seg, span))));

    path
}

/// The span of the name of `item`, or the call site if `item` has no name.
fn item_name_span(item: &syn::Item) -> Span2 {
    match item {
        syn::Item::Const(it) => it.ident.span(),
        syn::Item::Enum(it) => it.ident.span(),
        syn::Item::ExternCrate(it) => it.ident.span(),
        syn::Item::Fn(it) => it.sig.ident.span(),
        syn::Item::Mod(it) => it.ident.span(),
        syn::Item::Static(it) => it.ident.span(),
        syn::Item::Struct(it) => it.ident.span(),
        syn::Item::Trait(it) => it.ident.span(),
        syn::Item::TraitAlias(it) => it.ident.span(),
        syn::Item::Type(it) => it.ident.span(),
        syn::Item::Union(it) => it.ident.span(),
        _ => Span2::call_site(),
    }
}

mod derives;
mod discrim;
mod emit;
mod r#enum;
mod int;
mod ops;
mod receiver;
mod sig;

use std::iter::once;

use derives::Derives;
use discrim::Discrim;
use int::IntType;
use proc_macro::TokenStream;
use proc_macro2::{Span as Span2, TokenStream as TokenStream2};
use receiver::Receiver;
use syn::{__private::ToTokens, parse::Parser as _, punctuated::Punctuated, spanned::Spanned as _};

/// The whole point.
///
/// Refer to the `spec` module in the crate root for usage information.
#[proc_macro_attribute]
pub fn bitwise(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = match Args::parse(args) {
        Ok(it) => it,
        Err(e) => {
            return e.into();
        }
    };

    let result = match syn::parse_macro_input!(item as _) {
        syn::Item::Enum(item) => r#enum::bitwise(&args, item),
        item => Err(err!(item_name_span(&item); "item must be an enum")),
    };

    match result {
        Ok(it) => it.into_token_stream(),
        Err(e) => e.into(),
    }
}

/// Models acceptable arguments to the `#[bitwise]` attribute.
#[derive(Default)]
struct Args {
    /// The `crate` argument, if present.
    ///
    /// This is the path under which the *bitwise-enum* crate is reachable from the invoking crate.
    /// It defaults to `::bitwise_enum`.
    krate: Option<syn::Path>,
}

impl Args {
    /// Parses comma-separated arguments to the `#[bitwise]` attribute from the given
    /// [`TokenStream`].
    ///
    /// # Errors
    ///
    /// An error is returned if any argument
    ///
    /// - is not of the form `"name" "=" "value"` (ABNF);
    /// - has a name other than `crate`;
    /// - has the same name as a previous argument; or
    /// - has a value that is not a string literal containing a path.
    fn parse(args: TokenStream) -> Result<Self> {
        let mut output = Self::default();

        if args.is_empty() {
            return Ok(output);
        }

        syn::meta::parser(|meta| {
            let ident = meta.path.get_ident().ok_or_else(|| -> syn::Error {
                syn::Error::new(meta.path.span(), "argument path must be an identifier")
            })?;
            if ident != "crate" {
                return Err(syn::Error::new(ident.span(), "argument is not supported"));
            }
            if output.krate.is_some() {
                return Err(syn::Error::new(ident.span(), "argument is a duplicate"));
            }
            let value = meta.value()?.parse::<syn::LitStr>()?.parse::<syn::Path>()?;
            output.krate = Some(value);

            Ok(())
        })
        .parse(args)
        .map_err(Error)?;

        Ok(output)
    }

    /// The path to the *bitwise-enum* crate, as seen from the invoking crate.
    fn crate_path(&self, span: Span2) -> syn::Path {
        self.krate.clone().unwrap_or_else(|| path!(span; ::bitwise_enum))
    }
}

/// The output of [`bitwise!`].
struct Output {
    /// The emitted newtype that replaces the input enum.
    item: syn::ItemStruct,
    /// The <code>impl&nbsp;<em>item</em></code> [impl block] holding one associated constant per
    /// input variant.
    ///
    /// [impl block]: syn::ItemImpl
    consts_impl: syn::ItemImpl,
    /// The <code>impl&nbsp;<em>item</em></code> [impl block] holding the `const fn` forms of the
    /// operators and the conversions to and from the representation.
    ///
    /// [impl block]: syn::ItemImpl
    methods_impl: syn::ItemImpl,
    /// Trait implementations for the emitted item: the registry entry, the operators, the
    /// conversion into the representation, and any absorbed derives.
    trait_impls: Vec<syn::ItemImpl>,
}

impl Output {
    /// Converts this into a [`TokenStream`].
    fn into_token_stream(self) -> TokenStream {
        let mut output = TokenStream2::new();
        self.item.to_tokens(&mut output);
        self.consts_impl.to_tokens(&mut output);
        self.methods_impl.to_tokens(&mut output);
        for item in self.trait_impls {
            item.to_tokens(&mut output);
        }

        output.into()
    }
}

/// Returns an [`Error`] if the given [`syn::Generics`] is non-empty.
///
/// The `bitwise` macro does not support generic items. This function ensures that the current item
/// is not generic.
fn check_generics(generics: &syn::Generics) -> Result<()> {
    let syn::Generics { params, where_clause, .. } = generics;
    if let Some(param) = params.first() {
        return Err(err!(param.span(); "generics parameters are not supported in this context"));
    }
    if let Some(clause) = where_clause {
        return Err(err!(
            clause.where_token.span;
            "`where` clauses are not supported in this context",
        ));
    }

    Ok(())
}

/// Returns an [`Error`] if `attrs` contains another `#[bitwise]` attribute.
///
/// An enum can be registered at most once. The attribute currently being evaluated has already
/// been removed from `attrs` by the compiler, so any remaining `bitwise` attribute is a second
/// registration. An attribute counts if its path is `bitwise`, or `bitwise` under `krate` or under
/// the default crate path.
fn check_not_registered(attrs: &[syn::Attribute], krate: &syn::Path) -> Result<()> {
    let segments = |path: &syn::Path| -> Vec<String> {
        path.segments.iter().map(|seg| seg.ident.to_string()).collect()
    };
    let prefixes = [vec![], segments(krate), vec!["bitwise_enum".to_owned()]];

    let duplicate = attrs.iter().map(syn::Attribute::path).find(|path| {
        let mut names = segments(path);
        names.pop().is_some_and(|last| last == "bitwise") && prefixes.contains(&names)
    });
    if let Some(seg) = duplicate.and_then(|path| path.segments.last()) {
        return Err(err!(seg.ident.span(); "enum is already registered for bitwise operators"));
    }

    Ok(())
}
