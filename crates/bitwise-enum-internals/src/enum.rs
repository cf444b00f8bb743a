// SPDX-License-Identifier: MPL-2.0

//! The `bitwise` macro for enums.

use super::*;
use emit::*;

/// An enum variant, reduced to what survives as an associated constant.
struct Variant {
    /// The outer attributes on the variant, minus `#[default]`.
    attrs: Vec<syn::Attribute>,
    ident: syn::Ident,
    discrim: Discrim,
}

impl Variant {
    /// The `#[cfg]` attributes on the variant.
    fn cfgs(&self) -> Vec<syn::Attribute> {
        self.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).cloned().collect()
    }
}

/// The `bitwise` macro for enums.
///
/// The enum is replaced by a `#[repr(transparent)]` newtype over its representation, with one
/// associated constant per variant, so that combining variants can produce values that no variant
/// declares.
pub(crate) fn bitwise(args: &Args, mut item: syn::ItemEnum) -> Result<Output> {
    check_generics(&item.generics)?;
    check_not_registered(&item.attrs, &args.crate_path(item.ident.span()))?;

    let span = item.ident.span();
    let derives = Derives::absorb(&mut item.attrs)?;
    let declared_repr = IntType::take_repr(&mut item.attrs)?;

    let mut variants: Vec<Variant> = vec![];
    // This is the variant named by `#[default]`, if any.
    let mut default_variant: Option<syn::Ident> = None;

    for variant in item.variants {
        if !variant.fields.is_empty() {
            return Err(err!(variant.fields.span(); "variant fields are not supported"));
        }
        if ops::is_reserved(&variant.ident) {
            return Err(err!(
                variant.ident.span();
                "variant name `{}` is reserved for an operator method",
                variant.ident,
            ));
        }

        // If the user explicitly specifies a discriminant, we will use that. Otherwise, the
        // discriminant will be one greater than the last (or zero if this is the first variant).
        let discrim = match (&variant.discriminant, variants.last()) {
            (Some((_, expr)), _) => Discrim::parse(expr, declared_repr.is_none())?,
            // Whether the previous variant exists is only known after `cfg` stripping.
            (None, Some(prev)) if !prev.cfgs().is_empty() => {
                return Err(err!(
                    variant.ident.span();
                    "variant after a `#[cfg]` variant needs an explicit discriminant",
                ));
            }
            (None, Some(prev)) => prev.discrim.next(variant.ident.span())?,
            (None, None) => Discrim::Met(variant.ident.span(), 0),
        };

        let mut attrs = Vec::with_capacity(variant.attrs.len());
        for attr in variant.attrs {
            if !attr.path().is_ident("default") {
                attrs.push(attr);
                continue;
            }
            let attr_span = attr.path().span();
            if derives.default.is_none() {
                return Err(err!(attr_span; "`#[default]` requires `#[derive(Default)]`"));
            }
            if default_variant.is_some() {
                return Err(err!(attr_span; "multiple `#[default]` variants"));
            }
            default_variant = Some(variant.ident.clone());
        }

        variants.push(Variant { attrs, ident: variant.ident, discrim });
    }

    if variants.is_empty() {
        return Err(err!(item.brace_token.span.join(); "enum cannot have zero variants"));
    }
    if let (Some(span), None) = (derives.default, &default_variant) {
        return Err(err!(span; "`#[derive(Default)]` requires a `#[default]` variant"));
    }

    let repr = IntType::repr_for_item(declared_repr, variants.iter().map(|it| &it.discrim))?;
    let emitter = Emitter {
        span,
        ident: item.ident.clone(),
        vis: item.vis.clone(),
        repr,
        krate: args.crate_path(span),
    };

    let mut trait_impls = vec![emitter.registry_impl(), emitter.into_repr_impl()];
    trait_impls.extend(emitter.operator_impls());
    if derives.debug.is_some() {
        let consts: Vec<_> = variants.iter().map(|it| (it.ident.clone(), it.cfgs())).collect();
        trait_impls.push(emitter.debug_impl(&consts));
    }
    if let Some(variant) = default_variant {
        trait_impls.push(emitter.default_impl(variant));
    }

    let consts_impl = consts_impl(&emitter, variants);
    let methods_impl = emitter.methods_impl();

    item.attrs.push(Derives::builtin_attr(span));
    item.attrs.push(outer_attr(
        span,
        path!(span; repr),
        syn::Ident::new("transparent", span).into_token_stream(),
    ));

    // Rendered:
    //   #vis struct #ident(#repr);
    let item = syn::ItemStruct {
        attrs: item.attrs,
        vis: item.vis,
        struct_token: syn::Token![struct](item.enum_token.span),
        ident: item.ident,
        generics: Default::default(),
        fields: syn::FieldsUnnamed {
            paren_token: syn::token::Paren(span),
            unnamed: once(syn::Field {
                attrs: vec![],
                vis: syn::Visibility::Inherited,
                mutability: syn::FieldMutability::None,
                ident: None,
                colon_token: None,
                ty: emitter.repr_ty(),
            })
            .collect(),
        }
        .into(),
        semi_token: Some(syn::Token![;](span)),
    };

    Ok(Output { item, consts_impl, methods_impl, trait_impls })
}

/// Creates the inherent impl block declaring one associated constant per variant.
///
/// Rendered:
///
/// ```ignore
/// #[allow(non_upper_case_globals)]
/// impl #ident {
///     #vis const #variant: Self = Self(#discrim);
///     // ...
/// }
/// ```
fn consts_impl(emitter: &Emitter, variants: Vec<Variant>) -> syn::ItemImpl {
    let span = emitter.span;
    let items = variants
        .into_iter()
        .map(|variant| -> syn::ImplItem {
            syn::ImplItemConst {
                attrs: variant.attrs,
                vis: emitter.vis.clone(),
                defaultness: None,
                const_token: syn::Token![const](span),
                ident: variant.ident,
                generics: Default::default(),
                colon_token: syn::Token![:](span),
                ty: ty_path!(span; Self),
                eq_token: syn::Token![=](span),
                expr: wrap(span, variant.discrim.into()),
                semi_token: syn::Token![;](span),
            }
            .into()
        })
        .collect();

    let mut item = item_impl(span, None, emitter.self_ty(), items);
    item.attrs.push(allow_attr(span, "non_upper_case_globals"));

    item
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(item: &str) -> std::result::Result<Output, String> {
        bitwise(&Args::default(), syn::parse_str(item).unwrap()).map_err(|e| e.0.to_string())
    }

    fn tokens(it: impl ToTokens) -> String {
        it.to_token_stream().to_string()
    }

    #[test]
    fn wraps_the_smallest_repr() {
        let output = expand("#[derive(Clone, Debug)] enum A { B = 0xff, C }").unwrap();
        let syn::Fields::Unnamed(fields) = &output.item.fields else {
            panic!("expected a tuple struct");
        };

        assert_eq!(tokens(&fields.unnamed[0].ty), "u16");
        assert_eq!(tokens(output.item.attrs.last().unwrap()), "# [repr (transparent)]");
        // Registry, `From`, three operators with their assignments, `Not`, and `Debug`.
        assert_eq!(output.trait_impls.len(), 10);
    }

    #[test]
    fn declares_one_const_per_variant() {
        let output = expand("pub enum A { B, #[doc = \"C\"] C = 1 << 2, D }").unwrap();
        let consts: Vec<_> = output.consts_impl.items.iter().map(tokens).collect();

        assert_eq!(
            consts,
            [
                "pub const B : Self = Self (0) ;",
                "# [doc = \"C\"] pub const C : Self = Self (4) ;",
                "pub const D : Self = Self (5) ;",
            ],
        );
    }

    #[test]
    fn keeps_the_declared_repr() {
        let output = expand("#[repr(i64)] enum A { B = -1, C }").unwrap();
        let consts: Vec<_> = output.consts_impl.items.iter().map(tokens).collect();

        assert_eq!(tokens(&output.item.fields), "(i64)");
        assert_eq!(consts[1], "const C : Self = Self ((- 1) + 1) ;");
        assert!(output.item.attrs.iter().all(|attr| tokens(attr) != "# [repr (i64)]"));
    }

    #[test]
    fn rejects_malformed_enums() {
        let cases = [
            ("enum A {}", "enum cannot have zero variants"),
            ("enum A<T> { B }", "generics parameters are not supported in this context"),
            ("enum A { B(u8) }", "variant fields are not supported"),
            ("enum A { B { c: u8 } }", "variant fields are not supported"),
            ("#[repr(u8)] enum A { B = 255, C }", "discriminant 256 does not fit in `u8`"),
            ("#[repr(transparent)] enum A { B }", "argument must be an integer primitive"),
            (
                "enum A { B = u8::MAX }",
                "discriminant must be a non-negative integer unless the enum has a `#[repr]` \
                 attribute",
            ),
            (
                "#[bitwise_enum::bitwise] enum A { B }",
                "enum is already registered for bitwise operators",
            ),
            ("#[bitwise] enum A { B }", "enum is already registered for bitwise operators"),
            ("enum A { B, xor }", "variant name `xor` is reserved for an operator method"),
            ("enum A { is_zero = 1 }", "variant name `is_zero` is reserved for an operator method"),
            (
                "enum A { B, #[cfg(any())] C, D }",
                "variant after a `#[cfg]` variant needs an explicit discriminant",
            ),
        ];
        for (item, message) in cases {
            assert_eq!(expand(item).err().as_deref(), Some(message), "{item}");
        }
    }

    #[test]
    fn pairs_default_with_its_derive() {
        let output = expand("#[derive(Default)] enum A { B, #[default] C }").unwrap();
        assert_eq!(output.trait_impls.len(), 10);
        assert!(tokens(output.trait_impls.last().unwrap()).contains("Self :: C"));

        let cases = [
            ("#[derive(Default)] enum A { B }", "`#[derive(Default)]` requires a `#[default]` variant"),
            ("enum A { #[default] B }", "`#[default]` requires `#[derive(Default)]`"),
            (
                "#[derive(Default)] enum A { #[default] B, #[default] C }",
                "multiple `#[default]` variants",
            ),
        ];
        for (item, message) in cases {
            assert_eq!(expand(item).err().as_deref(), Some(message), "{item}");
        }
    }

    #[test]
    fn leaves_computed_discriminants_to_a_declared_repr() {
        let output = expand("#[repr(i32)] enum A { B = 1, C = 1 << 31, D }").unwrap();
        let consts: Vec<_> = output.consts_impl.items.iter().map(tokens).collect();

        assert_eq!(
            consts,
            [
                "const B : Self = Self (1) ;",
                "const C : Self = Self (1 << 31) ;",
                "const D : Self = Self ((1 << 31) + 1) ;",
            ],
        );
    }

    #[test]
    fn accepts_cfg_variants_with_explicit_discriminants() {
        let output = expand("enum A { B, #[cfg(any())] C = 2, D = 2 }").unwrap();
        let consts: Vec<_> = output.consts_impl.items.iter().map(tokens).collect();

        assert_eq!(consts[1], "# [cfg (any ())] const C : Self = Self (2) ;");
        assert_eq!(consts[2], "const D : Self = Self (2) ;");
    }

    #[test]
    fn ignores_foreign_bitwise_attributes() {
        assert!(expand("#[other::bitwise] enum A { B }").is_ok());
    }
}
