// SPDX-License-Identifier: MPL-2.0

//! Absorbs `#[derive]` attributes written on the input enum.
//!
//! The emitted newtype always derives the comparison, hashing, and copy traits, so user derives of
//! those are dropped instead of duplicated. `Debug` and `Default` are implemented by hand because
//! the derived versions would describe the newtype rather than the enum.

use super::*;

/// Traits that the emitted item always derives.
const BUILTIN: [&str; 7] = ["Clone", "Copy", "PartialEq", "Eq", "PartialOrd", "Ord", "Hash"];

/// What remained of the user's `#[derive]` attributes.
pub(crate) struct Derives {
    /// The span of `Debug` in a `#[derive]` attribute, if present.
    pub(crate) debug: Option<Span2>,
    /// The span of `Default` in a `#[derive]` attribute, if present.
    pub(crate) default: Option<Span2>,
}

impl Derives {
    /// Removes builtin traits, `Debug`, and `Default` from every `#[derive]` attribute in `attrs`.
    ///
    /// Attributes left with no traits are removed. Traits are recognized by the last segment of
    /// their path, so `Clone` and `::core::clone::Clone` are treated alike.
    ///
    /// # Errors
    ///
    /// An error is returned if a `#[derive]` attribute is not a comma-separated list of paths.
    pub(crate) fn absorb(attrs: &mut Vec<syn::Attribute>) -> Result<Self> {
        let mut output = Self { debug: None, default: None };
        let mut kept = Vec::with_capacity(attrs.len());

        for mut attr in attrs.drain(..) {
            if !attr.path().is_ident("derive") {
                kept.push(attr);
                continue;
            }

            let paths = attr
                .parse_args_with(Punctuated::<syn::Path, syn::Token![,]>::parse_terminated)
                .map_err(Error)?;
            let remaining: Punctuated<syn::Path, syn::Token![,]> = paths
                .into_iter()
                .filter(|path| {
                    let Some(ident) = path.segments.last().map(|seg| &seg.ident) else {
                        return true;
                    };
                    match ident.to_string().as_str() {
                        "Debug" => {
                            output.debug = Some(ident.span());
                            false
                        }
                        "Default" => {
                            output.default = Some(ident.span());
                            false
                        }
                        name => !BUILTIN.contains(&name),
                    }
                })
                .collect();
            if remaining.is_empty() {
                continue;
            }
            if let syn::Meta::List(list) = &mut attr.meta {
                list.tokens = remaining.into_token_stream();
            }
            kept.push(attr);
        }
        *attrs = kept;

        Ok(output)
    }

    /// Creates the `#[derive]` attribute carrying every builtin trait, with the given span.
    pub(crate) fn builtin_attr(span: Span2) -> syn::Attribute {
        let paths: Punctuated<syn::Path, syn::Token![,]> = [
            path!(span; ::core::clone::Clone),
            path!(span; ::core::marker::Copy),
            path!(span; ::core::cmp::PartialEq),
            path!(span; ::core::cmp::Eq),
            path!(span; ::core::cmp::PartialOrd),
            path!(span; ::core::cmp::Ord),
            path!(span; ::core::hash::Hash),
        ]
        .into_iter()
        .collect();

        outer_attr(span, path!(span; derive), paths.into_token_stream())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absorb(item: &str) -> (Vec<String>, Derives) {
        let mut item: syn::ItemEnum = syn::parse_str(item).unwrap();
        let derives = Derives::absorb(&mut item.attrs).unwrap();
        let attrs = item.attrs.iter().map(|it| it.to_token_stream().to_string()).collect();

        (attrs, derives)
    }

    #[test]
    fn drops_builtin_traits() {
        let (attrs, derives) = absorb(
            "#[derive(Clone, Copy, ::core::cmp::PartialEq, Eq, PartialOrd, Ord, Hash)] enum A { B }",
        );

        assert!(attrs.is_empty());
        assert!(derives.debug.is_none());
        assert!(derives.default.is_none());
    }

    #[test]
    fn takes_debug_and_default() {
        let (attrs, derives) = absorb("#[derive(Debug, Default, Clone)] enum A { #[default] B }");

        assert!(attrs.is_empty());
        assert!(derives.debug.is_some());
        assert!(derives.default.is_some());
    }

    #[test]
    fn keeps_foreign_traits_and_attributes() {
        let (attrs, _) = absorb("/// Docs.\n#[derive(Copy, serde::Serialize)] #[repr(u8)] enum A { B }");

        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs[1], "# [derive (serde :: Serialize)]");
        assert_eq!(attrs[2], "# [repr (u8)]");
    }
}
