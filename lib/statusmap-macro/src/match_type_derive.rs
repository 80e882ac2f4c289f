//! `MatchType` derive macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse2};

use crate::rename::RenameRule;

/// Enum-level options parsed from `#[match_type(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct MatchTypeEnumOptions {
    /// Rename all tags using the given case convention.
    rename_all: Option<RenameRule>,
}

/// Variant options parsed from `#[match_type(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct MatchTypeVariantOptions {
    /// Explicit tag for this variant.
    rename: Option<String>,
}

/// Expand the `#[derive(MatchType)]` macro.
pub fn expand_match_type_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let syn::Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input,
            "MatchType derive only supports enums",
        ));
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input,
            "MatchType derive needs at least one variant",
        ));
    }

    let enum_options = parse_enum_options(&input.attrs)?;

    let mut tags: Vec<String> = Vec::new();
    let mut arms = Vec::new();

    for variant in &data.variants {
        let ident = &variant.ident;
        let options = parse_variant_options(&variant.attrs)?;

        // Explicit rename > rename_all > variant name
        let tag = if let Some(rename) = options.rename {
            rename
        } else if let Some(rule) = enum_options.rename_all {
            rule.apply_to_variant(&ident.to_string())
        } else {
            ident.to_string()
        };

        if tags.contains(&tag) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("duplicate MatchType tag \"{tag}\""),
            ));
        }

        arms.push(quote! {
            Self::#ident { .. } => #tag,
        });
        tags.push(tag);
    }

    Ok(quote! {
        impl #impl_generics ::statusmap::MatchType for #name #ty_generics #where_clause {
            const TAGS: &'static [&'static str] = &[#(#tags),*];

            fn tag(&self) -> &'static str {
                match self {
                    #(#arms)*
                }
            }
        }
    })
}

/// Parse enum-level options from `#[match_type(...)]` attributes.
fn parse_enum_options(attrs: &[syn::Attribute]) -> syn::Result<MatchTypeEnumOptions> {
    let mut options = MatchTypeEnumOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("match_type") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let value: syn::LitStr = meta.value()?.parse()?;
                let rule = RenameRule::parse(&value.value()).ok_or_else(|| {
                    syn::Error::new_spanned(
                        &value,
                        format!(
                            "unknown rename_all value: \"{}\". Expected one of: {}",
                            value.value(),
                            RenameRule::ACCEPTED
                        ),
                    )
                })?;
                options.rename_all = Some(rule);
                Ok(())
            } else {
                Err(meta.error("unsupported match_type attribute, expected `rename_all`"))
            }
        })?;
    }

    Ok(options)
}

/// Parse variant options from `#[match_type(...)]` attributes.
fn parse_variant_options(attrs: &[syn::Attribute]) -> syn::Result<MatchTypeVariantOptions> {
    let mut options = MatchTypeVariantOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("match_type") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: syn::LitStr = meta.value()?.parse()?;
                options.rename = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported match_type attribute, expected `rename`"))
            }
        })?;
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn expand(input: TokenStream) -> String {
        expand_match_type_derive(input)
            .expect("expansion")
            .to_string()
    }

    fn expand_err(input: TokenStream) -> String {
        expand_match_type_derive(input)
            .expect_err("expansion should fail")
            .to_string()
    }

    #[test]
    fn tags_follow_rename_rules() {
        let output = expand(quote! {
            #[match_type(rename_all = "snake_case")]
            enum ApiError {
                NotFound(NotFound),
                #[match_type(rename = "auth")]
                Unauthorized { realm: String },
                Gone,
            }
        });
        assert!(output.contains(r#""not_found" , "auth" , "gone""#), "{output}");
        assert!(output.contains("Self :: Unauthorized { .. } => \"auth\""), "{output}");
    }

    #[test]
    fn rejects_structs() {
        let err = expand_err(quote! {
            struct NotAnEnum { id: u64 }
        });
        assert_eq!(err, "MatchType derive only supports enums");
    }

    #[test]
    fn rejects_empty_enums() {
        let err = expand_err(quote! {
            enum Never {}
        });
        assert_eq!(err, "MatchType derive needs at least one variant");
    }

    #[test]
    fn rejects_duplicate_tags() {
        let err = expand_err(quote! {
            #[match_type(rename_all = "lowercase")]
            enum Clash {
                NotFound,
                #[match_type(rename = "notfound")]
                Missing,
            }
        });
        assert_eq!(err, "duplicate MatchType tag \"notfound\"");
    }

    #[test]
    fn rejects_unknown_rename_rule() {
        let err = expand_err(quote! {
            #[match_type(rename_all = "Title Case")]
            enum ApiError { NotFound }
        });
        assert!(err.starts_with("unknown rename_all value"), "{err}");
    }
}
