//! `Classify` derive macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Fields, parse2};

/// Expand the `#[derive(Classify)]` macro.
///
/// Newtype variants report their single field, every other variant reports
/// the enum value itself.
pub fn expand_classify_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let syn::Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input,
            "Classify derive only supports enums",
        ));
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input,
            "Classify derive needs at least one variant",
        ));
    }

    let arms = data.variants.iter().map(|variant| {
        let ident = &variant.ident;
        match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => quote! {
                Self::#ident(payload) => payload as &dyn ::core::any::Any,
            },
            _ => quote! {
                Self::#ident { .. } => self as &dyn ::core::any::Any,
            },
        }
    });

    Ok(quote! {
        impl #impl_generics ::statusmap::Classify for #name #ty_generics #where_clause {
            fn runtime_class(&self) -> &dyn ::core::any::Any {
                match self {
                    #(#arms)*
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    #[test]
    fn newtype_variants_report_payload() {
        let output = expand_classify_derive(quote! {
            enum ApiError {
                NotFound(NotFound),
                Pair(u8, u8),
                Gone,
            }
        })
        .expect("expansion")
        .to_string();

        assert!(output.contains("Self :: NotFound (payload) => payload as"), "{output}");
        assert!(output.contains("Self :: Pair { .. } => self as"), "{output}");
        assert!(output.contains("Self :: Gone { .. } => self as"), "{output}");
    }

    #[test]
    fn rejects_structs() {
        let err = expand_classify_derive(quote! {
            struct Payload(u8);
        })
        .expect_err("expansion should fail");
        assert_eq!(err.to_string(), "Classify derive only supports enums");
    }
}
