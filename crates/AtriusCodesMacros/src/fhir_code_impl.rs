use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

use crate::attrs::{parse_member_attrs, parse_vocabulary_attrs, MemberAttrs};

pub(crate) fn generate_fhir_code_impl(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new(input.span(), "FhirCode only supports enums"));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "FhirCode does not support generic enums",
        ));
    }
    if data.variants.is_empty() {
        return Err(syn::Error::new(
            input.span(),
            "FhirCode requires at least one member",
        ));
    }

    let vocabulary = parse_vocabulary_attrs(name, &input.attrs)?;

    let mut idents = Vec::with_capacity(data.variants.len());
    let mut members = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "FhirCode members must be unit variants",
            ));
        }
        let member = parse_member_attrs(variant)?;
        if let Some(pos) = members
            .iter()
            .position(|m: &MemberAttrs| m.value.value() == member.value.value())
        {
            return Err(syn::Error::new(
                member.value.span(),
                format!(
                    "duplicate code '{}' (already used by {})",
                    member.value.value(),
                    idents[pos]
                ),
            ));
        }
        idents.push(&variant.ident);
        members.push(member);
    }

    let vocabulary_name = &vocabulary.name;
    let system = &vocabulary.system;
    let version = match &vocabulary.version {
        Some(v) => quote!(::core::option::Option::Some(#v)),
        None => quote!(::core::option::Option::None),
    };

    let codes: Vec<_> = members.iter().map(|m| &m.value).collect();
    let displays: Vec<_> = members.iter().map(|m| &m.display).collect();
    let definitions = members.iter().map(|m| match &m.definition {
        Some(d) => quote!(::core::option::Option::Some(#d)),
        None => quote!(::core::option::Option::None),
    });

    let krate = quote!(::atrius_fhir_codes);
    let serde = quote!(#krate::__private::serde);

    Ok(quote! {
        #[automatically_derived]
        impl #krate::CodedVocabulary for #name {
            const NAME: &'static str = #vocabulary_name;
            const SYSTEM: &'static str = #system;
            const VERSION: ::core::option::Option<&'static str> = #version;
            const MEMBERS: &'static [Self] = &[#(#name::#idents),*];

            fn code(self) -> &'static str {
                match self {
                    #(#name::#idents => #codes,)*
                }
            }

            fn display(self) -> &'static str {
                match self {
                    #(#name::#idents => #displays,)*
                }
            }

            fn definition(self) -> ::core::option::Option<&'static str> {
                match self {
                    #(#name::#idents => #definitions,)*
                }
            }

            fn from_code(code: &str) -> ::core::option::Option<Self> {
                match code {
                    #(#codes => ::core::option::Option::Some(#name::#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn constant(self) -> &'static #krate::Coded<Self> {
                match self {
                    #(
                        #name::#idents => {
                            static CONSTANT: #krate::Coded<#name> = #krate::Coded::__constant(#codes);
                            &CONSTANT
                        }
                    )*
                }
            }
        }

        #[automatically_derived]
        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(#krate::CodedVocabulary::code(*self))
            }
        }

        #[automatically_derived]
        impl ::core::str::FromStr for #name {
            type Err = #krate::CodeError;

            // `Self::Err` would be ambiguous for a member named `Err`
            fn from_str(s: &str) -> ::core::result::Result<Self, #krate::CodeError> {
                <Self as #krate::CodedVocabulary>::try_from_code(s)
            }
        }

        #[automatically_derived]
        impl ::core::convert::TryFrom<&str> for #name {
            type Error = #krate::CodeError;

            fn try_from(s: &str) -> ::core::result::Result<Self, #krate::CodeError> {
                <Self as #krate::CodedVocabulary>::try_from_code(s)
            }
        }

        #[automatically_derived]
        impl #serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: #serde::Serializer,
            {
                serializer.serialize_str(#krate::CodedVocabulary::code(*self))
            }
        }

        #[automatically_derived]
        impl<'de> #serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: #serde::Deserializer<'de>,
            {
                const CODES: &[&str] = &[#(#codes),*];
                let code = <::std::string::String as #serde::Deserialize>::deserialize(deserializer)?;
                <Self as #krate::CodedVocabulary>::from_code(&code)
                    .ok_or_else(|| #serde::de::Error::unknown_variant(&code, CODES))
            }
        }
    })
}
