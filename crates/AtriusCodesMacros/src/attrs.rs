use heck::ToKebabCase;
use syn::parse::Parser;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, Lit, LitStr, Meta, MetaList, MetaNameValue, Variant};

/// Parsed `#[fhir_code(...)]` container attribute.
pub(crate) struct VocabularyAttrs {
    pub name: LitStr,
    pub system: LitStr,
    pub version: Option<LitStr>,
}

/// Parsed `#[code(...)]` variant attribute, with defaults filled in.
pub(crate) struct MemberAttrs {
    pub value: LitStr,
    pub display: LitStr,
    pub definition: Option<LitStr>,
}

// Reads `key = "literal", ...` pairs from a list attribute.
fn name_values(attr: &Attribute, expected: &str) -> syn::Result<Vec<(String, LitStr)>> {
    let Meta::List(MetaList { tokens, .. }) = &attr.meta else {
        return Err(syn::Error::new(attr.span(), format!("expected #[{expected}(...)]")));
    };

    let parser = syn::punctuated::Punctuated::<MetaNameValue, syn::Token![,]>::parse_terminated;
    let list = parser.parse2(tokens.clone())?;

    let mut out = Vec::with_capacity(list.len());
    for nv in list {
        let span = nv.span();
        let key = nv
            .path
            .get_ident()
            .map(|i| i.to_string())
            .ok_or_else(|| syn::Error::new(span, "expected an identifier key"))?;
        let lit = match nv.value {
            Expr::Lit(expr_lit) => match expr_lit.lit {
                Lit::Str(s) => s,
                _ => return Err(syn::Error::new(span, "expected string literal")),
            },
            _ => return Err(syn::Error::new(span, "expected string literal")),
        };
        out.push((key, lit));
    }
    Ok(out)
}

pub(crate) fn parse_vocabulary_attrs(
    ident: &syn::Ident,
    attrs: &[Attribute],
) -> syn::Result<VocabularyAttrs> {
    let mut name = None;
    let mut system = None;
    let mut version = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("fhir_code")) {
        for (key, lit) in name_values(attr, "fhir_code")? {
            match key.as_str() {
                "name" => name = Some(lit),
                "system" => system = Some(lit),
                "version" => version = Some(lit),
                other => {
                    return Err(syn::Error::new(
                        lit.span(),
                        format!("unknown fhir_code key: {other}"),
                    ));
                }
            }
        }
    }

    let system = system.ok_or_else(|| {
        syn::Error::new(
            ident.span(),
            "FhirCode requires #[fhir_code(system = \"...\")]",
        )
    })?;

    Ok(VocabularyAttrs {
        name: name.unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span())),
        system,
        version,
    })
}

pub(crate) fn parse_member_attrs(variant: &Variant) -> syn::Result<MemberAttrs> {
    let mut value = None;
    let mut display = None;
    let mut definition = None;

    for attr in variant.attrs.iter().filter(|a| a.path().is_ident("code")) {
        for (key, lit) in name_values(attr, "code")? {
            match key.as_str() {
                "value" => value = Some(lit),
                "display" => display = Some(lit),
                "definition" => definition = Some(lit),
                other => {
                    return Err(syn::Error::new(
                        lit.span(),
                        format!("unknown code key: {other}"),
                    ));
                }
            }
        }
    }

    // `InProgress` -> "in-progress" when no explicit value is given
    let value = value.unwrap_or_else(|| {
        LitStr::new(&variant.ident.to_string().to_kebab_case(), variant.ident.span())
    });
    let display = display.unwrap_or_else(|| value.clone());

    Ok(MemberAttrs {
        value,
        display,
        definition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn member_defaults_to_kebab_case_code() {
        let variant: Variant = parse_quote!(EnteredInError);
        let attrs = parse_member_attrs(&variant).unwrap();
        assert_eq!(attrs.value.value(), "entered-in-error");
        assert_eq!(attrs.display.value(), "entered-in-error");
        assert!(attrs.definition.is_none());
    }

    #[test]
    fn member_reads_explicit_keys() {
        let variant: Variant = parse_quote! {
            #[code(value = "<=", display = "Less or Equal to", definition = "The actual value is less than or equal to the given value.")]
            Le
        };
        let attrs = parse_member_attrs(&variant).unwrap();
        assert_eq!(attrs.value.value(), "<=");
        assert_eq!(attrs.display.value(), "Less or Equal to");
        assert!(attrs.definition.is_some());
    }

    #[test]
    fn vocabulary_requires_system() {
        let ident: syn::Ident = parse_quote!(Status);
        let attrs: Vec<Attribute> = vec![parse_quote!(#[fhir_code(name = "Status")])];
        let err = parse_vocabulary_attrs(&ident, &attrs).err().unwrap();
        assert!(err.to_string().contains("system"));
    }

    #[test]
    fn rejects_unknown_keys_and_non_strings() {
        let variant: Variant = parse_quote!(#[code(value = "a", colour = "red")] A);
        assert!(parse_member_attrs(&variant).is_err());

        let variant: Variant = parse_quote!(#[code(value = 1)] A);
        assert!(parse_member_attrs(&variant).is_err());
    }
}
