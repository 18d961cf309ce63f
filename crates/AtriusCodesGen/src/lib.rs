//! AtriusCodesGen
//!
//! Generates the typed FHIR vocabularies of `atrius-fhir-codes` from a FHIR
//! `Bundle` of `CodeSystem` resources.
//!
//! ## Inputs
//! - `resources/<release>/codesystems.json`: a bundle whose entries are
//!   `CodeSystem` resources with enumerated `concept` lists. Other resource
//!   types are ignored, as are code systems that do not enumerate concepts.
//!
//! ## Outputs
//! Generated files are written into `crates/AtriusFhirCodes/src/<release>/code_systems`:
//! - `<module>.rs`: one module per CodeSystem, holding the member enum
//!   (`#[derive(FhirCode)]`), the `<Name>Code` coded value alias and, for the
//!   vocabularies that historically had one, a deprecated `<Name>ValueSet` alias
//! - `mod.rs`: `pub mod` + `pub use` lines and the `VOCABULARIES` registry table
//!
//! ## Naming
//! - module names come from `CodeSystem.id` in snake_case
//! - enum names come from `CodeSystem.name`
//! - variant names come from each concept code in PascalCase, with the
//!   comparison symbols spelled out (`<=` becomes `Le`) and numeric codes
//!   prefixed with `N`
//!
//! ## Determinism
//! Code systems are processed in module-name order (`BTreeMap`) and concepts
//! in declaration order, so regenerating from the same bundle produces the
//! same files.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use atrius_fhir_codes::FhirVersion;
use heck::{ToSnakeCase, ToUpperCamelCase};
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use serde::Deserialize;
use syn::LitStr;
use tracing::{debug, info, warn};

/// Header written at the top of every generated file.
pub const GENERATED_HEADER: &str = "// @generated by AtriusCodesGen\n// DO NOT EDIT MANUALLY\n\n";

/// Vocabularies that used to expose a separate `ValueSet` enum. They get a
/// deprecated alias pointing at the one canonical enum.
pub const LEGACY_VALUE_SET_NAMES: &[&str] = &[
    "ActivityDefinitionKind",
    "CarePlanActivityStatus",
    "ContactPointSystem",
    "DaysOfWeek",
    "EncounterStatus",
    "EventTiming",
    "MedicationStatementStatus",
    "PropertyType",
    "ProvenanceEntityRole",
    "StructureDefinitionKind",
    "VisionBase",
];

// -------------------- Input model --------------------

#[derive(Debug, Deserialize)]
struct Bundle {
    entry: Option<Vec<BundleEntry>>,
}

#[derive(Debug, Deserialize)]
struct BundleEntry {
    resource: Resource,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "resourceType")]
enum Resource {
    CodeSystem(CodeSystem),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CodeSystem {
    pub id: Option<String>,
    pub url: String,
    pub version: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub concept: Option<Vec<Concept>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Concept {
    pub code: String,
    pub display: Option<String>,
    pub definition: Option<String>,
    pub extension: Option<Vec<ConceptExtension>>,
    /// Child concepts of hierarchical code systems.
    pub concept: Option<Vec<Concept>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConceptExtension {
    pub url: String,
    #[serde(rename = "valueString")]
    pub value_string: Option<String>,
}

// -------------------- Driver --------------------

/// Where and how to write the generated modules.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory that receives `<module>.rs` files and `mod.rs`.
    pub output_dir: PathBuf,
    pub fhir_version: FhirVersion,
    /// Path the generated `use` lines import from (`crate` inside `atrius-fhir-codes`).
    pub crate_path: String,
}

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// `(module, enum name)` pairs in module order.
    pub modules: Vec<(String, String)>,
    pub skipped: Vec<String>,
}

/// Reads every `CodeSystem` entry of a bundle.
pub fn load_code_systems(path: &Path) -> Result<Vec<CodeSystem>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed reading {}", path.display()))?;
    parse_code_systems(&json)
        .with_context(|| format!("failed parsing JSON bundle {}", path.display()))
}

pub fn parse_code_systems(json: &str) -> Result<Vec<CodeSystem>> {
    let bundle: Bundle = serde_json::from_str(json)?;
    Ok(bundle
        .entry
        .unwrap_or_default()
        .into_iter()
        .filter_map(|e| match e.resource {
            Resource::CodeSystem(cs) => Some(cs),
            Resource::Other => None,
        })
        .collect())
}

/// Writes one module per enumerated code system plus `mod.rs`.
pub fn generate(code_systems: Vec<CodeSystem>, config: &GeneratorConfig) -> Result<GenerationSummary> {
    let crate_path: syn::Path = syn::parse_str(&config.crate_path)
        .with_context(|| format!("invalid crate path '{}'", config.crate_path))?;

    // module_name -> (enum_name, code system)
    let mut by_module: BTreeMap<String, (String, CodeSystem)> = BTreeMap::new();
    let mut skipped = Vec::new();

    for cs in code_systems {
        let has_concepts = cs.concept.as_ref().is_some_and(|c| !c.is_empty());
        let (Some(enum_name), Some(base_module), true) =
            (codesystem_enum_name(&cs), codesystem_module_name(&cs), has_concepts)
        else {
            warn!("skipping code system {} (no id, name or enumerated concepts)", cs.url);
            skipped.push(cs.url.clone());
            continue;
        };

        // Ensure uniqueness of module names
        let mut module = base_module.clone();
        let mut suffix: usize = 2;
        while by_module.contains_key(&module) {
            module = format!("{}_{}", base_module, suffix);
            suffix += 1;
        }
        by_module.insert(module, (enum_name, cs));
    }

    // Every module is glob re-exported, so exported names must not collide.
    let mut exported: BTreeSet<String> = BTreeSet::new();
    for (module, (enum_name, _)) in &by_module {
        for name in exported_names(enum_name) {
            if !exported.insert(name.clone()) {
                bail!("generated name {} from module {} collides with another vocabulary", name, module);
            }
        }
    }

    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create output dir {}", config.output_dir.display()))?;

    for (module, (enum_name, cs)) in &by_module {
        let src = render_code_system(enum_name, cs, config.fhir_version, &crate_path)?;
        let path = config.output_dir.join(format!("{}.rs", module));
        fs::write(&path, src).with_context(|| format!("failed writing {}", path.display()))?;
        debug!("wrote {} ({})", path.display(), enum_name);
    }

    let modules: Vec<(String, String)> = by_module
        .iter()
        .map(|(module, (enum_name, _))| (module.clone(), enum_name.clone()))
        .collect();

    let mod_rs = render_mod_rs(&modules, config.fhir_version, &crate_path)?;
    let mod_path = config.output_dir.join("mod.rs");
    fs::write(&mod_path, mod_rs).with_context(|| format!("failed writing {}", mod_path.display()))?;

    info!(
        "generated {} vocabularies into {} ({} skipped)",
        modules.len(),
        config.output_dir.display(),
        skipped.len()
    );

    Ok(GenerationSummary { modules, skipped })
}

fn exported_names(enum_name: &str) -> Vec<String> {
    let mut names = vec![enum_name.to_string(), format!("{}Code", enum_name)];
    if LEGACY_VALUE_SET_NAMES.contains(&enum_name) {
        names.push(format!("{}ValueSet", enum_name));
    }
    names
}

// -------------------- Rendering --------------------

fn lit(s: &str) -> LitStr {
    LitStr::new(s, Span::call_site())
}

fn unparse(tokens: TokenStream, what: &str) -> Result<String> {
    let file_ast: syn::File =
        syn::parse2(tokens).with_context(|| format!("failed parsing tokens for {}", what))?;
    let mut src = String::from(GENERATED_HEADER);
    src.push_str(&prettyplease::unparse(&file_ast));
    Ok(src)
}

/// Renders the module for one code system.
pub fn render_code_system(
    enum_name: &str,
    cs: &CodeSystem,
    fhir_version: FhirVersion,
    crate_path: &syn::Path,
) -> Result<String> {
    let concepts = flatten_concepts(cs.concept.as_deref().unwrap_or_default());
    if concepts.is_empty() {
        bail!("code system {} has no concepts", cs.url);
    }

    let enum_ident = format_ident!("{}", enum_name);
    let code_alias = format_ident!("{}Code", enum_name);
    let name_lit = lit(enum_name);
    let system_lit = lit(&cs.url);
    let version_lit = lit(cs.version.as_deref().unwrap_or(fhir_version.release()));

    let mut docs = vec![
        format!("FHIR CodeSystem: {}", enum_name),
        format!("Canonical URL: {}", cs.url),
    ];
    if let Some(t) = &cs.title {
        docs.push(format!("Title: {}", t));
    }
    if let Some(st) = &cs.status {
        docs.push(format!("Status: {}", st));
    }
    if let Some(desc) = &cs.description {
        docs.push(String::new());
        docs.push(desc.clone());
    }
    let enum_docs = doc_attrs(&docs);

    let mut variant_names: Vec<String> = Vec::new();
    let mut variants: Vec<TokenStream> = Vec::new();

    for c in &concepts {
        let base_name = to_rust_ident_pascal(&c.code);

        // Ensure unique variant identifiers within the enum
        let mut name = base_name.clone();
        let mut suffix: usize = 2;
        while variant_names.contains(&name) {
            name = format!("{}_{}", base_name, suffix);
            suffix += 1;
        }
        let var_ident = format_ident!("{}", name);
        variant_names.push(name);

        let mut vdocs = Vec::new();
        if let Some(d) = &c.display {
            vdocs.push(format!("Display: {}", d));
        }
        if let Some(defn) = &c.definition {
            if !vdocs.is_empty() {
                vdocs.push(String::new());
            }
            vdocs.push(format!("Definition: {}", defn));
        }
        for cm in concept_comments(c) {
            vdocs.push(format!("Comment: {}", cm));
        }
        let vdoc_attrs = doc_attrs(&vdocs);

        let code_lit = lit(&c.code);
        let display_lit = lit(c.display.as_deref().unwrap_or(&c.code));
        let code_attr = match &c.definition {
            Some(defn) => {
                let defn_lit = lit(&single_line(defn));
                quote!(#[code(value = #code_lit, display = #display_lit, definition = #defn_lit)])
            }
            None => quote!(#[code(value = #code_lit, display = #display_lit)]),
        };

        variants.push(quote! {
            #vdoc_attrs
            #code_attr
            #var_ident,
        });
    }

    let alias_doc = lit(&format!(" Coded [`{}`] value: optional `id`, `extension` and member code.", enum_name));
    let legacy_alias = if LEGACY_VALUE_SET_NAMES.contains(&enum_name) {
        let legacy_ident = format_ident!("{}ValueSet", enum_name);
        let legacy_doc = lit(&format!(" Legacy name of [`{}`].", enum_name));
        let note = lit(&format!("use `{}`", enum_name));
        quote! {
            #[doc = #legacy_doc]
            #[deprecated(note = #note)]
            pub type #legacy_ident = #enum_ident;
        }
    } else {
        TokenStream::new()
    };

    let tokens = quote! {
        use #crate_path::{Coded, FhirCode};

        #enum_docs
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
        #[fhir_code(name = #name_lit, system = #system_lit, version = #version_lit)]
        pub enum #enum_ident {
            #(#variants)*
        }

        #[doc = #alias_doc]
        pub type #code_alias = Coded<#enum_ident>;

        #legacy_alias
    };

    unparse(tokens, enum_name)
}

/// Renders `mod.rs`: module declarations, glob re-exports and the registry table.
pub fn render_mod_rs(
    modules: &[(String, String)],
    fhir_version: FhirVersion,
    crate_path: &syn::Path,
) -> Result<String> {
    let module_idents: Vec<_> = modules.iter().map(|(m, _)| format_ident!("{}", m)).collect();
    let enum_idents: Vec<_> = modules.iter().map(|(_, e)| format_ident!("{}", e)).collect();
    let inner_doc = lit(&format!(
        " FHIR {} ({}) code systems bound with `required` strength.",
        fhir_version,
        fhir_version.release()
    ));

    let tokens = quote! {
        #![doc = #inner_doc]

        #(pub mod #module_idents;)*

        #(pub use #module_idents::*;)*

        use #crate_path::VocabularyInfo;

        /// Every generated vocabulary, in module order.
        pub static VOCABULARIES: &[VocabularyInfo] = &[
            #(VocabularyInfo::of::<#enum_idents>(),)*
        ];
    };

    unparse(tokens, "mod.rs")
}

// -------------------- Generation helpers --------------------

fn flatten_concepts(nodes: &[Concept]) -> Vec<&Concept> {
    let mut out = Vec::new();
    for n in nodes {
        out.push(n);
        if let Some(children) = n.concept.as_deref() {
            out.extend(flatten_concepts(children));
        }
    }
    out
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn rust_type_from_fhir_name(name: &str) -> String {
    // FHIR `name` is already in PascalCase/CamelCase and often contains acronyms.
    // Preserve existing case for alphanumerics and treat separators as word breaks.
    let cleaned: String = name
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { ' ' })
        .collect();

    let mut out = String::new();
    for w in cleaned.split_whitespace() {
        if w.starts_with(|c: char| c.is_ascii_digit()) {
            out.push('N');
        }
        out.push_str(w);
    }

    if out.is_empty() {
        return "CodeSystem".to_string();
    }

    match out.as_str() {
        "Self" | "Type" | "Super" | "Crate" | "Mod" | "Move" => format!("{}__", out),
        _ => out,
    }
}

fn rust_type_from_title(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { ' ' })
        .collect();

    let mut out = String::new();
    for w in cleaned.split_whitespace() {
        let mut chars = w.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }
    out
}

pub fn codesystem_enum_name(cs: &CodeSystem) -> Option<String> {
    if let Some(n) = cs.name.as_deref() {
        return Some(rust_type_from_fhir_name(n));
    }
    cs.title
        .as_deref()
        .or(cs.id.as_deref())
        .map(rust_type_from_title)
        .filter(|n| !n.is_empty())
        .map(|n| rust_type_from_fhir_name(&n))
}

pub fn codesystem_module_name(cs: &CodeSystem) -> Option<String> {
    let id = cs.id.as_deref()?;

    let mut s: String = id
        .to_snake_case()
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' { ch } else { '_' })
        .collect();

    // Must not start with a digit for a Rust module name.
    if s.starts_with(|c: char| c.is_ascii_digit()) {
        s = format!("cs_{}", s);
    }

    if s.is_empty() { None } else { Some(s) }
}

fn concept_comments(c: &Concept) -> Vec<String> {
    const COMMENTS_URL: &str = "http://hl7.org/fhir/StructureDefinition/codesystem-concept-comments";

    c.extension
        .as_ref()
        .into_iter()
        .flat_map(|v| v.iter())
        .filter(|e| e.url == COMMENTS_URL)
        .filter_map(|e| e.value_string.clone())
        .collect()
}

pub fn to_rust_ident_pascal(code: &str) -> String {
    // Symbolic codes used by comparator vocabularies
    match code {
        "<" => return "Lt".to_string(),
        "<=" => return "Le".to_string(),
        ">" => return "Gt".to_string(),
        ">=" => return "Ge".to_string(),
        "=" => return "Eq".to_string(),
        "!=" => return "Ne".to_string(),
        _ => {}
    }

    // heck splits on separators and camelCase humps: "notEquals" -> "NotEquals"
    let mut out = code.to_upper_camel_case();

    // Pure symbols fall back to their bytes: "~" -> Sym_7e
    if out.is_empty() {
        out.push_str("Sym");
        for b in code.as_bytes() {
            out.push_str(&format!("_{:02x}", b));
        }
    }

    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out = format!("N{}", out);
    }

    if out == "Self" { format!("{}__", out) } else { out }
}

fn doc_attrs(lines: &[String]) -> TokenStream {
    // Normalize CR/LF and emit one #[doc] per line so paragraph breaks survive.
    let mut out: Vec<TokenStream> = Vec::new();

    for l in lines {
        let normalized = l.replace("\r\n", "\n").replace('\r', "\n");
        for part in normalized.split('\n') {
            if part.trim().is_empty() {
                out.push(quote!(#[doc = ""]));
            } else {
                let s = format!(" {}", part.trim());
                out.push(quote!(#[doc = #s]));
            }
        }
    }

    quote!(#(#out)*)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_variants() {
        assert_eq!(to_rust_ident_pascal("in-progress"), "InProgress");
        assert_eq!(to_rust_ident_pascal("entered-in-error"), "EnteredInError");
        assert_eq!(to_rust_ident_pascal("MORN.early"), "MornEarly");
        assert_eq!(to_rust_ident_pascal("notEquals"), "NotEquals");
        assert_eq!(to_rust_ident_pascal("GET"), "Get");
        assert_eq!(to_rust_ident_pascal("<="), "Le");
        assert_eq!(to_rust_ident_pascal("!="), "Ne");
        assert_eq!(to_rust_ident_pascal("12"), "N12");
        assert_eq!(to_rust_ident_pascal("~"), "Sym_7e");
        assert_eq!(to_rust_ident_pascal("type"), "Type");
        assert_eq!(to_rust_ident_pascal("self"), "Self__");
    }

    #[test]
    fn module_names_from_ids() {
        let mut cs = CodeSystem {
            id: Some("encounter-status".to_string()),
            url: "http://hl7.org/fhir/encounter-status".to_string(),
            version: None,
            name: Some("EncounterStatus".to_string()),
            title: None,
            status: None,
            description: None,
            concept: None,
        };
        assert_eq!(codesystem_module_name(&cs).as_deref(), Some("encounter_status"));

        cs.id = Some("identityAssuranceLevel".to_string());
        assert_eq!(codesystem_module_name(&cs).as_deref(), Some("identity_assurance_level"));

        cs.id = Some("2-digit".to_string());
        assert_eq!(codesystem_module_name(&cs).as_deref(), Some("cs_2_digit"));
    }

    #[test]
    fn enum_names_prefer_name_then_title() {
        let mut cs = CodeSystem {
            id: Some("http-verb".to_string()),
            url: "http://hl7.org/fhir/http-verb".to_string(),
            version: None,
            name: Some("HTTPVerb".to_string()),
            title: Some("HTTP Verb".to_string()),
            status: None,
            description: None,
            concept: None,
        };
        assert_eq!(codesystem_enum_name(&cs).as_deref(), Some("HTTPVerb"));
        cs.name = None;
        assert_eq!(codesystem_enum_name(&cs).as_deref(), Some("HttpVerb"));
        cs.title = None;
        assert_eq!(codesystem_enum_name(&cs).as_deref(), Some("HttpVerb"));
    }

    #[test]
    fn doc_attrs_split_lines() {
        let tokens = doc_attrs(&["first\r\nsecond".to_string(), String::new()]);
        let rendered = tokens.to_string();
        assert!(rendered.contains("\" first\""));
        assert!(rendered.contains("\" second\""));
        assert_eq!(rendered.matches("doc").count(), 3);
    }

    #[test]
    fn hierarchical_concepts_are_flattened_in_order() {
        let json = r#"{
            "code": "parent",
            "concept": [{"code": "child", "concept": [{"code": "grandchild"}]}]
        }"#;
        let root: Concept = serde_json::from_str(json).unwrap();
        let codes: Vec<_> = flatten_concepts(std::slice::from_ref(&root))
            .into_iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(codes, ["parent", "child", "grandchild"]);
    }
}
