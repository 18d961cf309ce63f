/// Enumeration of FHIR releases.
///
/// Vocabularies are generated per release into a module named after it
/// (`r4`, `r4b`, ...). Only releases whose Cargo feature is enabled have a
/// compiled module, but every release can be named, so the code generator
/// can target one that is not built yet.
///
/// # Feature Flags
///
/// - `R4`: compiles the `r4` vocabularies (default)
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_codes::FhirVersion;
///
/// let version = FhirVersion::R4;
/// assert_eq!(version.as_str(), "R4");
/// assert_eq!(version.to_string(), "R4");
/// assert_eq!(version.module_name(), "r4");
/// assert_eq!(version.release(), "4.0.1");
/// ```
///
/// # CLI Integration
///
/// This enum implements `clap::ValueEnum` for command-line argument parsing:
///
/// ```rust,no_run
/// use clap::Parser;
/// use atrius_fhir_codes::FhirVersion;
///
/// #[derive(Parser)]
/// struct Args {
///     #[arg(value_enum, default_value_t = FhirVersion::default())]
///     version: FhirVersion,
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FhirVersion {
    /// FHIR 4.0.1 (normative) - The current normative version
    #[default]
    R4,
    /// FHIR 4.3.0 - Intermediate version with additional features
    R4B,
    /// FHIR 5.0.0 - Next major version with significant changes
    R5,
    /// FHIR 6.0.0 (draft) - Future version under development
    R6,
}

impl FhirVersion {
    /// Returns the string representation of the FHIR version, e.g. `"R4"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FhirVersion::R4 => "R4",
            FhirVersion::R4B => "R4B",
            FhirVersion::R5 => "R5",
            FhirVersion::R6 => "R6",
        }
    }

    /// Name of the Rust module holding this release's vocabularies.
    pub fn module_name(&self) -> &'static str {
        match self {
            FhirVersion::R4 => "r4",
            FhirVersion::R4B => "r4b",
            FhirVersion::R5 => "r5",
            FhirVersion::R6 => "r6",
        }
    }

    /// Business version of the release, used when a code system omits its own.
    pub fn release(&self) -> &'static str {
        match self {
            FhirVersion::R4 => "4.0.1",
            FhirVersion::R4B => "4.3.0",
            FhirVersion::R5 => "5.0.0",
            FhirVersion::R6 => "6.0.0",
        }
    }
}

impl std::fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Implements `clap::ValueEnum` so the generator can take `--fhir-version R4`.
impl clap::ValueEnum for FhirVersion {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            FhirVersion::R4,
            FhirVersion::R4B,
            FhirVersion::R5,
            FhirVersion::R6,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}
