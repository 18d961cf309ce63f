//! # Vocabulary Generator CLI
//!
//! Regenerates the `code_systems` modules of `atrius-fhir-codes`.
//!
//! ## Usage
//!
//! ```bash
//! # Regenerate the R4 vocabularies in place
//! atrius-codes-gen
//!
//! # Generate from another bundle into a scratch directory
//! atrius-codes-gen --input bundle.json --output /tmp/code_systems --fhir-version R5
//! ```
//!
//! Set `RUST_LOG=debug` to list every file written.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use atrius_codes_gen::{generate, load_code_systems, GeneratorConfig};
use atrius_fhir_codes::FhirVersion;
use clap::Parser;
use tracing::info;

/// Command-line arguments for the vocabulary generator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// FHIR release the bundle belongs to.
    #[arg(long, value_enum, default_value_t = FhirVersion::default())]
    fhir_version: FhirVersion,

    /// Bundle of CodeSystem resources.
    /// Defaults to `resources/<release>/codesystems.json` in this crate.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output directory.
    /// Defaults to `crates/AtriusFhirCodes/src/<release>/code_systems`.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Path the generated modules import `Coded`, `FhirCode` and `VocabularyInfo` from.
    #[arg(long, default_value = "crate")]
    crate_path: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atrius_codes_gen=info".into()),
        )
        .init();

    let args = Args::parse();
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let input = args.input.unwrap_or_else(|| {
        manifest_dir
            .join("resources")
            .join(args.fhir_version.as_str())
            .join("codesystems.json")
    });
    if !input.exists() {
        return Err(anyhow!("codesystems.json not found at: {}", input.display()));
    }

    let output_dir = match args.output {
        Some(dir) => dir,
        None => manifest_dir
            .parent()
            .ok_or_else(|| anyhow!("expected crates/AtriusCodesGen to have a parent directory"))?
            .join("AtriusFhirCodes")
            .join("src")
            .join(args.fhir_version.module_name())
            .join("code_systems"),
    };

    info!("reading {} ({})", input.display(), args.fhir_version);
    let code_systems = load_code_systems(&input)?;
    info!("found {} code systems", code_systems.len());

    let config = GeneratorConfig {
        output_dir,
        fhir_version: args.fhir_version,
        crate_path: args.crate_path,
    };
    let summary = generate(code_systems, &config)?;

    for url in &summary.skipped {
        info!("skipped {}", url);
    }
    Ok(())
}
