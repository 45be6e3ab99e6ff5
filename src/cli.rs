use clap::Parser;
use std::path::PathBuf;

/// Validate CBOM JSON summary consistency
#[derive(Parser, Debug)]
#[command(name = "cbom-consistency")]
#[command(version)]
#[command(about = "Validate CBOM JSON summary consistency", long_about = None)]
pub struct ConsistencyArgs {
    /// Path(s) to CBOM JSON file(s)
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl ConsistencyArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Validate CBOM against CycloneDX 1.6 conventions
#[derive(Parser, Debug)]
#[command(name = "cbom-schema")]
#[command(version)]
#[command(about = "Validate CBOM against CycloneDX 1.6 conventions", long_about = None)]
pub struct SchemaArgs {
    /// Path(s) to CBOM JSON file(s)
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl SchemaArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
