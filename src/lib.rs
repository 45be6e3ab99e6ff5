//! cbom-validator - Consistency and conformance checks for CBOM documents
//!
//! This library validates CBOM (Cryptography Bill of Materials) documents in
//! CycloneDX 1.6 JSON form. It ships two independent analyzers, each exposed
//! as its own binary:
//!
//! - **cbom-consistency**: recomputes aggregate statistics from the
//!   `findings` array and checks them against the document's self-reported
//!   `summary` block
//! - **cbom-schema**: checks structural CycloneDX 1.6 conventions
//!   (bomFormat, specVersion, metadata, component crypto properties)
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`cbom_validation`): Pure validation logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cbom_validator::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let document_reader = FileSystemReader::new();
//!
//! // Create use case
//! let use_case = CheckConsistencyUseCase::new(document_reader);
//!
//! // Execute
//! let request = ValidationRequest::new(vec![PathBuf::from("cbom.json")], false);
//! let report = use_case.validate(&request);
//!
//! // Format and present output
//! let formatter = ConsistencyReportFormatter::new();
//! StdoutPresenter::new().present(&formatter.format(&report))?;
//! std::process::exit(report.exit_code().as_i32());
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cbom_validation;
pub mod cli;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StdoutPresenter;
    pub use crate::adapters::outbound::filesystem::FileSystemReader;
    pub use crate::adapters::outbound::formatters::{
        ConsistencyReportFormatter, SchemaReportFormatter,
    };
    pub use crate::application::dto::ValidationRequest;
    pub use crate::application::use_cases::{CheckConsistencyUseCase, CheckSchemaUseCase};
    pub use crate::cbom_validation::domain::{
        CbomDocument, FileOutcome, FileReport, MessageSeverity, ValidationMessage,
        ValidationReport,
    };
    pub use crate::ports::inbound::CbomValidationPort;
    pub use crate::ports::outbound::{DocumentReader, ReportFormatter, ReportPresenter};
    pub use crate::shared::error::ExitCode;
    pub use crate::shared::Result;
}
