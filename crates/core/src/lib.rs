//! # Diagnosis Core
//!
//! Business logic for recording and listing patient diagnoses.
//!
//! This crate contains:
//! - the `Patient` and `Diagnosis` entities
//! - repository traits plus an in-memory implementation
//! - the add-diagnosis command and get-diagnoses query handlers
//! - the [`Services`] facade that wires them together
//!
//! **No API concerns**: HTTP routing, request decoding and status codes belong in `api-rest`.

pub mod commands;
pub mod config;
pub mod constants;
pub mod diagnosis;
pub mod error;
pub mod patient;
pub mod queries;
pub mod repositories;
pub mod services;

pub use commands::{AddPatientDiagnosis, AddPatientDiagnosisHandler, AddPatientDiagnosisService};
pub use config::CoreConfig;
pub use diagnosis::Diagnosis;
pub use error::{
    ConfigError, ConfigResult, DiagnosisError, DiagnosisResult, RepositoryError, RepositoryResult,
};
pub use patient::{fixture_patient_id, Patient};
pub use queries::{GetDiagnosesHandler, GetDiagnosesQuery, GetDiagnosesService};
pub use repositories::memory::MemoryRepository;
pub use repositories::{DiagnosisRepository, PatientRepository};
pub use services::{Commands, DiagnosisServices, Queries, Services};

pub use diagnosis_types::NonEmptyText;
