//! Read-only operations.

pub mod get_diagnoses;

pub use get_diagnoses::{GetDiagnosesHandler, GetDiagnosesQuery, GetDiagnosesService};
