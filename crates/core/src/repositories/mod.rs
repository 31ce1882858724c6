//! Storage capabilities consumed by the diagnosis handlers.
//!
//! Handlers only ever see these traits, never a concrete store, so a durable backend can replace
//! [`memory::MemoryRepository`] without touching the command or query code.

use crate::diagnosis::Diagnosis;
use crate::error::RepositoryResult;
use crate::patient::Patient;
use uuid::Uuid;

pub mod memory;

#[cfg(test)]
pub(crate) mod testing;

/// Read and write access to patients.
pub trait PatientRepository: Send + Sync {
    /// Looks a patient up by identifier. `Ok(None)` means no such patient.
    fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Patient>>;

    /// Looks a patient up by exact, case-sensitive name. If several patients share a name, which
    /// one is returned is up to the backend.
    fn get_by_name(&self, name: &str) -> RepositoryResult<Option<Patient>>;

    /// Replaces the stored patient with `patient`.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::VersionConflict`](crate::RepositoryError::VersionConflict) if
    ///   `patient.version` is not the version currently stored.
    /// - [`RepositoryError::PatientMissing`](crate::RepositoryError::PatientMissing) if no
    ///   patient with that id is stored.
    fn update(&self, patient: Patient) -> RepositoryResult<()>;
}

/// Write access to the standalone diagnosis records.
pub trait DiagnosisRepository: Send + Sync {
    /// Inserts `diagnosis`, overwriting any record with the same id.
    fn add_diagnosis(&self, diagnosis: Diagnosis) -> RepositoryResult<()>;
}
