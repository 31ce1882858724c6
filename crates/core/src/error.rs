use uuid::Uuid;

/// Typed outcomes of the diagnosis command and query handlers.
///
/// The transport layer branches on these variants to pick a status code; the display strings
/// are for logs, not for end users.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosisError {
    #[error("error getting patient")]
    GettingPatient,
    #[error("patient not found")]
    PatientNotFound,
    #[error("error updating patient")]
    UpdatingPatient,
    #[error("error adding diagnosis")]
    AddingDiagnosis,
}

pub type DiagnosisResult<T> = std::result::Result<T, DiagnosisError>;

/// Failures reported by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0} lock poisoned")]
    LockPoisoned(&'static str),
    #[error("patient {patient_id} changed concurrently (expected {expected}, found {found})")]
    VersionConflict {
        patient_id: Uuid,
        expected: u64,
        found: u64,
    },
    #[error("patient {0} is not stored")]
    PatientMissing(Uuid),
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Invalid startup configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
