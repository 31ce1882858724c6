//! Repository stubs for handler tests.

use crate::diagnosis::Diagnosis;
use crate::error::{RepositoryError, RepositoryResult};
use crate::patient::Patient;
use crate::repositories::memory::MemoryRepository;
use crate::repositories::{DiagnosisRepository, PatientRepository};
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

/// Wraps a [`MemoryRepository`] and fails selected operations.
#[derive(Debug, Default)]
pub(crate) struct StubRepository {
    pub inner: MemoryRepository,
    pub fail_reads: bool,
    pub update_error: Option<RepositoryError>,
    pub fail_add_diagnosis: bool,
    /// Number of upcoming updates rejected with a version conflict before updates pass through.
    pub conflicting_updates: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub get_by_id_calls: AtomicUsize,
}

impl StubRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn get_by_id_calls(&self) -> usize {
        self.get_by_id_calls.load(Ordering::SeqCst)
    }
}

impl PatientRepository for StubRepository {
    fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Patient>> {
        self.get_by_id_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(RepositoryError::LockPoisoned("stub"));
        }
        self.inner.get_by_id(id)
    }

    fn get_by_name(&self, name: &str) -> RepositoryResult<Option<Patient>> {
        if self.fail_reads {
            return Err(RepositoryError::LockPoisoned("stub"));
        }
        self.inner.get_by_name(name)
    }

    fn update(&self, patient: Patient) -> RepositoryResult<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.update_error {
            return Err(err.clone());
        }
        let pending = self
            .conflicting_updates
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        if pending.is_ok() {
            return Err(RepositoryError::VersionConflict {
                patient_id: patient.id,
                expected: patient.version,
                found: patient.version + 1,
            });
        }
        self.inner.update(patient)
    }
}

impl DiagnosisRepository for StubRepository {
    fn add_diagnosis(&self, diagnosis: Diagnosis) -> RepositoryResult<()> {
        if self.fail_add_diagnosis {
            return Err(RepositoryError::LockPoisoned("stub"));
        }
        self.inner.add_diagnosis(diagnosis)
    }
}
