//! In-memory repository.
//!
//! Patients and diagnoses live in two hash maps behind a single reader/writer lock. Each trait
//! call holds the lock for one map access only; the add-diagnosis command relies on the patient
//! version check in [`PatientRepository::update`] rather than on holding the lock across its
//! read and write.
//!
//! Nothing is persisted: all state is lost when the process exits.

use crate::config::CoreConfig;
use crate::diagnosis::Diagnosis;
use crate::error::{RepositoryError, RepositoryResult};
use crate::patient::Patient;
use crate::repositories::{DiagnosisRepository, PatientRepository};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

#[derive(Debug, Default)]
struct Store {
    patients: HashMap<Uuid, Patient>,
    diagnoses: HashMap<Uuid, Diagnosis>,
}

/// Process-memory store implementing both repository traits.
///
/// Clones share the same underlying maps.
#[derive(Clone, Debug)]
pub struct MemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl MemoryRepository {
    /// Creates a store seeded with [`Patient::fixture`].
    pub fn new() -> Self {
        let repo = Self::empty();
        repo.seed(Patient::fixture());
        repo
    }

    /// Creates a store with no patients.
    pub fn empty() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
        }
    }

    /// Creates a store seeded according to `cfg`.
    pub fn from_config(cfg: &CoreConfig) -> Self {
        if cfg.seed_fixtures() {
            Self::new()
        } else {
            Self::empty()
        }
    }

    /// Stores `patient`, replacing any patient with the same id regardless of version.
    ///
    /// This is the out-of-band provisioning path; handlers never call it.
    pub fn insert_patient(&self, patient: Patient) -> RepositoryResult<()> {
        self.write()?.patients.insert(patient.id, patient);
        Ok(())
    }

    /// Returns the standalone diagnosis record with identifier `id`.
    pub fn diagnosis(&self, id: Uuid) -> RepositoryResult<Option<Diagnosis>> {
        Ok(self.read()?.diagnoses.get(&id).cloned())
    }

    /// Number of standalone diagnosis records.
    pub fn diagnosis_count(&self) -> RepositoryResult<usize> {
        Ok(self.read()?.diagnoses.len())
    }

    fn seed(&self, patient: Patient) {
        // Freshly created lock, cannot be poisoned.
        if let Ok(mut store) = self.store.write() {
            store.patients.insert(patient.id, patient);
        }
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Store>> {
        self.store
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("memory store"))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Store>> {
        self.store
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("memory store"))
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientRepository for MemoryRepository {
    fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Patient>> {
        Ok(self.read()?.patients.get(&id).cloned())
    }

    fn get_by_name(&self, name: &str) -> RepositoryResult<Option<Patient>> {
        Ok(self
            .read()?
            .patients
            .values()
            .find(|p| p.name == name)
            .cloned())
    }

    fn update(&self, mut patient: Patient) -> RepositoryResult<()> {
        let mut store = self.write()?;
        let stored = store
            .patients
            .get_mut(&patient.id)
            .ok_or(RepositoryError::PatientMissing(patient.id))?;

        if stored.version != patient.version {
            return Err(RepositoryError::VersionConflict {
                patient_id: patient.id,
                expected: patient.version,
                found: stored.version,
            });
        }

        patient.version += 1;
        *stored = patient;
        Ok(())
    }
}

impl DiagnosisRepository for MemoryRepository {
    fn add_diagnosis(&self, diagnosis: Diagnosis) -> RepositoryResult<()> {
        self.write()?.diagnoses.insert(diagnosis.id, diagnosis);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::fixture_patient_id;
    use diagnosis_types::NonEmptyText;

    fn test_diagnosis(patient_id: Uuid, text: &str) -> Diagnosis {
        Diagnosis::new(patient_id, NonEmptyText::new(text).unwrap(), None)
    }

    #[test]
    fn test_new_seeds_fixture_patient() {
        let repo = MemoryRepository::new();

        let patient = repo
            .get_by_id(fixture_patient_id())
            .unwrap()
            .expect("fixture patient should be seeded");
        assert_eq!(patient.name, "John Doe");
        assert!(patient.diagnoses.is_empty());
    }

    #[test]
    fn test_empty_has_no_patients() {
        let repo = MemoryRepository::empty();
        assert!(repo.get_by_id(fixture_patient_id()).unwrap().is_none());
        assert!(repo.get_by_name("John Doe").unwrap().is_none());
    }

    #[test]
    fn test_from_config_respects_seed_flag() {
        let seeded = MemoryRepository::from_config(&CoreConfig::new(true, 1).unwrap());
        let unseeded = MemoryRepository::from_config(&CoreConfig::new(false, 1).unwrap());

        assert!(seeded.get_by_id(fixture_patient_id()).unwrap().is_some());
        assert!(unseeded.get_by_id(fixture_patient_id()).unwrap().is_none());
    }

    #[test]
    fn test_get_by_name_is_exact_match() {
        let repo = MemoryRepository::new();

        assert!(repo.get_by_name("John Doe").unwrap().is_some());
        assert!(repo.get_by_name("john doe").unwrap().is_none());
        assert!(repo.get_by_name("John").unwrap().is_none());
    }

    #[test]
    fn test_add_diagnosis_stores_record() {
        let repo = MemoryRepository::new();
        let diagnosis = test_diagnosis(fixture_patient_id(), "test desc");

        repo.add_diagnosis(diagnosis.clone()).unwrap();

        assert_eq!(repo.diagnosis(diagnosis.id).unwrap(), Some(diagnosis));
        assert_eq!(repo.diagnosis_count().unwrap(), 1);
    }

    #[test]
    fn test_add_diagnosis_overwrites_same_id() {
        let repo = MemoryRepository::new();
        let first = test_diagnosis(fixture_patient_id(), "first");
        let mut second = test_diagnosis(fixture_patient_id(), "second");
        second.id = first.id;

        repo.add_diagnosis(first.clone()).unwrap();
        repo.add_diagnosis(second.clone()).unwrap();

        assert_eq!(repo.diagnosis_count().unwrap(), 1);
        assert_eq!(repo.diagnosis(first.id).unwrap(), Some(second));
    }

    #[test]
    fn test_update_bumps_version() {
        let repo = MemoryRepository::new();
        let mut patient = repo.get_by_id(fixture_patient_id()).unwrap().unwrap();
        patient.diagnoses.push(test_diagnosis(patient.id, "flu"));

        repo.update(patient).unwrap();

        let stored = repo.get_by_id(fixture_patient_id()).unwrap().unwrap();
        assert_eq!(stored.version, 1);
        assert_eq!(stored.diagnoses.len(), 1);
    }

    #[test]
    fn test_update_rejects_stale_version() {
        let repo = MemoryRepository::new();
        let first = repo.get_by_id(fixture_patient_id()).unwrap().unwrap();
        let stale = first.clone();

        repo.update(first).unwrap();
        let err = repo.update(stale).unwrap_err();

        assert_eq!(
            err,
            RepositoryError::VersionConflict {
                patient_id: fixture_patient_id(),
                expected: 0,
                found: 1,
            }
        );
    }

    #[test]
    fn test_update_unknown_patient_fails() {
        let repo = MemoryRepository::empty();
        let patient = Patient::fixture();

        let err = repo.update(patient).unwrap_err();
        assert_eq!(err, RepositoryError::PatientMissing(fixture_patient_id()));
    }

    #[test]
    fn test_clones_share_state() {
        let repo = MemoryRepository::empty();
        let clone = repo.clone();

        clone.insert_patient(Patient::fixture()).unwrap();

        assert!(repo.get_by_name("John Doe").unwrap().is_some());
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let repo = MemoryRepository::new();
        let poisoner = repo.clone();

        let _ = std::thread::spawn(move || {
            let _guard = poisoner.store.write().unwrap();
            panic!("poison the store");
        })
        .join();

        assert_eq!(
            repo.get_by_name("John Doe").unwrap_err(),
            RepositoryError::LockPoisoned("memory store")
        );
    }
}
