//! Application services exposed to the transport layers.
//!
//! [`Services`] only wires handlers to repositories; it has no behaviour of its own.

use crate::commands::{AddPatientDiagnosisHandler, AddPatientDiagnosisService};
use crate::config::CoreConfig;
use crate::queries::{GetDiagnosesHandler, GetDiagnosesService};
use crate::repositories::{DiagnosisRepository, PatientRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct Commands {
    pub add_patient_diagnosis: Arc<dyn AddPatientDiagnosisHandler>,
}

#[derive(Clone)]
pub struct Queries {
    pub get_diagnoses: Arc<dyn GetDiagnosesHandler>,
}

#[derive(Clone)]
pub struct DiagnosisServices {
    pub commands: Commands,
    pub queries: Queries,
}

/// Every service of the application layer.
#[derive(Clone)]
pub struct Services {
    pub diagnosis: DiagnosisServices,
}

impl Services {
    /// Builds the repository-backed handlers.
    ///
    /// # Arguments
    ///
    /// * `patient_repo` - Patient storage, shared by the command and the query
    /// * `diagnosis_repo` - Standalone diagnosis storage
    /// * `cfg` - Core configuration (update retry budget)
    pub fn new(
        patient_repo: Arc<dyn PatientRepository>,
        diagnosis_repo: Arc<dyn DiagnosisRepository>,
        cfg: &CoreConfig,
    ) -> Self {
        let add_patient_diagnosis = AddPatientDiagnosisService::new(
            patient_repo.clone(),
            diagnosis_repo,
            cfg.update_attempts(),
        );
        let get_diagnoses = GetDiagnosesService::new(patient_repo);

        Self::from_handlers(Arc::new(add_patient_diagnosis), Arc::new(get_diagnoses))
    }

    /// Builds the facade from already constructed handlers.
    pub fn from_handlers(
        add_patient_diagnosis: Arc<dyn AddPatientDiagnosisHandler>,
        get_diagnoses: Arc<dyn GetDiagnosesHandler>,
    ) -> Self {
        Self {
            diagnosis: DiagnosisServices {
                commands: Commands {
                    add_patient_diagnosis,
                },
                queries: Queries { get_diagnoses },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AddPatientDiagnosis;
    use crate::error::DiagnosisError;
    use crate::patient::fixture_patient_id;
    use crate::queries::GetDiagnosesQuery;
    use crate::repositories::memory::MemoryRepository;
    use diagnosis_types::NonEmptyText;
    use uuid::Uuid;

    fn services(repo: &MemoryRepository) -> Services {
        Services::new(
            Arc::new(repo.clone()),
            Arc::new(repo.clone()),
            &CoreConfig::default(),
        )
    }

    fn john_doe() -> GetDiagnosesQuery {
        GetDiagnosesQuery {
            patient_name: NonEmptyText::new("John Doe").unwrap(),
        }
    }

    #[test]
    fn test_add_then_get_round_trip() {
        let repo = MemoryRepository::new();
        let services = services(&repo);

        services
            .diagnosis
            .commands
            .add_patient_diagnosis
            .handle(AddPatientDiagnosis {
                patient_id: fixture_patient_id(),
                diagnosis: NonEmptyText::new("flu").unwrap(),
                prescription: None,
            })
            .unwrap();

        let diagnoses = services
            .diagnosis
            .queries
            .get_diagnoses
            .handle(john_doe())
            .unwrap();

        assert_eq!(diagnoses.len(), 1);
        assert_eq!(diagnoses[0].description.as_str(), "flu");
        assert_eq!(diagnoses[0].prescription, None);
    }

    #[test]
    fn test_unknown_patient_id_creates_nothing() {
        let repo = MemoryRepository::new();
        let services = services(&repo);

        let err = services
            .diagnosis
            .commands
            .add_patient_diagnosis
            .handle(AddPatientDiagnosis {
                patient_id: Uuid::new_v4(),
                diagnosis: NonEmptyText::new("flu").unwrap(),
                prescription: None,
            })
            .unwrap_err();

        assert_eq!(err, DiagnosisError::PatientNotFound);
        assert_eq!(repo.diagnosis_count().unwrap(), 0);
        assert!(services
            .diagnosis
            .queries
            .get_diagnoses
            .handle(john_doe())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_clones_share_handlers() {
        let repo = MemoryRepository::new();
        let services = services(&repo);
        let cloned = services.clone();

        assert!(Arc::ptr_eq(
            &services.diagnosis.commands.add_patient_diagnosis,
            &cloned.diagnosis.commands.add_patient_diagnosis
        ));
    }
}
