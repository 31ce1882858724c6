//! List a patient's diagnoses by patient name.

use crate::diagnosis::Diagnosis;
use crate::error::{DiagnosisError, DiagnosisResult};
use crate::repositories::PatientRepository;
use diagnosis_types::NonEmptyText;
use std::sync::Arc;

/// Input for [`GetDiagnosesHandler::handle`]. The name is matched exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetDiagnosesQuery {
    pub patient_name: NonEmptyText,
}

pub trait GetDiagnosesHandler: Send + Sync {
    /// Returns the patient's diagnoses, oldest first. An existing patient with no diagnoses
    /// yields an empty list, not an error.
    fn handle(&self, query: GetDiagnosesQuery) -> DiagnosisResult<Vec<Diagnosis>>;
}

#[derive(Clone)]
pub struct GetDiagnosesService {
    patient_repo: Arc<dyn PatientRepository>,
}

impl GetDiagnosesService {
    pub fn new(patient_repo: Arc<dyn PatientRepository>) -> Self {
        Self { patient_repo }
    }
}

impl GetDiagnosesHandler for GetDiagnosesService {
    fn handle(&self, query: GetDiagnosesQuery) -> DiagnosisResult<Vec<Diagnosis>> {
        let patient_name = query.patient_name.as_str();

        match self.patient_repo.get_by_name(patient_name) {
            Ok(Some(patient)) => Ok(patient.diagnoses),
            Ok(None) => {
                tracing::info!(patient_name, "patient not found");
                Err(DiagnosisError::PatientNotFound)
            }
            Err(e) => {
                tracing::error!(patient_name, error = %e, "error getting patient");
                Err(DiagnosisError::GettingPatient)
            }
        }
    }
}
