//! Add a diagnosis to an existing patient.
//!
//! The command performs two writes: the patient (with the new diagnosis appended to its list)
//! and the standalone diagnosis record. They are not atomic. If the second write fails the
//! patient already carries the diagnosis and the error is reported as
//! [`DiagnosisError::AddingDiagnosis`]; nothing is rolled back.
//!
//! Concurrent adds for the same patient are reconciled through the repository's version check:
//! a [`RepositoryError::VersionConflict`] makes the command re-read the patient and append again,
//! so neither caller's diagnosis is lost from the patient's list.

use crate::diagnosis::Diagnosis;
use crate::error::{DiagnosisError, DiagnosisResult, RepositoryError};
use crate::patient::Patient;
use crate::repositories::{DiagnosisRepository, PatientRepository};
use diagnosis_types::NonEmptyText;
use std::sync::Arc;
use uuid::Uuid;

/// Input for [`AddPatientDiagnosisHandler::handle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddPatientDiagnosis {
    pub patient_id: Uuid,
    pub diagnosis: NonEmptyText,
    pub prescription: Option<String>,
}

pub trait AddPatientDiagnosisHandler: Send + Sync {
    fn handle(&self, command: AddPatientDiagnosis) -> DiagnosisResult<()>;
}

/// Repository-backed [`AddPatientDiagnosisHandler`].
#[derive(Clone)]
pub struct AddPatientDiagnosisService {
    patient_repo: Arc<dyn PatientRepository>,
    diagnosis_repo: Arc<dyn DiagnosisRepository>,
    update_attempts: usize,
}

impl AddPatientDiagnosisService {
    /// `update_attempts` is the total number of read-append-write rounds tried when the patient
    /// keeps changing underneath; values below 1 are treated as 1.
    pub fn new(
        patient_repo: Arc<dyn PatientRepository>,
        diagnosis_repo: Arc<dyn DiagnosisRepository>,
        update_attempts: usize,
    ) -> Self {
        Self {
            patient_repo,
            diagnosis_repo,
            update_attempts: update_attempts.max(1),
        }
    }

    fn fetch_patient(&self, patient_id: Uuid) -> DiagnosisResult<Patient> {
        match self.patient_repo.get_by_id(patient_id) {
            Ok(Some(patient)) => Ok(patient),
            Ok(None) => {
                tracing::info!(%patient_id, "patient not found");
                Err(DiagnosisError::PatientNotFound)
            }
            Err(e) => {
                tracing::error!(%patient_id, error = %e, "error getting patient");
                Err(DiagnosisError::GettingPatient)
            }
        }
    }

    /// Appends `diagnosis` to `patient` and writes it back. On a version conflict the patient is
    /// re-read and the same diagnosis value is appended again.
    fn append_to_patient(
        &self,
        mut patient: Patient,
        diagnosis: &Diagnosis,
    ) -> DiagnosisResult<()> {
        let patient_id = patient.id;
        let mut attempt = 1;

        loop {
            patient.diagnoses.push(diagnosis.clone());

            match self.patient_repo.update(patient) {
                Ok(()) => return Ok(()),
                Err(e @ RepositoryError::VersionConflict { .. })
                    if attempt < self.update_attempts =>
                {
                    tracing::debug!(%patient_id, attempt, error = %e, "retrying patient update");
                    attempt += 1;
                    patient = self.fetch_patient(patient_id)?;
                }
                Err(e) => {
                    tracing::error!(
                        %patient_id,
                        diagnosis_id = %diagnosis.id,
                        attempt,
                        error = %e,
                        "error updating patient"
                    );
                    return Err(DiagnosisError::UpdatingPatient);
                }
            }
        }
    }
}

impl AddPatientDiagnosisHandler for AddPatientDiagnosisService {
    fn handle(&self, command: AddPatientDiagnosis) -> DiagnosisResult<()> {
        let patient = self.fetch_patient(command.patient_id)?;

        let new_diagnosis = Diagnosis::new(
            command.patient_id,
            command.diagnosis,
            command.prescription,
        );

        self.append_to_patient(patient, &new_diagnosis)?;

        let diagnosis_id = new_diagnosis.id;
        if let Err(e) = self.diagnosis_repo.add_diagnosis(new_diagnosis) {
            tracing::error!(
                patient_id = %command.patient_id,
                %diagnosis_id,
                error = %e,
                "error adding diagnosis"
            );
            return Err(DiagnosisError::AddingDiagnosis);
        }

        tracing::info!(
            patient_id = %command.patient_id,
            %diagnosis_id,
            "patient diagnosis successfully added"
        );
        Ok(())
    }
}
