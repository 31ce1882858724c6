//! State-changing operations.

pub mod add_patient_diagnosis;

pub use add_patient_diagnosis::{
    AddPatientDiagnosis, AddPatientDiagnosisHandler, AddPatientDiagnosisService,
};
