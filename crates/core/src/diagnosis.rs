//! Diagnosis entity.

use chrono::{DateTime, Utc};
use diagnosis_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A medical finding recorded against one patient.
///
/// Diagnoses are created only by the add-diagnosis command and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub id: Uuid,
    pub description: NonEmptyText,
    /// Back-reference to the owning patient.
    pub patient_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub prescription: Option<String>,
}

impl Diagnosis {
    /// Creates a diagnosis with a fresh v4 identifier stamped with the current UTC time.
    pub fn new(patient_id: Uuid, description: NonEmptyText, prescription: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            patient_id,
            created_at: Utc::now(),
            prescription,
        }
    }
}
