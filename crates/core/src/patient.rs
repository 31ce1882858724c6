//! Patient entity.

use crate::constants::{
    FIXTURE_PATIENT_ADDRESS, FIXTURE_PATIENT_EMAIL, FIXTURE_PATIENT_LEGAL_ID, FIXTURE_PATIENT_NAME,
    FIXTURE_PATIENT_PHONE,
};
use crate::diagnosis::Diagnosis;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A patient and the diagnoses recorded against them.
///
/// Contact fields are opaque; the core performs no format validation on them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub legal_id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Oldest first.
    pub diagnoses: Vec<Diagnosis>,
    /// Revision counter owned by the repository. Updates carry the version that was read and
    /// are rejected if the stored patient has moved on.
    #[serde(default)]
    pub version: u64,
}

impl Patient {
    /// Creates a patient with no diagnoses at version 0.
    pub fn new(
        id: Uuid,
        legal_id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            legal_id: legal_id.into(),
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            email: email.into(),
            diagnoses: Vec::new(),
            version: 0,
        }
    }

    /// The seed patient every fixture-enabled store starts with.
    pub fn fixture() -> Self {
        Self::new(
            fixture_patient_id(),
            FIXTURE_PATIENT_LEGAL_ID,
            FIXTURE_PATIENT_NAME,
            FIXTURE_PATIENT_ADDRESS,
            FIXTURE_PATIENT_PHONE,
            FIXTURE_PATIENT_EMAIL,
        )
    }
}

/// Identifier of [`Patient::fixture`].
pub fn fixture_patient_id() -> Uuid {
    Uuid::from_u128(0x1111_1111_1111_1111_1111_1111_1111_1111)
}
