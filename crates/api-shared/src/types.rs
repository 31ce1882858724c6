//! Request and response bodies of the diagnoses API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body of `POST /patient/{patientID}/diagnoses`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AddDiagnosisReq {
    /// Free-text finding. Surrounding whitespace is trimmed; blank or missing text is rejected.
    #[serde(default)]
    #[schema(example = "flu")]
    pub diagnosis: String,
    #[serde(default)]
    #[schema(example = "rest and fluids")]
    pub prescription: Option<String>,
}

/// One diagnosis as returned to API callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosisRes {
    pub id: String,
    pub description: String,
    #[serde(rename = "patientID")]
    pub patient_id: String,
    /// RFC 3339 UTC timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescription: Option<String>,
}

/// Body of a successful `GET /patient/diagnoses`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GetDiagnosesRes {
    pub patient_name: String,
    /// Oldest first.
    pub patient_diagnoses: Vec<DiagnosisRes>,
}

/// JSON error body returned with every non-2xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HttpError {
    #[schema(example = 400)]
    pub code: u16,
    #[schema(example = "status bad request")]
    pub message: String,
}
