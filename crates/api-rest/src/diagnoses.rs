//! Diagnosis endpoints.
//!
//! Input validation lives here: the patient id must parse as a UUID and the diagnosis text and
//! patient name must be non-blank once trimmed. Only validated values reach the core handlers.

use crate::error::ApiError;
use crate::AppState;
use api_shared::{AddDiagnosisReq, DiagnosisRes, GetDiagnosesRes};
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use diagnosis_core::{AddPatientDiagnosis, Diagnosis, GetDiagnosesQuery, NonEmptyText};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetDiagnosesParams {
    /// Exact name of the patient whose diagnoses are listed.
    pub patient_name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/patient/{patientID}/diagnoses",
    tag = "diagnosis",
    params(("patientID" = String, Path, description = "patient ID")),
    request_body = AddDiagnosisReq,
    responses(
        (status = 201, description = "Diagnosis added"),
        (status = 400, description = "Bad request", body = api_shared::HttpError),
        (status = 404, description = "Patient not found", body = api_shared::HttpError),
        (status = 500, description = "Internal server error", body = api_shared::HttpError)
    )
)]
/// Add a diagnosis to a patient
///
/// The body is decoded as JSON whatever `Content-Type` the client sends.
///
/// # Errors
/// - `400` if the patient id is not a UUID, the body cannot be decoded or the diagnosis is blank
/// - `404` if no patient has the given id
/// - `500` for any storage failure
#[axum::debug_handler]
pub async fn add_diagnosis(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let patient_id = Uuid::parse_str(&patient_id).map_err(|_| ApiError::InvalidId)?;
    let req: AddDiagnosisReq =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let diagnosis = NonEmptyText::new(&req.diagnosis).map_err(|_| ApiError::InvalidDiagnosis)?;

    state
        .services
        .diagnosis
        .commands
        .add_patient_diagnosis
        .handle(AddPatientDiagnosis {
            patient_id,
            diagnosis,
            prescription: req.prescription,
        })?;

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/patient/diagnoses",
    tag = "diagnosis",
    params(GetDiagnosesParams),
    responses(
        (status = 200, description = "Patient diagnoses", body = GetDiagnosesRes),
        (status = 400, description = "Bad request", body = api_shared::HttpError),
        (status = 404, description = "Patient not found", body = api_shared::HttpError),
        (status = 500, description = "Internal server error", body = api_shared::HttpError)
    )
)]
/// Get patient diagnoses
///
/// Looks the patient up by exact name and returns their diagnoses, oldest first.
#[axum::debug_handler]
pub async fn get_diagnoses(
    State(state): State<AppState>,
    params: Result<Query<GetDiagnosesParams>, QueryRejection>,
) -> Result<Json<GetDiagnosesRes>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let patient_name = params
        .patient_name
        .and_then(|name| NonEmptyText::new(name).ok())
        .ok_or(ApiError::InvalidPatientName)?;

    let diagnoses = state
        .services
        .diagnosis
        .queries
        .get_diagnoses
        .handle(GetDiagnosesQuery {
            patient_name: patient_name.clone(),
        })?;

    Ok(Json(GetDiagnosesRes {
        patient_name: patient_name.into(),
        patient_diagnoses: diagnoses.iter().map(diagnosis_res).collect(),
    }))
}

fn diagnosis_res(diagnosis: &Diagnosis) -> DiagnosisRes {
    DiagnosisRes {
        id: diagnosis.id.to_string(),
        description: diagnosis.description.to_string(),
        patient_id: diagnosis.patient_id.to_string(),
        created_at: diagnosis.created_at.to_rfc3339(),
        prescription: diagnosis.prescription.clone(),
    }
}
