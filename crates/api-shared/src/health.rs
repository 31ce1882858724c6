use crate::types::HealthRes;

/// Health check shared by every transport.
pub struct HealthService;

impl HealthService {
    /// Reports the service as alive.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Diagnosis service is alive".into(),
        }
    }
}
