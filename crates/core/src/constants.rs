//! Constants used throughout the diagnosis core crate.

/// Identifier of the patient every seeded store starts with.
pub const FIXTURE_PATIENT_ID: &str = "11111111-1111-1111-1111-111111111111";

pub const FIXTURE_PATIENT_LEGAL_ID: &str = "ABC1234";

pub const FIXTURE_PATIENT_NAME: &str = "John Doe";

pub const FIXTURE_PATIENT_ADDRESS: &str = "Wall Street 123";

pub const FIXTURE_PATIENT_PHONE: &str = "123456789";

pub const FIXTURE_PATIENT_EMAIL: &str = "john.doe@example.com";

/// Default number of read-append-write attempts when adding a diagnosis races another writer.
pub const DEFAULT_UPDATE_ATTEMPTS: usize = 5;
