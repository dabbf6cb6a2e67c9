//! The REST contract shared by the server and its clients.
//!
//! Each entity exposes a collection path plus the fixed messages the server
//! answers with on failure. The browser services reuse the same strings when a
//! call fails, so the user sees one message per operation whichever side failed.

use crate::model::{Appointment, Doctor, Patient};
use crate::requests::{NewAppointment, NewDoctor, NewPatient};
use serde::{Deserialize, Serialize};

/// Body of every JSON error response: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// An entity reachable through a collection endpoint.
pub trait Resource {
    /// Payload accepted by `POST` on the collection.
    type Create: Serialize;

    const COLLECTION: &'static str;
    const FETCH_FAILED: &'static str;
    const CREATE_FAILED: &'static str;
}

/// An entity that also has an item endpoint (`COLLECTION/{id}`).
pub trait ItemResource: Resource {
    const NOT_FOUND: &'static str;
    const FETCH_ONE_FAILED: &'static str;
}

impl Resource for Patient {
    type Create = NewPatient;

    const COLLECTION: &'static str = "/api/patients";
    const FETCH_FAILED: &'static str = "Failed to fetch patients";
    const CREATE_FAILED: &'static str = "Failed to create patient";
}

impl ItemResource for Patient {
    const NOT_FOUND: &'static str = "Patient not found";
    const FETCH_ONE_FAILED: &'static str = "Failed to fetch patient";
}

impl Resource for Doctor {
    type Create = NewDoctor;

    const COLLECTION: &'static str = "/api/doctors";
    const FETCH_FAILED: &'static str = "Failed to fetch doctors";
    const CREATE_FAILED: &'static str = "Failed to create doctor";
}

impl ItemResource for Doctor {
    const NOT_FOUND: &'static str = "Doctor not found";
    const FETCH_ONE_FAILED: &'static str = "Failed to fetch doctor";
}

impl Resource for Appointment {
    type Create = NewAppointment;

    const COLLECTION: &'static str = "/api/appointments";
    const FETCH_FAILED: &'static str = "Failed to fetch appointments";
    const CREATE_FAILED: &'static str = "Failed to create appointment";
}

/// Path of the item endpoint for `id`.
pub fn item_path<R: ItemResource>(id: i64) -> String {
    format!("{}/{}", R::COLLECTION, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_paths_hang_off_the_collection() {
        assert_eq!(item_path::<Patient>(7), "/api/patients/7");
        assert_eq!(item_path::<Doctor>(1), "/api/doctors/1");
    }

    #[test]
    fn error_body_shape() {
        let body = serde_json::to_string(&ErrorBody::new(Patient::NOT_FOUND)).unwrap();
        assert_eq!(body, r#"{"error":"Patient not found"}"#);
    }
}
