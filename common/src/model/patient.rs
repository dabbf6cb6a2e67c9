use crate::model::appointment::Appointment;
use serde::{Deserialize, Serialize};

/// A registered patient.
///
/// `appointments` is only present when the record was loaded with its relations
/// (collection and item GETs); a freshly created patient serializes without it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub contact: String,
    pub disease: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointments: Option<Vec<Appointment>>,
}

impl Patient {
    /// Number of loaded appointments, zero when relations were not included.
    pub fn appointment_count(&self) -> usize {
        self.appointments.as_ref().map_or(0, Vec::len)
    }
}
