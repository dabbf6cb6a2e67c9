use crate::model::appointment::Appointment;
use serde::{Deserialize, Serialize};

/// A doctor in the directory.
///
/// `available_slots` is informational only. Booking an appointment never touches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub available_slots: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointments: Option<Vec<Appointment>>,
}

impl Doctor {
    pub fn appointment_count(&self) -> usize {
        self.appointments.as_ref().map_or(0, Vec::len)
    }
}
