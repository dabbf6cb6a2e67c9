use crate::model::doctor::Doctor;
use crate::model::patient::Patient;
use serde::{Deserialize, Serialize};

/// A booking between one patient and one doctor.
///
/// `date` is kept exactly as submitted: either `YYYY-MM-DD` or an ISO 8601
/// date-time such as the `YYYY-MM-DDTHH:MM` produced by a `datetime-local` input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub date: String,
    pub patient_id: i64,
    pub doctor_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<Box<Patient>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<Box<Doctor>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jane() -> Patient {
        Patient {
            id: 1,
            name: "Jane".into(),
            age: 30,
            gender: "Female".into(),
            contact: "555-1234".into(),
            disease: "Flu".into(),
            appointments: None,
        }
    }

    #[test]
    fn bare_appointment_omits_relations() {
        let appointment = Appointment {
            id: 4,
            date: "2025-06-01".into(),
            patient_id: 1,
            doctor_id: 2,
            patient: None,
            doctor: None,
        };
        let value = serde_json::to_value(&appointment).unwrap();
        assert_eq!(
            value,
            json!({"id": 4, "date": "2025-06-01", "patientId": 1, "doctorId": 2})
        );
    }

    #[test]
    fn embedded_relations_use_camel_case() {
        let appointment = Appointment {
            id: 1,
            date: "2025-06-01".into(),
            patient_id: 1,
            doctor_id: 1,
            patient: Some(Box::new(jane())),
            doctor: Some(Box::new(Doctor {
                id: 1,
                name: "Smith".into(),
                specialization: "Cardiology".into(),
                available_slots: 5,
                appointments: None,
            })),
        };
        let value = serde_json::to_value(&appointment).unwrap();
        assert_eq!(value["doctor"]["availableSlots"], json!(5));
        assert_eq!(value["patient"]["name"], json!("Jane"));
        assert!(value["patient"].get("appointments").is_none());
    }

    #[test]
    fn patient_without_appointments_key_deserializes() {
        let patient: Patient = serde_json::from_value(json!({
            "id": 1, "name": "Jane", "age": 30, "gender": "Female",
            "contact": "555-1234", "disease": "Flu"
        }))
        .unwrap();
        assert_eq!(patient, jane());
        assert_eq!(patient.appointment_count(), 0);
    }
}
