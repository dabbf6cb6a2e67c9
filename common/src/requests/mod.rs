//! Create payloads accepted by the collection endpoints.
//!
//! Patients and doctors are deserialized strictly: a missing field or a value of
//! the wrong JSON type fails the request. Appointments arrive as an
//! `AppointmentRequest` whose ids may be numbers or numeric strings, and are
//! resolved into a `NewAppointment` before they reach the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Fields of a `Patient` minus its id and relations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub contact: String,
    pub disease: String,
}

/// Fields of a `Doctor` minus its id and relations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
    pub available_slots: i64,
}

/// A fully resolved appointment ready to be inserted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub date: String,
}

/// Raw body of `POST /api/appointments`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    #[serde(default)]
    pub patient_id: Value,
    #[serde(default)]
    pub doctor_id: Value,
    #[serde(default)]
    pub date: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// An id field did not coerce to an integer.
    NotANumber(&'static str),
    /// `date` was truthy but not a string.
    InvalidDate,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::NotANumber(field) => write!(f, "{} is not a number", field),
            RequestError::InvalidDate => write!(f, "date must be a string"),
        }
    }
}

impl std::error::Error for RequestError {}

impl AppointmentRequest {
    /// Coerces the ids and fills in `today` when no date was given.
    ///
    /// `today` must already be formatted as `YYYY-MM-DD`. A date that is absent,
    /// `null`, `false`, `0` or the empty string counts as not given.
    pub fn resolve(self, today: &str) -> Result<NewAppointment, RequestError> {
        let patient_id =
            coerce_int(&self.patient_id).ok_or(RequestError::NotANumber("patientId"))?;
        let doctor_id = coerce_int(&self.doctor_id).ok_or(RequestError::NotANumber("doctorId"))?;

        let date = match self.date {
            Value::String(s) if !s.is_empty() => s,
            Value::String(_) | Value::Null | Value::Bool(false) => today.to_string(),
            Value::Number(ref n) if n.as_f64() == Some(0.0) => today.to_string(),
            _ => return Err(RequestError::InvalidDate),
        };

        Ok(NewAppointment {
            patient_id,
            doctor_id,
            date,
        })
    }
}

/// Shown when a form is submitted with a blank or non-numeric number field.
pub const INCOMPLETE_FORM: &str = "Please fill in all fields";

/// Patient form as typed. The age stays text until the form is submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientDraft {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub contact: String,
    pub disease: String,
}

impl PatientDraft {
    /// The payload to post, or `None` when the age is not a number.
    pub fn to_request(&self) -> Option<NewPatient> {
        Some(NewPatient {
            name: self.name.clone(),
            age: parse_leading_int(&self.age)?,
            gender: self.gender.clone(),
            contact: self.contact.clone(),
            disease: self.disease.clone(),
        })
    }
}

/// Doctor form as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorDraft {
    pub name: String,
    pub specialization: String,
    pub available_slots: String,
}

impl DoctorDraft {
    pub fn to_request(&self) -> Option<NewDoctor> {
        Some(NewDoctor {
            name: self.name.clone(),
            specialization: self.specialization.clone(),
            available_slots: parse_leading_int(&self.available_slots)?,
        })
    }
}

/// Lenient integer coercion for JSON values.
///
/// Numbers are truncated toward zero; strings go through `parse_leading_int`.
/// Every other type is "not a number".
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

/// Parses the leading decimal integer of `input`.
///
/// Leading whitespace and one sign are accepted, and anything after the digit
/// run is ignored, so `" 12abc"` is `12`. No digits at all yields `None`.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> AppointmentRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn leading_int_follows_lenient_rules() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7 "), Some(7));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+8"), Some(8));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("1.9"), Some(1));
    }

    #[test]
    fn ids_coerce_from_strings_and_numbers() {
        let resolved = request(json!({"patientId": "3", "doctorId": 4, "date": "2025-06-01"}))
            .resolve("2030-01-01")
            .unwrap();
        assert_eq!(
            resolved,
            NewAppointment {
                patient_id: 3,
                doctor_id: 4,
                date: "2025-06-01".into()
            }
        );

        let truncated = request(json!({"patientId": 2.9, "doctorId": "5x"}))
            .resolve("2030-01-01")
            .unwrap();
        assert_eq!(truncated.patient_id, 2);
        assert_eq!(truncated.doctor_id, 5);
    }

    #[test]
    fn non_numeric_ids_are_rejected() {
        let err = request(json!({"patientId": "abc", "doctorId": 1}))
            .resolve("2030-01-01")
            .unwrap_err();
        assert_eq!(err, RequestError::NotANumber("patientId"));

        let err = request(json!({"patientId": 1})).resolve("2030-01-01").unwrap_err();
        assert_eq!(err, RequestError::NotANumber("doctorId"));

        let err = request(json!({"patientId": true, "doctorId": 1}))
            .resolve("2030-01-01")
            .unwrap_err();
        assert_eq!(err, RequestError::NotANumber("patientId"));
    }

    #[test]
    fn falsy_dates_default_to_today() {
        for date in [json!(null), json!(""), json!(false), json!(0)] {
            let resolved = request(json!({"patientId": 1, "doctorId": 1, "date": date}))
                .resolve("2026-10-18")
                .unwrap();
            assert_eq!(resolved.date, "2026-10-18");
        }
        let omitted = request(json!({"patientId": 1, "doctorId": 1}))
            .resolve("2026-10-18")
            .unwrap();
        assert_eq!(omitted.date, "2026-10-18");
    }

    #[test]
    fn non_string_truthy_date_is_rejected() {
        let err = request(json!({"patientId": 1, "doctorId": 1, "date": 20250601}))
            .resolve("2026-10-18")
            .unwrap_err();
        assert_eq!(err, RequestError::InvalidDate);
    }

    #[test]
    fn new_patient_rejects_type_mismatch() {
        let bad = serde_json::from_value::<NewPatient>(json!({
            "name": "Jane", "age": "thirty", "gender": "Female",
            "contact": "555-1234", "disease": "Flu"
        }));
        assert!(bad.is_err());

        let missing = serde_json::from_value::<NewDoctor>(json!({"name": "Smith"}));
        assert!(missing.is_err());
    }

    #[test]
    fn drafts_need_a_number_before_submitting() {
        let mut patient = PatientDraft {
            name: "Jane".into(),
            age: String::new(),
            gender: "Female".into(),
            contact: "555-1234".into(),
            disease: "Flu".into(),
        };
        assert_eq!(patient.to_request(), None);
        patient.age = "abc".into();
        assert_eq!(patient.to_request(), None);
        patient.age = "30".into();
        assert_eq!(patient.to_request().map(|p| p.age), Some(30));

        let mut doctor = DoctorDraft {
            name: "Smith".into(),
            specialization: "Cardiology".into(),
            available_slots: " ".into(),
        };
        assert_eq!(doctor.to_request(), None);
        doctor.available_slots = "0".into();
        assert_eq!(doctor.to_request().map(|d| d.available_slots), Some(0));
    }
}
