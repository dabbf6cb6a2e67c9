#![allow(dead_code)]

use actix_web::web;
use anyhow::anyhow;
use common::model::{Appointment, Doctor, Patient};
use common::requests::{NewAppointment, NewDoctor, NewPatient};
use hospital::gateway::{PersistenceGateway, SqliteGateway};
use serde_json::{json, Value};
use std::sync::Arc;

pub fn memory_gateway() -> web::Data<dyn PersistenceGateway> {
    let gateway: Arc<dyn PersistenceGateway> =
        Arc::new(SqliteGateway::in_memory().expect("open in-memory store"));
    web::Data::from(gateway)
}

/// A store whose every call fails, for exercising the `500` paths.
pub struct UnavailableStore;

impl PersistenceGateway for UnavailableStore {
    fn create_patient(&self, _: &NewPatient) -> anyhow::Result<Patient> {
        Err(anyhow!("store unavailable"))
    }
    fn list_patients(&self) -> anyhow::Result<Vec<Patient>> {
        Err(anyhow!("store unavailable"))
    }
    fn find_patient(&self, _: i64) -> anyhow::Result<Option<Patient>> {
        Err(anyhow!("store unavailable"))
    }
    fn create_doctor(&self, _: &NewDoctor) -> anyhow::Result<Doctor> {
        Err(anyhow!("store unavailable"))
    }
    fn list_doctors(&self) -> anyhow::Result<Vec<Doctor>> {
        Err(anyhow!("store unavailable"))
    }
    fn find_doctor(&self, _: i64) -> anyhow::Result<Option<Doctor>> {
        Err(anyhow!("store unavailable"))
    }
    fn create_appointment(&self, _: &NewAppointment) -> anyhow::Result<Appointment> {
        Err(anyhow!("store unavailable"))
    }
    fn list_appointments(&self) -> anyhow::Result<Vec<Appointment>> {
        Err(anyhow!("store unavailable"))
    }
}

pub fn unavailable_gateway() -> web::Data<dyn PersistenceGateway> {
    let gateway: Arc<dyn PersistenceGateway> = Arc::new(UnavailableStore);
    web::Data::from(gateway)
}

pub fn jane() -> Value {
    json!({
        "name": "Jane",
        "age": 30,
        "gender": "Female",
        "contact": "555-1234",
        "disease": "Flu"
    })
}

pub fn smith() -> Value {
    json!({
        "name": "Smith",
        "specialization": "Cardiology",
        "availableSlots": 5
    })
}

pub fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
