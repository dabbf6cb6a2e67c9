//! # Persistence Gateway
//!
//! The store boundary the API handlers depend on. Handlers only see the
//! `PersistenceGateway` trait; `SqliteGateway` is the production implementation.
//!
//! Each method is a single store operation:
//! - `create_*`: insert a row and return it with its newly assigned id.
//! - `list_*`: every row, with the relations the matching endpoint embeds.
//! - `find_*`: one row by id with the same relations, `None` when absent.
//!
//! Referential integrity of `appointments.patient_id` / `appointments.doctor_id`
//! is enforced here, not by the handlers.

mod schema;
mod sqlite;

use common::model::{Appointment, Doctor, Patient};
use common::requests::{NewAppointment, NewDoctor, NewPatient};

pub use sqlite::SqliteGateway;

pub trait PersistenceGateway: Send + Sync + 'static {
    fn create_patient(&self, input: &NewPatient) -> anyhow::Result<Patient>;

    /// All patients, each with `appointments` populated and every appointment
    /// carrying its `doctor`.
    fn list_patients(&self) -> anyhow::Result<Vec<Patient>>;

    fn find_patient(&self, id: i64) -> anyhow::Result<Option<Patient>>;

    fn create_doctor(&self, input: &NewDoctor) -> anyhow::Result<Doctor>;

    /// All doctors, each with `appointments` populated and every appointment
    /// carrying its `patient`.
    fn list_doctors(&self) -> anyhow::Result<Vec<Doctor>>;

    fn find_doctor(&self, id: i64) -> anyhow::Result<Option<Doctor>>;

    /// Inserts the appointment and returns it with `patient` and `doctor` embedded.
    fn create_appointment(&self, input: &NewAppointment) -> anyhow::Result<Appointment>;

    /// All appointments with `patient` and `doctor` embedded.
    fn list_appointments(&self) -> anyhow::Result<Vec<Appointment>>;
}
