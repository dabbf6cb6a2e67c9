use common::model::{Appointment, Doctor, Patient};

pub enum Field {
    Patient,
    Doctor,
    Date,
}

pub enum Msg {
    Loaded {
        appointments: Result<Vec<Appointment>, String>,
        patients: Result<Vec<Patient>, String>,
        doctors: Result<Vec<Doctor>, String>,
    },
    ShowForm,
    HideForm,
    Edit(Field, String),
    Submit,
    Booked(Appointment),
    BookFailed(String),
}
