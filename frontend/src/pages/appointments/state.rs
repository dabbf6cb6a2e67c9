use common::model::{Appointment, Doctor, Patient};
use common::requests::NewAppointment;
use common::view::{FormState, ListState};

pub struct AppointmentsPage {
    pub appointments: ListState<Appointment>,
    /// Options of the patient select.
    pub patients: Vec<Patient>,
    /// Options of the doctor select.
    pub doctors: Vec<Doctor>,
    pub form: FormState<NewAppointment>,
    pub error: Option<String>,
}

impl AppointmentsPage {
    pub fn new() -> Self {
        Self {
            appointments: ListState::Loading,
            patients: Vec::new(),
            doctors: Vec::new(),
            form: FormState::default(),
            error: None,
        }
    }
}
