use common::model::Patient;
use common::requests::PatientDraft;
use common::view::{FormState, ListState};

pub struct PatientsPage {
    pub patients: ListState<Patient>,
    pub form: FormState<PatientDraft>,
    /// Last create failure, shown above the form.
    pub error: Option<String>,
}

impl PatientsPage {
    pub fn new() -> Self {
        Self {
            patients: ListState::Loading,
            form: FormState::default(),
            error: None,
        }
    }
}
