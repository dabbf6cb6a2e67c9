use common::model::Doctor;
use common::requests::DoctorDraft;
use common::view::{FormState, ListState};

pub struct DoctorsPage {
    pub doctors: ListState<Doctor>,
    pub form: FormState<DoctorDraft>,
    pub error: Option<String>,
}

impl DoctorsPage {
    pub fn new() -> Self {
        Self {
            doctors: ListState::Loading,
            form: FormState::default(),
            error: None,
        }
    }
}
