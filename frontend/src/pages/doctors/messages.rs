use common::model::Doctor;

pub enum Field {
    Name,
    Specialization,
    AvailableSlots,
}

pub enum Msg {
    Loaded(Result<Vec<Doctor>, String>),
    ShowForm,
    HideForm,
    Edit(Field, String),
    Submit,
    Created(Doctor),
    CreateFailed(String),
}
