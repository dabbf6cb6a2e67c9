use common::model::Patient;

pub enum Field {
    Name,
    Age,
    Gender,
    Contact,
    Disease,
}

pub enum Msg {
    Loaded(Result<Vec<Patient>, String>),
    ShowForm,
    HideForm,
    Edit(Field, String),
    Submit,
    Created(Patient),
    CreateFailed(String),
}
