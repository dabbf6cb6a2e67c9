use super::messages::{Field, Msg};
use super::state::PatientsPage;
use crate::components::ui::show_toast;
use crate::services::api::PatientService;
use common::requests::INCOMPLETE_FORM;
use common::view::ListState;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

pub fn update(page: &mut PatientsPage, ctx: &Context<PatientsPage>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(result) => {
            if let Err(message) = &result {
                error!(format!("Failed to load patients: {}", message));
            }
            page.patients = ListState::from_result(result);
            true
        }
        Msg::ShowForm => {
            page.form.open();
            true
        }
        Msg::HideForm => {
            page.form.reset();
            page.error = None;
            true
        }
        Msg::Edit(field, value) => {
            let data = &mut page.form.data;
            match field {
                Field::Name => data.name = value,
                Field::Age => data.age = value,
                Field::Gender => data.gender = value,
                Field::Contact => data.contact = value,
                Field::Disease => data.disease = value,
            }
            true
        }
        Msg::Submit => {
            if page.form.submitting {
                return false;
            }
            let Some(data) = page.form.data.to_request() else {
                page.error = Some(INCOMPLETE_FORM.to_string());
                return true;
            };
            page.form.submitting = true;
            page.error = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                match PatientService::create(&data).await {
                    Ok(patient) => link.send_message(Msg::Created(patient)),
                    Err(message) => link.send_message(Msg::CreateFailed(message)),
                }
            });
            true
        }
        Msg::Created(patient) => {
            show_toast(&format!("Patient {} added.", patient.name));
            page.patients.push(patient);
            page.form.reset();
            true
        }
        Msg::CreateFailed(message) => {
            error!(format!("Failed to add patient: {}", message));
            page.form.submitting = false;
            page.error = Some(message);
            true
        }
    }
}
