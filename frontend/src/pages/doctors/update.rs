use super::messages::{Field, Msg};
use super::state::DoctorsPage;
use crate::components::ui::show_toast;
use crate::services::api::DoctorService;
use common::requests::INCOMPLETE_FORM;
use common::view::ListState;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

pub fn update(page: &mut DoctorsPage, ctx: &Context<DoctorsPage>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(result) => {
            if let Err(message) = &result {
                error!(format!("Failed to load doctors: {}", message));
            }
            page.doctors = ListState::from_result(result);
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
                Field::Specialization => data.specialization = value,
                Field::AvailableSlots => data.available_slots = value,
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
                match DoctorService::create(&data).await {
                    Ok(doctor) => link.send_message(Msg::Created(doctor)),
                    Err(message) => link.send_message(Msg::CreateFailed(message)),
                }
            });
            true
        }
        Msg::Created(doctor) => {
            show_toast(&format!("Dr. {} added.", doctor.name));
            page.doctors.push(doctor);
            page.form.reset();
            true
        }
        Msg::CreateFailed(message) => {
            error!(format!("Failed to add doctor: {}", message));
            page.form.submitting = false;
            page.error = Some(message);
            true
        }
    }
}
