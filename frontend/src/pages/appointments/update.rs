use super::load;
use super::messages::{Field, Msg};
use super::state::AppointmentsPage;
use crate::components::ui::show_toast;
use crate::services::api::AppointmentService;
use common::display::sort_newest_first;
use common::requests::parse_leading_int;
use common::view::ListState;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

pub fn update(page: &mut AppointmentsPage, ctx: &Context<AppointmentsPage>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded {
            appointments,
            patients,
            doctors,
        } => {
            if let Err(message) = &appointments {
                error!(format!("Failed to load appointments: {}", message));
            }
            page.appointments = ListState::from_result(appointments);
            if let ListState::Loaded(items) = &mut page.appointments {
                sort_newest_first(items);
            }
            page.patients = patients.unwrap_or_else(|message| {
                error!(format!("Failed to load patients: {}", message));
                Vec::new()
            });
            page.doctors = doctors.unwrap_or_else(|message| {
                error!(format!("Failed to load doctors: {}", message));
                Vec::new()
            });
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
                Field::Patient => data.patient_id = parse_leading_int(&value).unwrap_or(0),
                Field::Doctor => data.doctor_id = parse_leading_int(&value).unwrap_or(0),
                Field::Date => data.date = value,
            }
            true
        }
        Msg::Submit => {
            if page.form.submitting {
                return false;
            }
            page.form.submitting = true;
            page.error = None;

            let data = page.form.data.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match AppointmentService::create(&data).await {
                    Ok(appointment) => link.send_message(Msg::Booked(appointment)),
                    Err(message) => link.send_message(Msg::BookFailed(message)),
                }
            });
            true
        }
        Msg::Booked(appointment) => {
            show_toast(&format!("Appointment #{} booked.", appointment.id));
            page.appointments.push(appointment);
            if let ListState::Loaded(items) = &mut page.appointments {
                sort_newest_first(items);
            }
            page.form.reset();
            load(ctx.link().clone());
            true
        }
        Msg::BookFailed(message) => {
            error!(format!("Failed to book appointment: {}", message));
            page.form.submitting = false;
            page.error = Some(message);
            true
        }
    }
}
