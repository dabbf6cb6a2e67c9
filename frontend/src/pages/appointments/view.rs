use super::messages::{Field, Msg};
use super::state::AppointmentsPage;
use crate::components::layout::{action_button, page_layout};
use crate::components::rows::{list_view, today_local};
use crate::components::ui::{error_region, form_buttons, select_input, text_input};
use common::display::{doctor_option_label, patient_option_label};
use yew::html::Scope;
use yew::prelude::*;

pub fn view(page: &AppointmentsPage, ctx: &Context<AppointmentsPage>) -> Html {
    let link = ctx.link();
    let action = action_button(
        "Book Appointment",
        "bg-purple-600 hover:bg-purple-700",
        link.callback(|_| Msg::ShowForm),
    );

    let content = html! {
        <>
            { error_region(page.error.as_deref()) }
            { if page.form.visible { build_form(page, link) } else { html! {} } }
            <div class="bg-white shadow overflow-hidden sm:rounded-md">
                <div class="px-4 py-5 sm:px-6 border-b border-gray-200">
                    <h3 class="text-lg leading-6 font-medium text-gray-900">{ "Scheduled Appointments" }</h3>
                    <p class="mt-1 max-w-2xl text-sm text-gray-500">{ "Current and upcoming appointments in the system" }</p>
                </div>
                <ul class="divide-y divide-gray-200">
                    { list_view(&page.appointments, today_local()) }
                </ul>
            </div>
        </>
    };

    page_layout(
        "Appointment Scheduler",
        "Schedule and manage patient appointments",
        Some(action),
        content,
    )
}

/// Select value for an id field; `0` means nothing chosen yet.
fn selected(id: i64) -> String {
    if id == 0 {
        String::new()
    } else {
        id.to_string()
    }
}

fn build_form(page: &AppointmentsPage, link: &Scope<AppointmentsPage>) -> Html {
    let data = &page.form.data;
    let patients = page
        .patients
        .iter()
        .map(|p| (p.id.to_string(), patient_option_label(p)))
        .collect();
    let doctors = page
        .doctors
        .iter()
        .map(|d| (d.id.to_string(), doctor_option_label(d)))
        .collect();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="bg-white shadow rounded-lg p-6 mb-6">
            <h3 class="text-lg font-medium text-gray-900 mb-4">{ "Book New Appointment" }</h3>
            <form {onsubmit} class="grid grid-cols-1 md:grid-cols-2 gap-4">
                { select_input("appointmentPatient", "Patient", "Select Patient", patients, selected(data.patient_id),
                    link.callback(|v| Msg::Edit(Field::Patient, v))) }
                { select_input("appointmentDoctor", "Doctor", "Select Doctor", doctors, selected(data.doctor_id),
                    link.callback(|v| Msg::Edit(Field::Doctor, v))) }
                { text_input("appointmentDate", "Appointment Date & Time", "datetime-local", data.date.clone(),
                    link.callback(|v| Msg::Edit(Field::Date, v))) }
                { form_buttons("Book Appointment", "Booking...", "bg-purple-600 hover:bg-purple-700",
                    page.form.submitting, link.callback(|_| Msg::HideForm)) }
            </form>
        </div>
    }
}
