//! List rows for each entity.
//!
//! `RenderRow` is implemented once per entity; `list_view` drives the shared
//! `ListState` so every page shows loading, empty and error states the same way.

use super::ui::loading;
use chrono::NaiveDate;
use common::display::{
    availability, format_date, initial, slots_bar_percent, specialization_badge,
    AppointmentStatus,
};
use common::model::{Appointment, Doctor, Patient};
use common::view::ListState;
use yew::prelude::*;

pub trait RenderRow {
    const PLURAL: &'static str;

    fn render_row(&self, today: NaiveDate) -> Html;

    fn render_empty() -> Html;
}

/// Today's date in the browser's local time zone.
pub fn today_local() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

pub fn list_view<T: RenderRow>(state: &ListState<T>, today: NaiveDate) -> Html {
    match state {
        ListState::Loading => loading(&format!("Loading {}...", T::PLURAL)),
        ListState::Empty => T::render_empty(),
        ListState::Loaded(items) => html! {
            <>{ for items.iter().map(|item| item.render_row(today)) }</>
        },
        ListState::Failed(message) => html! {
            <div class="px-4 py-4 text-center text-red-500">
                { format!("Error loading {}: {}", T::PLURAL, message) }
            </div>
        },
    }
}

impl RenderRow for Patient {
    const PLURAL: &'static str = "patients";

    fn render_row(&self, _today: NaiveDate) -> Html {
        html! {
            <li key={self.id} class="px-4 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex-1">
                        <div class="flex items-center">
                            <div class="bg-blue-100 rounded-full p-2 mr-3">
                                <span class="text-blue-600 font-semibold">{ initial(&self.name) }</span>
                            </div>
                            <div>
                                <h4 class="text-lg font-semibold text-gray-900">{ self.name.clone() }</h4>
                                <p class="text-sm text-gray-600">
                                    { format!("Age: {} | Gender: {} | Contact: {}", self.age, self.gender, self.contact) }
                                </p>
                                <p class="text-sm text-red-600 mt-1">{ format!("Condition: {}", self.disease) }</p>
                            </div>
                        </div>
                    </div>
                    <div class="flex items-center space-x-2">
                        <span class="text-sm text-gray-500">{ format!("{} appointments", self.appointment_count()) }</span>
                        <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800">
                            { "Active" }
                        </span>
                    </div>
                </div>
            </li>
        }
    }

    fn render_empty() -> Html {
        html! {
            <li class="px-4 py-4 text-center text-gray-500">
                { "No patients found. Add a new patient to get started." }
            </li>
        }
    }
}

impl RenderRow for Doctor {
    const PLURAL: &'static str = "doctors";

    fn render_row(&self, _today: NaiveDate) -> Html {
        let (availability_label, availability_class) = availability(self);
        let bar_width = format!("width: {}%", slots_bar_percent(self.available_slots));
        html! {
            <div key={self.id} class="bg-white overflow-hidden shadow rounded-lg border border-gray-200">
                <div class="p-6">
                    <div class="flex items-center">
                        <div class="w-12 h-12 bg-green-500 rounded-full flex items-center justify-center text-white font-semibold text-lg">
                            { initial(&self.name) }
                        </div>
                        <div class="ml-4 flex-1">
                            <h3 class="text-lg font-medium text-gray-900">{ format!("Dr. {}", self.name) }</h3>
                            <span class={classes!("inline-flex", "items-center", "px-2.5", "py-0.5", "rounded-full", "text-xs", "font-medium", specialization_badge(&self.specialization))}>
                                { self.specialization.clone() }
                            </span>
                        </div>
                    </div>
                    <div class="mt-4">
                        <div class="flex items-center justify-between text-sm text-gray-600">
                            <span>{ "Available Slots" }</span>
                            <span class="font-semibold">{ self.available_slots.to_string() }</span>
                        </div>
                        <div class="mt-2 w-full bg-gray-200 rounded-full h-2">
                            <div class="bg-green-600 h-2 rounded-full" style={bar_width}></div>
                        </div>
                    </div>
                    <div class="mt-4 flex items-center justify-between">
                        <span class="text-sm text-gray-500">{ format!("{} appointments scheduled", self.appointment_count()) }</span>
                        <span class={classes!("inline-flex", "items-center", "px-2.5", "py-0.5", "rounded-full", "text-xs", "font-medium", availability_class)}>
                            { availability_label }
                        </span>
                    </div>
                </div>
            </div>
        }
    }

    fn render_empty() -> Html {
        html! {
            <div class="col-span-full text-center py-12">
                <h3 class="mt-2 text-sm font-medium text-gray-900">{ "No doctors" }</h3>
                <p class="mt-1 text-sm text-gray-500">{ "Get started by adding a new doctor." }</p>
            </div>
        }
    }
}

impl RenderRow for Appointment {
    const PLURAL: &'static str = "appointments";

    fn render_row(&self, today: NaiveDate) -> Html {
        let status = AppointmentStatus::classify(&self.date, today);
        let patient = match &self.patient {
            Some(patient) => patient.name.clone(),
            None => format!("Patient ID: {}", self.patient_id),
        };
        let doctor = match &self.doctor {
            Some(doctor) => format!("Dr. {} ({})", doctor.name, doctor.specialization),
            None => format!("Dr. Doctor ID: {}", self.doctor_id),
        };
        html! {
            <li key={self.id} class="px-4 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center">
                        <div class="bg-purple-100 rounded-full p-3 mr-4 text-purple-600">{ "📅" }</div>
                        <div>
                            <h4 class="text-lg font-semibold text-gray-900">{ format!("Appointment #{}", self.id) }</h4>
                            <p class="text-sm text-gray-600">{ "Patient: " }<span class="font-medium">{ patient }</span></p>
                            <p class="text-sm text-gray-600">{ "Doctor: " }<span class="font-medium">{ doctor }</span></p>
                            <p class="text-sm text-gray-600 mt-1">{ "Date: " }<span class="font-medium">{ format_date(&self.date) }</span></p>
                        </div>
                    </div>
                    <span class={classes!("inline-flex", "items-center", "px-2.5", "py-0.5", "rounded-full", "text-xs", "font-medium", status.badge_class())}>
                        { status.label() }
                    </span>
                </div>
            </li>
        }
    }

    fn render_empty() -> Html {
        html! {
            <li class="px-4 py-4 text-center text-gray-500">
                { "No appointments found. Book a new appointment to get started." }
            </li>
        }
    }
}
