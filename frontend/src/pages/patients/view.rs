use super::messages::{Field, Msg};
use super::state::PatientsPage;
use crate::components::layout::{action_button, page_layout};
use crate::components::rows::{list_view, today_local};
use crate::components::ui::{error_region, form_buttons, select_input, text_input};
use common::display::GENDER_OPTIONS;
use yew::html::Scope;
use yew::prelude::*;

pub fn view(page: &PatientsPage, ctx: &Context<PatientsPage>) -> Html {
    let link = ctx.link();
    let action = action_button(
        "Add New Patient",
        "bg-blue-600 hover:bg-blue-700",
        link.callback(|_| Msg::ShowForm),
    );

    let content = html! {
        <>
            { error_region(page.error.as_deref()) }
            { if page.form.visible { build_form(page, link) } else { html! {} } }
            <div class="bg-white shadow overflow-hidden sm:rounded-md">
                <div class="px-4 py-5 sm:px-6 border-b border-gray-200">
                    <h3 class="text-lg leading-6 font-medium text-gray-900">{ "Patients List" }</h3>
                    <p class="mt-1 max-w-2xl text-sm text-gray-500">{ "Current registered patients in the system" }</p>
                </div>
                <ul class="divide-y divide-gray-200">
                    { list_view(&page.patients, today_local()) }
                </ul>
            </div>
        </>
    };

    page_layout(
        "Patient Management",
        "Manage patient records and information",
        Some(action),
        content,
    )
}

fn build_form(page: &PatientsPage, link: &Scope<PatientsPage>) -> Html {
    let data = &page.form.data;
    let genders = GENDER_OPTIONS
        .iter()
        .map(|g| (g.to_string(), g.to_string()))
        .collect();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="bg-white shadow rounded-lg p-6 mb-6">
            <h3 class="text-lg font-medium text-gray-900 mb-4">{ "Add New Patient" }</h3>
            <form {onsubmit} class="grid grid-cols-1 md:grid-cols-2 gap-4">
                { text_input("patientName", "Name", "text", data.name.clone(),
                    link.callback(|v| Msg::Edit(Field::Name, v))) }
                { text_input("patientAge", "Age", "number", data.age.clone(),
                    link.callback(|v| Msg::Edit(Field::Age, v))) }
                { select_input("patientGender", "Gender", "Select Gender", genders, data.gender.clone(),
                    link.callback(|v| Msg::Edit(Field::Gender, v))) }
                { text_input("patientContact", "Contact", "tel", data.contact.clone(),
                    link.callback(|v| Msg::Edit(Field::Contact, v))) }
                { text_input("patientDisease", "Disease/Condition", "text", data.disease.clone(),
                    link.callback(|v| Msg::Edit(Field::Disease, v))) }
                { form_buttons("Add Patient", "Adding...", "bg-blue-600 hover:bg-blue-700",
                    page.form.submitting, link.callback(|_| Msg::HideForm)) }
            </form>
        </div>
    }
}
