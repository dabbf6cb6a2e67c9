use super::messages::{Field, Msg};
use super::state::DoctorsPage;
use crate::components::layout::{action_button, page_layout};
use crate::components::rows::{list_view, today_local};
use crate::components::ui::{error_region, form_buttons, text_input};
use yew::html::Scope;
use yew::prelude::*;

pub fn view(page: &DoctorsPage, ctx: &Context<DoctorsPage>) -> Html {
    let link = ctx.link();
    let action = action_button(
        "Add New Doctor",
        "bg-green-500 hover:bg-green-600",
        link.callback(|_| Msg::ShowForm),
    );

    let content = html! {
        <>
            { error_region(page.error.as_deref()) }
            { if page.form.visible { build_form(page, link) } else { html! {} } }
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { list_view(&page.doctors, today_local()) }
            </div>
        </>
    };

    page_layout(
        "Doctor Directory",
        "Manage doctor profiles and availability",
        Some(action),
        content,
    )
}

fn build_form(page: &DoctorsPage, link: &Scope<DoctorsPage>) -> Html {
    let data = &page.form.data;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="bg-white shadow rounded-lg p-6 mb-6">
            <h3 class="text-lg font-medium text-gray-900 mb-4">{ "Add New Doctor" }</h3>
            <form {onsubmit} class="grid grid-cols-1 md:grid-cols-2 gap-4">
                { text_input("doctorName", "Name", "text", data.name.clone(),
                    link.callback(|v| Msg::Edit(Field::Name, v))) }
                { text_input("doctorSpecialization", "Specialization", "text", data.specialization.clone(),
                    link.callback(|v| Msg::Edit(Field::Specialization, v))) }
                { text_input("doctorSlots", "Available Slots", "number", data.available_slots.clone(),
                    link.callback(|v| Msg::Edit(Field::AvailableSlots, v))) }
                { form_buttons("Add Doctor", "Adding...", "bg-green-500 hover:bg-green-600",
                    page.form.submitting, link.callback(|_| Msg::HideForm)) }
            </form>
        </div>
    }
}
