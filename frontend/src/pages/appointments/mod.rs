//! Appointments page: the booking form and the appointment list.
//!
//! Mounting loads appointments together with the patients and doctors that
//! fill the form's selects. After a booking the new record is shown at once
//! and everything is fetched again so the list carries full relations.

use crate::services::api::{AppointmentService, DoctorService, PatientService};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::AppointmentsPage;

impl Component for AppointmentsPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        load(ctx.link().clone());
        AppointmentsPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

pub(crate) fn load(link: Scope<AppointmentsPage>) {
    spawn_local(async move {
        let appointments = AppointmentService::get_all().await;
        let patients = PatientService::get_all().await;
        let doctors = DoctorService::get_all().await;
        link.send_message(Msg::Loaded {
            appointments,
            patients,
            doctors,
        });
    });
}
