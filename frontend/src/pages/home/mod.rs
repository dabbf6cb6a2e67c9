//! Landing page: feature cards for each section plus a small panel that calls
//! the collection endpoints and shows the raw JSON.

use crate::app::Route;
use crate::services::api::{DoctorService, PatientService};
use serde::Serialize;
use yew::platform::spawn_local;
use yew::prelude::*;

mod view;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    FetchPatients,
    FetchDoctors,
    ShowResponse(String),
}

pub struct HomePage {
    /// Text shown in the API demonstration panel.
    pub api_response: String,
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = HomeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            api_response: "Click a button to test API".to_string(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FetchPatients => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::ShowResponse(describe(PatientService::get_all().await)));
                });
                false
            }
            Msg::FetchDoctors => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::ShowResponse(describe(DoctorService::get_all().await)));
                });
                false
            }
            Msg::ShowResponse(text) => {
                self.api_response = text;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

/// Pretty-printed JSON on success, `Error: <message>` otherwise.
fn describe<T: Serialize>(result: Result<Vec<T>, String>) -> String {
    match result {
        Ok(items) => serde_json::to_string_pretty(&items).unwrap_or_else(|e| format!("Error: {}", e)),
        Err(message) => format!("Error: {}", message),
    }
}
