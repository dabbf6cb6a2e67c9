//! Root component and the in-memory router.
//!
//! Navigation only swaps the rendered page; the browser URL never changes.

use crate::components::layout::navigation;
use crate::pages::appointments::AppointmentsPage;
use crate::pages::doctors::DoctorsPage;
use crate::pages::home::HomePage;
use crate::pages::patients::PatientsPage;
use yew::{html, Callback, Component, Context, Html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Patients,
    Doctors,
    Appointments,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::Patients,
        Route::Doctors,
        Route::Appointments,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Patients => "Patients",
            Route::Doctors => "Doctors",
            Route::Appointments => "Appointments",
        }
    }
}

pub enum Msg {
    Navigate(Route),
}

pub struct App {
    current: Route,
    on_navigate: Callback<Route>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            current: Route::Home,
            on_navigate: ctx.link().callback(Msg::Navigate),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                let changed = self.current != route;
                self.current = route;
                changed
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let page = match self.current {
            Route::Home => html! { <HomePage on_navigate={self.on_navigate.clone()} /> },
            Route::Patients => html! { <PatientsPage /> },
            Route::Doctors => html! { <DoctorsPage /> },
            Route::Appointments => html! { <AppointmentsPage /> },
        };

        html! {
            <div class="bg-gray-50 min-h-screen">
                { navigation(self.current, &self.on_navigate) }
                { page }
            </div>
        }
    }
}
