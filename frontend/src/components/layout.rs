//! Page chrome: the navigation bar, the page header, and home feature cards.

use crate::app::Route;
use yew::prelude::*;

pub fn navigation(current: Route, on_navigate: &Callback<Route>) -> Html {
    html! {
        <nav class="bg-blue-600 text-white shadow-lg">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-bold">{ "🏥 Hospital Management System" }</h1>
                    </div>
                    <div class="flex items-center space-x-4">
                        { for Route::ALL.iter().map(|route| {
                            let route = *route;
                            let state = if route == current { "bg-blue-800" } else { "hover:bg-blue-700" };
                            let onclick = on_navigate.reform(move |_: MouseEvent| route);
                            html! {
                                <button key={route.label()} {onclick}
                                    class={classes!("px-3", "py-2", "rounded", "transition-colors", state)}>
                                    { route.label() }
                                </button>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Title block with an optional action button, followed by the page content.
pub fn page_layout(
    title: &'static str,
    subtitle: &'static str,
    action: Option<Html>,
    children: Html,
) -> Html {
    html! {
        <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
            <div class="px-4 py-6 sm:px-0">
                <div class="md:flex md:items-center md:justify-between mb-6">
                    <div class="flex-1 min-w-0">
                        <h2 class="text-2xl font-bold leading-7 text-gray-900 sm:text-3xl sm:truncate">{ title }</h2>
                        <p class="mt-1 text-sm text-gray-500">{ subtitle }</p>
                    </div>
                    { match action {
                        Some(button) => html! { <div class="mt-4 flex md:mt-0 md:ml-4">{ button }</div> },
                        None => html! {},
                    } }
                </div>
                { children }
            </div>
        </main>
    }
}

/// The "+ label" button that opens a page's create form.
pub fn action_button(label: &'static str, color: &'static str, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button type="button" {onclick}
            class={classes!(color, "text-white", "px-4", "py-2", "rounded", "transition-colors")}>
            { format!("+ {}", label) }
        </button>
    }
}

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub button_text: &'static str,
    pub button_color: &'static str,
    pub route: Route,
}

pub fn feature_card(feature: &Feature, on_navigate: &Callback<Route>) -> Html {
    let route = feature.route;
    let onclick = on_navigate.reform(move |_: MouseEvent| route);
    html! {
        <div class="bg-gray-50 rounded-lg p-6 border">
            <div class="text-3xl mb-4">{ feature.icon }</div>
            <h3 class="text-lg font-semibold text-gray-900 mb-2">{ feature.title }</h3>
            <p class="text-gray-600 mb-4">{ feature.description }</p>
            <button type="button" {onclick}
                class={classes!(feature.button_color, "text-white", "px-4", "py-2", "rounded", "transition-colors")}>
                { feature.button_text }
            </button>
        </div>
    }
}
