//! Small building blocks shared by the pages: form fields, the loading
//! indicator, the inline error region, and toast notifications.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub const FIELD_CLASS: &str = "w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500";

pub fn loading(message: &str) -> Html {
    html! {
        <div class="px-4 py-8 text-center">
            <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
            <p class="mt-2 text-gray-600">{ message }</p>
        </div>
    }
}

/// Inline error region. Renders nothing when there is no error.
pub fn error_region(error: Option<&str>) -> Html {
    match error {
        Some(message) => html! {
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-6" role="alert">
                { message }
            </div>
        },
        None => html! {},
    }
}

pub fn text_input(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: String,
    on_input: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_input.emit(input.value());
    });
    html! {
        <div>
            <label for={id} class="block text-sm font-medium text-gray-700 mb-1">{ label }</label>
            <input {id} type={input_type} class={FIELD_CLASS} {value} {oninput} required={true} />
        </div>
    }
}

/// A select whose first option is an empty placeholder. `options` are `(value, label)` pairs.
pub fn select_input(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: Vec<(String, String)>,
    selected: String,
    on_change: Callback<String>,
) -> Html {
    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_change.emit(select.value());
    });
    html! {
        <div>
            <label for={id} class="block text-sm font-medium text-gray-700 mb-1">{ label }</label>
            <select {id} class={FIELD_CLASS} {onchange} required={true}>
                <option value="" selected={selected.is_empty()}>{ placeholder }</option>
                { for options.into_iter().map(|(value, text)| {
                    let is_selected = value == selected;
                    html! { <option {value} selected={is_selected}>{ text }</option> }
                }) }
            </select>
        </div>
    }
}

/// Submit and cancel buttons of a create form.
pub fn form_buttons(
    label: &'static str,
    busy_label: &'static str,
    color: &'static str,
    submitting: bool,
    on_cancel: Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="md:col-span-2 flex space-x-3">
            <button type="submit" disabled={submitting}
                class={classes!(color, "text-white", "px-4", "py-2", "rounded", "disabled:opacity-50")}>
                { if submitting { busy_label } else { label } }
            </button>
            <button type="button" onclick={on_cancel}
                class="bg-gray-300 hover:bg-gray-400 text-gray-700 px-4 py-2 rounded">
                { "Cancel" }
            </button>
        </div>
    }
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The element is injected straight into `<body>` and removes itself after
/// three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
