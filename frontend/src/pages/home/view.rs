use super::{HomePage, Msg};
use crate::app::Route;
use crate::components::layout::{feature_card, Feature};
use yew::prelude::*;

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Patient Management",
        description: "Register, view, and manage patient information including medical history and personal details.",
        icon: "👥",
        button_text: "Manage Patients",
        button_color: "bg-blue-500 hover:bg-blue-600",
        route: Route::Patients,
    },
    Feature {
        title: "Doctor Directory",
        description: "Manage doctor profiles, specializations, and availability schedules for appointments.",
        icon: "🩺",
        button_text: "View Doctors",
        button_color: "bg-green-500 hover:bg-green-600",
        route: Route::Doctors,
    },
    Feature {
        title: "Appointments",
        description: "Schedule, track, and manage patient appointments with doctors across all departments.",
        icon: "📅",
        button_text: "Book Appointment",
        button_color: "bg-purple-500 hover:bg-purple-600",
        route: Route::Appointments,
    },
];

pub fn view(page: &HomePage, ctx: &Context<HomePage>) -> Html {
    let link = ctx.link();
    let on_navigate = &ctx.props().on_navigate;

    html! {
        <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
            <div class="px-4 py-6 sm:px-0">
                <div class="bg-white overflow-hidden shadow rounded-lg mb-6">
                    <div class="px-4 py-5 sm:p-6">
                        <h2 class="text-3xl font-bold text-gray-900 mb-4">{ "Welcome to Hospital Management System" }</h2>
                        <p class="text-lg text-gray-600 mb-6">
                            { "Manage patients, doctors and appointments from one place." }
                        </p>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                            { for FEATURES.iter().map(|feature| feature_card(feature, on_navigate)) }
                        </div>
                    </div>
                </div>

                <div class="bg-white overflow-hidden shadow rounded-lg">
                    <div class="px-4 py-5 sm:p-6">
                        <h3 class="text-lg font-semibold text-gray-900 mb-4">{ "🔌 API Demonstration" }</h3>
                        <p class="text-gray-600 mb-4">{ "Try the JSON endpoints directly:" }</p>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div class="bg-gray-50 p-4 rounded border">
                                <h4 class="font-semibold mb-2">{ "Test GET API" }</h4>
                                <button onclick={link.callback(|_| Msg::FetchPatients)}
                                    class="bg-blue-500 text-white px-4 py-2 rounded hover:bg-blue-600 mr-2">
                                    { "Get All Patients" }
                                </button>
                                <button onclick={link.callback(|_| Msg::FetchDoctors)}
                                    class="bg-green-500 text-white px-4 py-2 rounded hover:bg-green-600">
                                    { "Get All Doctors" }
                                </button>
                            </div>
                            <div class="bg-gray-50 p-4 rounded border">
                                <h4 class="font-semibold mb-2">{ "API Response" }</h4>
                                <pre class="bg-gray-800 text-green-400 p-2 rounded text-sm overflow-x-auto max-h-32">
                                    { page.api_response.clone() }
                                </pre>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </main>
    }
}
