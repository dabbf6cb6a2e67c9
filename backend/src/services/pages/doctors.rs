use super::layout::{document, header, input_field, list_container, FormPanel, Section};
use common::api::Resource;
use common::display::SPECIALIZATIONS;
use common::model::Doctor;

pub fn render() -> String {
    let suggestions: String = SPECIALIZATIONS
        .iter()
        .map(|s| format!(r#"<option value="{}"></option>"#, s))
        .collect();

    let form = FormPanel {
        id: "addDoctorForm",
        heading: "Add New Doctor",
        endpoint: Doctor::COLLECTION,
        submit_label: "Add Doctor",
        submit_color: "bg-green-500 hover:bg-green-600",
        success: "Doctor added successfully!",
        failure: "Error adding doctor",
        fields: vec![
            input_field("doctorName", "name", "Name", "text", ""),
            input_field(
                "doctorSpecialization",
                "specialization",
                "Specialization",
                "text",
                r#"list="specializationOptions""#,
            ),
            input_field("doctorSlots", "availableSlots", "Available Slots", "number", r#"min="0""#),
            format!(r#"<datalist id="specializationOptions">{}</datalist>"#, suggestions),
        ],
    };

    let body = format!(
        r#"{header}
{form}
{grid}"#,
        header = header(
            "Doctor Directory",
            "Manage doctor profiles and availability",
            Some(("Add New Doctor", "addDoctorForm", "bg-green-500 hover:bg-green-600")),
        ),
        form = form.render(),
        grid = list_container(
            "div",
            "doctorsGrid",
            "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
            Doctor::COLLECTION,
            "doctor",
            "doctors",
        ),
    );

    document("Doctors", Section::Doctors, &body)
}
