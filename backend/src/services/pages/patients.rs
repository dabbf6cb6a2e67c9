use super::layout::{document, header, input_field, list_container, select_field, FormPanel, Section};
use common::api::Resource;
use common::display::GENDER_OPTIONS;
use common::model::Patient;

pub fn render() -> String {
    let genders: Vec<(String, String)> = GENDER_OPTIONS
        .iter()
        .map(|g| (g.to_string(), g.to_string()))
        .collect();

    let form = FormPanel {
        id: "addPatientForm",
        heading: "Add New Patient",
        endpoint: Patient::COLLECTION,
        submit_label: "Add Patient",
        submit_color: "bg-blue-600 hover:bg-blue-700",
        success: "Patient added successfully!",
        failure: "Error adding patient",
        fields: vec![
            input_field("patientName", "name", "Name", "text", ""),
            input_field("patientAge", "age", "Age", "number", r#"min="0""#),
            select_field("patientGender", "gender", "Gender", "Select Gender", &genders, false, ""),
            input_field("patientContact", "contact", "Contact", "tel", ""),
            input_field("patientDisease", "disease", "Disease/Condition", "text", ""),
        ],
    };

    let body = format!(
        r#"{header}
{form}
<div class="bg-white shadow overflow-hidden sm:rounded-md">
  <div class="px-4 py-5 sm:px-6 border-b border-gray-200">
    <h3 class="text-lg leading-6 font-medium text-gray-900">Patients List</h3>
    <p class="mt-1 max-w-2xl text-sm text-gray-500">Current registered patients in the system</p>
  </div>
  {list}
</div>"#,
        header = header(
            "Patient Management",
            "Register and manage patient records",
            Some(("Add New Patient", "addPatientForm", "bg-blue-600 hover:bg-blue-700")),
        ),
        form = form.render(),
        list = list_container(
            "ul",
            "patientsList",
            "divide-y divide-gray-200",
            Patient::COLLECTION,
            "patient",
            "patients",
        ),
    );

    document("Patients", Section::Patients, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_loaded_from_the_api() {
        let html = render();
        assert!(html.contains(r#"data-collection="/api/patients" data-kind="patient""#));
        assert!(html.contains("Loading patients..."));
        assert!(html.contains(r#"data-endpoint="/api/patients""#));
    }

    #[test]
    fn form_offers_every_gender() {
        let html = render();
        for gender in GENDER_OPTIONS {
            assert!(html.contains(&format!(r#"<option value="{0}">{0}</option>"#, gender)));
        }
        assert!(html.contains(r#"id="patientAge" name="age" type="number" data-type="int""#));
    }
}
