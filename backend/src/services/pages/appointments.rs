use super::layout::{document, header, input_field, list_container, select_field, FormPanel, Section};
use chrono::NaiveDate;
use common::api::Resource;
use common::model::{Appointment, Doctor, Patient};

/// The booking form's date defaults to `today`; both selects and the list are
/// filled by the page script.
pub fn render(today: NaiveDate) -> String {
    let default_date = format!(r#"value="{}""#, today.format("%Y-%m-%d"));
    let patients = format!(r#"data-options="{}" data-kind="patient""#, Patient::COLLECTION);
    let doctors = format!(r#"data-options="{}" data-kind="doctor""#, Doctor::COLLECTION);

    let form = FormPanel {
        id: "bookAppointmentForm",
        heading: "Book New Appointment",
        endpoint: Appointment::COLLECTION,
        submit_label: "Book Appointment",
        submit_color: "bg-purple-600 hover:bg-purple-700",
        success: "Appointment booked successfully!",
        failure: "Error booking appointment",
        fields: vec![
            select_field("appointmentPatient", "patientId", "Patient", "Select Patient", &[], true, &patients),
            select_field("appointmentDoctor", "doctorId", "Doctor", "Select Doctor", &[], true, &doctors),
            input_field("appointmentDate", "date", "Date", "date", &default_date),
        ],
    };

    let body = format!(
        r#"{header}
{form}
<div class="bg-white shadow overflow-hidden sm:rounded-md">
  <div class="px-4 py-5 sm:px-6 border-b border-gray-200">
    <h3 class="text-lg leading-6 font-medium text-gray-900">Scheduled Appointments</h3>
    <p class="mt-1 max-w-2xl text-sm text-gray-500">Newest appointments first</p>
  </div>
  {list}
</div>"#,
        header = header(
            "Appointment Scheduling",
            "Book and manage patient appointments",
            Some(("Book Appointment", "bookAppointmentForm", "bg-purple-600 hover:bg-purple-700")),
        ),
        form = form.render(),
        list = list_container(
            "ul",
            "appointmentsList",
            "divide-y divide-gray-200",
            Appointment::COLLECTION,
            "appointment",
            "appointments",
        ),
    );

    document("Appointments", Section::Appointments, &body)
}
