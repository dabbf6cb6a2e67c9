use common::requests::{NewAppointment, NewDoctor, NewPatient};
use hospital::gateway::{PersistenceGateway, SqliteGateway};

#[test]
fn records_survive_reopening_the_database() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("hospital.sqlite");

    {
        let gateway = SqliteGateway::open(&path).expect("open store");
        let patient = gateway
            .create_patient(&NewPatient {
                name: "Jane".into(),
                age: 30,
                gender: "Female".into(),
                contact: "555-1234".into(),
                disease: "Flu".into(),
            })
            .expect("create patient");
        let doctor = gateway
            .create_doctor(&NewDoctor {
                name: "Smith".into(),
                specialization: "Cardiology".into(),
                available_slots: 5,
            })
            .expect("create doctor");
        gateway
            .create_appointment(&NewAppointment {
                patient_id: patient.id,
                doctor_id: doctor.id,
                date: "2025-06-01T10:30".into(),
            })
            .expect("book appointment");
    }

    let gateway = SqliteGateway::open(&path).expect("reopen store");
    let appointments = gateway.list_appointments().expect("list appointments");
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].date, "2025-06-01T10:30");
    assert_eq!(
        appointments[0].patient.as_ref().map(|p| p.name.as_str()),
        Some("Jane")
    );

    // Ids keep counting from the highest one ever issued.
    let next = gateway
        .create_doctor(&NewDoctor {
            name: "Grey".into(),
            specialization: "Surgery".into(),
            available_slots: 2,
        })
        .expect("create second doctor");
    assert_eq!(next.id, 2);
}
