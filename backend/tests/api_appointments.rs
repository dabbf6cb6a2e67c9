mod support;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use hospital::configure_app;
use serde_json::{json, Value};

#[actix_web::test]
async fn booking_links_patient_and_doctor() {
    let gateway = support::memory_gateway();
    let app = test::init_service(App::new().app_data(gateway.clone()).configure(configure_app)).await;

    let req = test::TestRequest::post().uri("/api/patients").set_json(support::jane()).to_request();
    let patient: Value = test::call_and_read_body_json(&app, req).await;
    let req = test::TestRequest::post().uri("/api/doctors").set_json(support::smith()).to_request();
    let doctor: Value = test::call_and_read_body_json(&app, req).await;

    // Ids submitted as strings, the way a plain HTML select sends them.
    let req = test::TestRequest::post()
        .uri("/api/appointments")
        .set_json(json!({
            "patientId": patient["id"].to_string(),
            "doctorId": doctor["id"].to_string(),
            "date": "2025-06-01"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let booked: Value = test::read_body_json(resp).await;
    assert_eq!(booked["id"], 1);
    assert_eq!(booked["date"], "2025-06-01");
    assert_eq!(booked["patientId"], 1);
    assert_eq!(booked["doctorId"], 1);
    assert_eq!(booked["patient"]["name"], "Jane");
    assert_eq!(booked["doctor"]["name"], "Smith");

    let req = test::TestRequest::get().uri("/api/appointments").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["patient"]["disease"], "Flu");
    assert_eq!(listed[0]["doctor"]["specialization"], "Cardiology");

    let req = test::TestRequest::get().uri("/api/patients/1").to_request();
    let patient: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(patient["appointments"][0]["doctor"]["name"], "Smith");

    let req = test::TestRequest::get().uri("/api/doctors/1").to_request();
    let doctor: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(doctor["appointments"][0]["patient"]["name"], "Jane");
    // Booking does not consume a slot.
    assert_eq!(doctor["availableSlots"], 5);
}

#[actix_web::test]
async fn missing_date_defaults_to_today() {
    let gateway = support::memory_gateway();
    let app = test::init_service(App::new().app_data(gateway.clone()).configure(configure_app)).await;

    let req = test::TestRequest::post().uri("/api/patients").set_json(support::jane()).to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post().uri("/api/doctors").set_json(support::smith()).to_request();
    test::call_service(&app, req).await;

    for body in [json!({"patientId": 1, "doctorId": 1}), json!({"patientId": 1, "doctorId": 1, "date": ""})] {
        let req = test::TestRequest::post().uri("/api/appointments").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let booked: Value = test::read_body_json(resp).await;
        assert_eq!(booked["date"], support::today());
    }
}

#[actix_web::test]
async fn unknown_references_are_rejected() {
    let gateway = support::memory_gateway();
    let app = test::init_service(App::new().app_data(gateway.clone()).configure(configure_app)).await;

    let req = test::TestRequest::post().uri("/api/doctors").set_json(support::smith()).to_request();
    test::call_service(&app, req).await;

    let bodies = [
        json!({"patientId": 999, "doctorId": 1, "date": "2025-06-01"}),
        json!({"patientId": "abc", "doctorId": 1, "date": "2025-06-01"}),
        json!({"doctorId": 1}),
    ];
    for body in bodies {
        let req = test::TestRequest::post().uri("/api/appointments").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", body);
        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error, json!({"error": "Failed to create appointment"}));
    }

    let req = test::TestRequest::get().uri("/api/appointments").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn listing_failure_uses_fixed_message() {
    let gateway = support::unavailable_gateway();
    let app = test::init_service(App::new().app_data(gateway.clone()).configure(configure_app)).await;

    let req = test::TestRequest::get().uri("/api/appointments").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Failed to fetch appointments"}));
}
