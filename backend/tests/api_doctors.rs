mod support;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use hospital::configure_app;
use serde_json::{json, Value};

#[actix_web::test]
async fn create_list_and_fetch_doctor() {
    let gateway = support::memory_gateway();
    let app = test::init_service(App::new().app_data(gateway.clone()).configure(configure_app)).await;

    let req = test::TestRequest::post()
        .uri("/api/doctors")
        .set_json(support::smith())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(
        created,
        json!({"id": 1, "name": "Smith", "specialization": "Cardiology", "availableSlots": 5})
    );

    let req = test::TestRequest::get().uri("/api/doctors").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed[0]["availableSlots"], 5);
    assert_eq!(listed[0]["appointments"], json!([]));

    let req = test::TestRequest::get().uri("/api/doctors/1").to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["name"], "Smith");
}

#[actix_web::test]
async fn any_specialization_text_is_accepted() {
    let gateway = support::memory_gateway();
    let app = test::init_service(App::new().app_data(gateway.clone()).configure(configure_app)).await;

    let req = test::TestRequest::post()
        .uri("/api/doctors")
        .set_json(json!({"name": "Who", "specialization": "Time Travel", "availableSlots": 0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn missing_doctor_is_404() {
    let gateway = support::memory_gateway();
    let app = test::init_service(App::new().app_data(gateway.clone()).configure(configure_app)).await;

    let req = test::TestRequest::get().uri("/api/doctors/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Doctor not found"}));
}

#[actix_web::test]
async fn invalid_doctor_body_is_500() {
    let gateway = support::memory_gateway();
    let app = test::init_service(App::new().app_data(gateway.clone()).configure(configure_app)).await;

    let req = test::TestRequest::post()
        .uri("/api/doctors")
        .set_json(json!({"name": "Smith", "specialization": "Cardiology", "availableSlots": "many"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Failed to create doctor"}));
}

#[actix_web::test]
async fn store_failures_use_fixed_messages() {
    let gateway = support::unavailable_gateway();
    let app = test::init_service(App::new().app_data(gateway.clone()).configure(configure_app)).await;

    let req = test::TestRequest::get().uri("/api/doctors").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"error": "Failed to fetch doctors"}));

    let req = test::TestRequest::get().uri("/api/doctors/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"error": "Failed to fetch doctor"}));
}
