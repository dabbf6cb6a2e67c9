mod support;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use hospital::configure_app;

#[actix_web::test]
async fn unmatched_paths_are_plain_not_found() {
    let gateway = support::memory_gateway();
    let app = test::init_service(App::new().app_data(gateway.clone()).configure(configure_app)).await;

    for uri in ["/nope", "/api/nurses", "/api/appointments/1", "/assets/missing.js"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        let body = test::read_body(resp).await;
        assert_eq!(body, "Not Found", "{}", uri);
    }
}

#[actix_web::test]
async fn unsupported_methods_are_not_found() {
    let gateway = support::memory_gateway();
    let app = test::init_service(App::new().app_data(gateway.clone()).configure(configure_app)).await;

    let requests = [
        test::TestRequest::delete().uri("/api/patients"),
        test::TestRequest::put().uri("/api/doctors/1"),
        test::TestRequest::post().uri("/patients"),
    ];
    for req in requests {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(test::read_body(resp).await, "Not Found");
    }
}

macro_rules! page_text {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::get().uri($uri).to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", $uri);
        String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8 page")
    }};
}

#[actix_web::test]
async fn pages_render_without_touching_the_store() {
    let gateway = support::unavailable_gateway();
    let app = test::init_service(App::new().app_data(gateway.clone()).configure(configure_app)).await;

    let home = page_text!(&app, "/");
    assert!(home.contains("Hospital Management System"));

    for (uri, collection, plural) in [
        ("/patients", "/api/patients", "patients"),
        ("/doctors", "/api/doctors", "doctors"),
        ("/appointments", "/api/appointments", "appointments"),
    ] {
        let page = page_text!(&app, uri);
        assert!(page.contains(&format!(r#"data-collection="{}""#, collection)), "{}", uri);
        assert!(page.contains(&format!("Loading {}...", plural)), "{}", uri);
        assert!(!page.contains("Error loading"), "{}", uri);
    }

    let page = page_text!(&app, "/appointments");
    assert!(page.contains(r#"data-options="/api/patients""#));
    assert!(page.contains(r#"data-options="/api/doctors""#));
}

#[actix_web::test]
async fn page_script_renders_every_kind_the_pages_use() {
    let gateway = support::memory_gateway();
    let app = test::init_service(App::new().app_data(gateway.clone()).configure(configure_app)).await;

    let script = page_text!(&app, "/assets/hospital.js");
    for uri in ["/patients", "/doctors", "/appointments"] {
        let page = page_text!(&app, uri);
        for kind in page.split(r#"data-kind=""#).skip(1) {
            let kind = &kind[..kind.find('"').expect("closing quote")];
            assert!(script.contains(&format!("\t{}: {{", kind)), "{} uses {}", uri, kind);
        }
    }
    assert!(script.contains("ID: #${escapeHtml(appointment.id)}"));
    assert!(script.contains("Patient: ${escapeHtml(patient.age)} years"));
}

#[actix_web::test]
async fn page_script_is_served() {
    let gateway = support::memory_gateway();
    let app = test::init_service(App::new().app_data(gateway.clone()).configure(configure_app)).await;

    let req = test::TestRequest::get().uri("/assets/hospital.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("javascript"), "{}", content_type);
}
