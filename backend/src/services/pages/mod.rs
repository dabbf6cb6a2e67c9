//! Server-rendered HTML pages.
//!
//! The server only renders each page's shell. `/assets/hospital.js` loads the
//! lists and select options from the JSON API once the page is up, swapping the
//! loading placeholder for rows, the empty placeholder or the load error, and
//! posts the forms back to the same API.

mod appointments;
mod doctors;
mod home;
mod layout;
mod patients;

use crate::services::not_found;
use actix_web::web::{get, resource, route, ServiceConfig};
use actix_web::HttpResponse;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        resource("/")
            .route(get().to(home_page))
            .default_service(route().to(not_found)),
    )
    .service(
        resource("/patients")
            .route(get().to(patients_page))
            .default_service(route().to(not_found)),
    )
    .service(
        resource("/doctors")
            .route(get().to(doctors_page))
            .default_service(route().to(not_found)),
    )
    .service(
        resource("/appointments")
            .route(get().to(appointments_page))
            .default_service(route().to(not_found)),
    );
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

async fn home_page() -> HttpResponse {
    html(home::render())
}

async fn patients_page() -> HttpResponse {
    html(patients::render())
}

async fn doctors_page() -> HttpResponse {
    html(doctors::render())
}

async fn appointments_page() -> HttpResponse {
    html(appointments::render(chrono::Utc::now().date_naive()))
}
