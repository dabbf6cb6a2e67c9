//! # Doctor Service Module
//!
//! Routes under `/api/doctors`, mirroring the patient routes:
//!
//! *   **`GET /api/doctors`**: every doctor with its appointments, each carrying its patient.
//! *   **`POST /api/doctors`**: creates a doctor from `{name, specialization, availableSlots}`.
//! *   **`GET /api/doctors/{id}`**: one doctor, or `404 {"error":"Doctor not found"}`.

mod create;
mod get;
mod list;

use crate::services::not_found;
use actix_web::web::{get, post, resource, route, scope};
use actix_web::Scope;
use common::api::Resource;
use common::model::Doctor;

pub fn configure_routes() -> Scope {
    scope(Doctor::COLLECTION)
        .service(
            resource("")
                .route(get().to(list::process))
                .route(post().to(create::process))
                .default_service(route().to(not_found)),
        )
        .service(
            resource("/{id}")
                .route(get().to(get::process))
                .default_service(route().to(not_found)),
        )
}
