//! # Patient Service Module
//!
//! Routes under `/api/patients`:
//!
//! *   **`GET /api/patients`** (`list::process`): every patient with its appointments,
//!     each appointment carrying its doctor.
//! *   **`POST /api/patients`** (`create::process`): creates a patient from
//!     `{name, age, gender, contact, disease}` and answers `201` with the new record.
//! *   **`GET /api/patients/{id}`** (`get::process`): one patient with the same
//!     relations, or `404 {"error":"Patient not found"}`.
//!
//! Any other method on these paths falls through to the plain `Not Found` response.

mod create;
mod get;
mod list;

use crate::services::not_found;
use actix_web::web::{get, post, resource, route, scope};
use actix_web::Scope;
use common::api::Resource;
use common::model::Patient;

pub fn configure_routes() -> Scope {
    scope(Patient::COLLECTION)
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
