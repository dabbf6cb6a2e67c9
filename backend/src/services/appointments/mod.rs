//! # Appointment Service Module
//!
//! Routes under `/api/appointments`. There is no item endpoint.
//!
//! *   **`GET /api/appointments`**: every appointment with `patient` and `doctor` embedded.
//! *   **`POST /api/appointments`**: books an appointment from
//!     `{patientId, doctorId, date}`. Ids may be numbers or numeric strings; a
//!     missing or empty `date` becomes today's UTC date. Unknown ids are rejected
//!     by the store's foreign keys and reported as the generic `500`.
//!
//! Booking never changes a doctor's `availableSlots`.

mod create;
mod list;

use crate::services::not_found;
use actix_web::web::{get, post, resource, route, scope};
use actix_web::Scope;
use common::api::Resource;
use common::model::Appointment;

pub fn configure_routes() -> Scope {
    scope(Appointment::COLLECTION).service(
        resource("")
            .route(get().to(list::process))
            .route(post().to(create::process))
            .default_service(route().to(not_found)),
    )
}
