//! Hospital management server: a JSON API over patients, doctors and
//! appointments, server-rendered pages, and the embedded browser app.

pub mod config;
pub mod gateway;
pub mod services;

use actix_web::web::{self, ServiceConfig};

/// Registers every route of the server. Shared by `main` and the integration tests.
///
/// Expects a `web::Data<dyn gateway::PersistenceGateway>` in the app data.
pub fn configure_app(cfg: &mut ServiceConfig) {
    cfg.service(services::patients::configure_routes())
        .service(services::doctors::configure_routes())
        .service(services::appointments::configure_routes());
    services::pages::configure(cfg);
    services::assets::configure(cfg);
    cfg.default_service(web::route().to(services::not_found));
}
