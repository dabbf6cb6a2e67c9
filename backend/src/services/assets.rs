//! Embedded static files.
//!
//! - `/assets/{file}`: scripts used by the server-rendered pages (`static/assets`).
//! - `/app` and `/app/{tail}`: the browser app bundle copied from `frontend/dist`
//!   by `build.rs` (`static/dist`). Unknown paths inside `/app` fall back to the
//!   bundle's `index.html` so the app can boot from any entry URL.

use crate::services::not_found;
use actix_web::web::{get, resource, route, ServiceConfig};
use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/assets");
static APP_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const APP_PREFIX: &str = "/app";

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        resource("/assets/{file:.*}")
            .route(get().to(serve_asset))
            .default_service(route().to(not_found)),
    )
    .service(
        resource([APP_PREFIX, "/app/{tail:.*}"])
            .route(get().to(serve_app))
            .default_service(route().to(not_found)),
    );
}

fn embedded(dir: &'static Dir<'static>, file_path: &str) -> Option<HttpResponse> {
    dir.get_file(file_path).map(|file| {
        let mime = from_path(file_path).first_or_octet_stream();
        HttpResponse::Ok()
            .content_type(mime.as_ref())
            .body(file.contents().to_vec())
    })
}

async fn serve_asset(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches("/assets/");
    match embedded(&ASSETS_DIR, path) {
        Some(response) => response,
        None => not_found().await,
    }
}

async fn serve_app(req: HttpRequest) -> HttpResponse {
    let path = req
        .path()
        .trim_start_matches(APP_PREFIX)
        .trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match embedded(&APP_DIR, file_path) {
        Some(response) => response,
        None => match APP_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => not_found().await,
        },
    }
}
