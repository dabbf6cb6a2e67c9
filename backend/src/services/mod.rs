//! HTTP surface of the hospital server.
//!
//! - `patients`, `doctors`, `appointments`: the JSON API under `/api`.
//! - `pages`: server-rendered HTML pages at `/`, `/patients`, `/doctors`, `/appointments`.
//! - `assets`: embedded page scripts under `/assets` and the browser app under `/app`.
//!
//! Every API handler performs exactly one gateway call. Any failure collapses
//! into the route's fixed message with status 500; the only other error status
//! is the explicit 404 of the two item endpoints.

pub mod appointments;
pub mod assets;
pub mod doctors;
pub mod pages;
pub mod patients;

use crate::config::PAYLOAD_LIMIT;
use crate::gateway::PersistenceGateway;
use actix_web::{web, HttpResponse};
use common::api::ErrorBody;
use futures_util::StreamExt;
use std::sync::Arc;

/// Runs a gateway call on the blocking pool and flattens both failure layers.
pub(crate) async fn with_gateway<T, F>(
    gateway: web::Data<dyn PersistenceGateway>,
    call: F,
) -> anyhow::Result<T>
where
    T: Send + 'static,
    F: FnOnce(&dyn PersistenceGateway) -> anyhow::Result<T> + Send + 'static,
{
    let gateway: Arc<dyn PersistenceGateway> = gateway.into_inner();
    web::block(move || call(gateway.as_ref()))
        .await
        .map_err(|e| anyhow::anyhow!("blocking pool unavailable: {}", e))?
}

/// Collects a request body, failing once it grows past `PAYLOAD_LIMIT`.
///
/// Used instead of the `Bytes` extractor so an oversized body reaches the
/// handler as an ordinary failure rather than actix's own `413`.
pub(crate) async fn read_body(mut payload: web::Payload) -> anyhow::Result<web::BytesMut> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| anyhow::anyhow!("reading request body: {}", e))?;
        if body.len() + chunk.len() > PAYLOAD_LIMIT {
            anyhow::bail!("request body exceeds {} bytes", PAYLOAD_LIMIT);
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// `500` with the route's fixed message.
pub(crate) fn failure(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorBody::new(message))
}

/// `404` with a JSON error body, used by the item endpoints.
pub(crate) fn missing(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new(message))
}

/// Fallback for every unmatched path or method.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body("Not Found")
}

/// Today's UTC calendar date as `YYYY-MM-DD`.
pub(crate) fn today_utc() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
