use crate::gateway::PersistenceGateway;
use crate::services::{failure, read_body, with_gateway};
use actix_web::{web, HttpResponse};
use common::api::Resource;
use common::model::Patient;
use common::requests::NewPatient;
use log::{error, info};

/// Handler for `POST /api/patients`.
///
/// The body is read and parsed here rather than through `web::Json` so that an
/// oversized body, malformed JSON, missing fields and type mismatches all
/// produce the same `500` as a store failure.
pub async fn process(gateway: web::Data<dyn PersistenceGateway>, payload: web::Payload) -> HttpResponse {
    match create_patient(gateway, payload).await {
        Ok(patient) => {
            info!("created patient {}", patient.id);
            HttpResponse::Created().json(patient)
        }
        Err(e) => {
            error!("creating patient failed: {:#}", e);
            failure(Patient::CREATE_FAILED)
        }
    }
}

async fn create_patient(
    gateway: web::Data<dyn PersistenceGateway>,
    payload: web::Payload,
) -> anyhow::Result<Patient> {
    let input: NewPatient = serde_json::from_slice(&read_body(payload).await?)?;
    with_gateway(gateway, move |g| g.create_patient(&input)).await
}
