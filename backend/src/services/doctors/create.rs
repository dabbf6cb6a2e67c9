use crate::gateway::PersistenceGateway;
use crate::services::{failure, read_body, with_gateway};
use actix_web::{web, HttpResponse};
use common::api::Resource;
use common::model::Doctor;
use common::requests::NewDoctor;
use log::{error, info};

pub async fn process(gateway: web::Data<dyn PersistenceGateway>, payload: web::Payload) -> HttpResponse {
    match create_doctor(gateway, payload).await {
        Ok(doctor) => {
            info!("created doctor {}", doctor.id);
            HttpResponse::Created().json(doctor)
        }
        Err(e) => {
            error!("creating doctor failed: {:#}", e);
            failure(Doctor::CREATE_FAILED)
        }
    }
}

async fn create_doctor(
    gateway: web::Data<dyn PersistenceGateway>,
    payload: web::Payload,
) -> anyhow::Result<Doctor> {
    let input: NewDoctor = serde_json::from_slice(&read_body(payload).await?)?;
    with_gateway(gateway, move |g| g.create_doctor(&input)).await
}
