use crate::gateway::PersistenceGateway;
use crate::services::{failure, with_gateway};
use actix_web::{web, HttpResponse};
use common::api::Resource;
use common::model::Patient;
use log::error;

pub async fn process(gateway: web::Data<dyn PersistenceGateway>) -> HttpResponse {
    match with_gateway(gateway, |g| g.list_patients()).await {
        Ok(patients) => HttpResponse::Ok().json(patients),
        Err(e) => {
            error!("listing patients failed: {:#}", e);
            failure(Patient::FETCH_FAILED)
        }
    }
}
