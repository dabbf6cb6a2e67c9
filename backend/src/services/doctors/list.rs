use crate::gateway::PersistenceGateway;
use crate::services::{failure, with_gateway};
use actix_web::{web, HttpResponse};
use common::api::Resource;
use common::model::Doctor;
use log::error;

pub async fn process(gateway: web::Data<dyn PersistenceGateway>) -> HttpResponse {
    match with_gateway(gateway, |g| g.list_doctors()).await {
        Ok(doctors) => HttpResponse::Ok().json(doctors),
        Err(e) => {
            error!("listing doctors failed: {:#}", e);
            failure(Doctor::FETCH_FAILED)
        }
    }
}
