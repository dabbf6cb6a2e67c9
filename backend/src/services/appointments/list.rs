use crate::gateway::PersistenceGateway;
use crate::services::{failure, with_gateway};
use actix_web::{web, HttpResponse};
use common::api::Resource;
use common::model::Appointment;
use log::error;

pub async fn process(gateway: web::Data<dyn PersistenceGateway>) -> HttpResponse {
    match with_gateway(gateway, |g| g.list_appointments()).await {
        Ok(appointments) => HttpResponse::Ok().json(appointments),
        Err(e) => {
            error!("listing appointments failed: {:#}", e);
            failure(Appointment::FETCH_FAILED)
        }
    }
}
