use crate::gateway::PersistenceGateway;
use crate::services::{failure, missing, with_gateway};
use actix_web::{web, HttpResponse};
use common::api::ItemResource;
use common::model::Doctor;
use common::requests::parse_leading_int;
use log::error;

pub async fn process(gateway: web::Data<dyn PersistenceGateway>, id: web::Path<String>) -> HttpResponse {
    let Some(id) = parse_leading_int(&id) else {
        return missing(Doctor::NOT_FOUND);
    };

    match with_gateway(gateway, move |g| g.find_doctor(id)).await {
        Ok(Some(doctor)) => HttpResponse::Ok().json(doctor),
        Ok(None) => missing(Doctor::NOT_FOUND),
        Err(e) => {
            error!("loading doctor {} failed: {:#}", id, e);
            failure(Doctor::FETCH_ONE_FAILED)
        }
    }
}
