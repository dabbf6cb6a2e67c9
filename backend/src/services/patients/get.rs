use crate::gateway::PersistenceGateway;
use crate::services::{failure, missing, with_gateway};
use actix_web::{web, HttpResponse};
use common::api::ItemResource;
use common::model::Patient;
use common::requests::parse_leading_int;
use log::error;

/// Handler for `GET /api/patients/{id}`.
///
/// The id goes through the same lenient integer parsing as booking ids, so
/// `"12abc"` addresses patient 12 and a non-numeric id is simply not found.
pub async fn process(gateway: web::Data<dyn PersistenceGateway>, id: web::Path<String>) -> HttpResponse {
    let Some(id) = parse_leading_int(&id) else {
        return missing(Patient::NOT_FOUND);
    };

    match with_gateway(gateway, move |g| g.find_patient(id)).await {
        Ok(Some(patient)) => HttpResponse::Ok().json(patient),
        Ok(None) => missing(Patient::NOT_FOUND),
        Err(e) => {
            error!("loading patient {} failed: {:#}", id, e);
            failure(Patient::FETCH_ONE_FAILED)
        }
    }
}
