use crate::gateway::PersistenceGateway;
use crate::services::{failure, read_body, today_utc, with_gateway};
use actix_web::{web, HttpResponse};
use common::api::Resource;
use common::model::Appointment;
use common::requests::AppointmentRequest;
use log::{error, info};

pub async fn process(gateway: web::Data<dyn PersistenceGateway>, payload: web::Payload) -> HttpResponse {
    match book_appointment(gateway, payload).await {
        Ok(appointment) => {
            info!(
                "booked appointment {} (patient {}, doctor {}, {})",
                appointment.id, appointment.patient_id, appointment.doctor_id, appointment.date
            );
            HttpResponse::Created().json(appointment)
        }
        Err(e) => {
            error!("booking appointment failed: {:#}", e);
            failure(Appointment::CREATE_FAILED)
        }
    }
}

async fn book_appointment(
    gateway: web::Data<dyn PersistenceGateway>,
    payload: web::Payload,
) -> anyhow::Result<Appointment> {
    let request: AppointmentRequest = serde_json::from_slice(&read_body(payload).await?)?;
    let input = request.resolve(&today_utc())?;
    with_gateway(gateway, move |g| g.create_appointment(&input)).await
}
