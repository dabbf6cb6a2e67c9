//! HTTP client for the JSON API.
//!
//! One generic `Service<R>` covers every entity: `get_all` hits `R::COLLECTION`
//! and `create` posts `R::Create` to it. Transport failures, non-2xx statuses and
//! undecodable bodies all collapse into the resource's fixed message; the server's
//! own error text is only written to the browser console.

use common::api::Resource;
use common::model::{Appointment, Doctor, Patient};
use gloo_console::error;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

pub struct Service<R>(PhantomData<R>);

pub type PatientService = Service<Patient>;
pub type DoctorService = Service<Doctor>;
pub type AppointmentService = Service<Appointment>;

impl<R> Service<R>
where
    R: Resource + DeserializeOwned,
{
    pub async fn get_all() -> Result<Vec<R>, String> {
        let response = Request::get(R::COLLECTION).send().await;
        decode(response, R::FETCH_FAILED).await
    }

    pub async fn create(data: &R::Create) -> Result<R, String> {
        let request = Request::post(R::COLLECTION).json(data).map_err(|e| {
            error!(format!("{}: {}", R::CREATE_FAILED, e));
            R::CREATE_FAILED.to_string()
        })?;
        decode(request.send().await, R::CREATE_FAILED).await
    }
}

async fn decode<T: DeserializeOwned>(
    response: Result<Response, gloo_net::Error>,
    message: &'static str,
) -> Result<T, String> {
    let response = match response {
        Ok(resp) if resp.ok() => resp,
        Ok(resp) => {
            let detail = resp.text().await.unwrap_or_default();
            error!(format!("{}: HTTP {} {}", message, resp.status(), detail));
            return Err(message.to_string());
        }
        Err(e) => {
            error!(format!("{}: {}", message, e));
            return Err(message.to_string());
        }
    };

    response.json::<T>().await.map_err(|e| {
        error!(format!("{}: {}", message, e));
        message.to_string()
    })
}
