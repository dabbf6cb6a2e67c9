//! Types and rules shared by the hospital backend and the browser app.
//!
//! - `model`: the three persisted entities and their JSON shapes.
//! - `requests`: create payloads and the lenient id coercion used on booking.
//! - `api`: route paths and the fixed error messages of the REST contract.
//! - `display`: presentation rules both front ends render with.
//! - `view`: per-page UI state machines.

pub mod api;
pub mod display;
pub mod model;
pub mod requests;
pub mod view;
