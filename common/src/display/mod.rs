//! Presentation rules shared by the server-rendered pages and the browser app.
//!
//! Nothing here affects stored data: status badges, date formatting and the
//! suggested form options are display concerns only.

use crate::model::{Appointment, Doctor, Patient};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// Specializations offered as suggestions on the doctor form. Any text is accepted.
pub const SPECIALIZATIONS: [&str; 8] = [
    "Cardiology",
    "Neurology",
    "Orthopedics",
    "Pediatrics",
    "Dermatology",
    "General Medicine",
    "Surgery",
    "Emergency Medicine",
];

/// Slot count rendered as a full progress bar.
const SLOTS_BAR_FULL: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Upcoming,
    Today,
    Completed,
}

impl AppointmentStatus {
    /// Classifies `date` against `today` by calendar day.
    ///
    /// Strictly later days are upcoming, the same day is today, and earlier or
    /// unreadable dates are completed.
    pub fn classify(date: &str, today: NaiveDate) -> Self {
        match calendar_day(date) {
            Some(day) if day > today => AppointmentStatus::Upcoming,
            Some(day) if day == today => AppointmentStatus::Today,
            _ => AppointmentStatus::Completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "Upcoming",
            AppointmentStatus::Today => "Today",
            AppointmentStatus::Completed => "Completed",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "bg-blue-100 text-blue-800",
            AppointmentStatus::Today => "bg-green-100 text-green-800",
            AppointmentStatus::Completed => "bg-gray-100 text-gray-800",
        }
    }
}

/// The calendar day a stored date string refers to, if it starts with `YYYY-MM-DD`.
pub fn calendar_day(date: &str) -> Option<NaiveDate> {
    let prefix = date.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

fn parse_date_time(date: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(date, fmt).ok())
}

/// Long US-style rendering: `June 1, 2025`, or `June 1, 2025, 10:30 AM` when a
/// time is present. Unreadable input is returned unchanged.
pub fn format_date(date: &str) -> String {
    if date.len() > 10 {
        if let Some(dt) = parse_date_time(date) {
            return dt.format("%B %-d, %Y, %-I:%M %p").to_string();
        }
    }
    match calendar_day(date) {
        Some(day) if date.len() == 10 => day.format("%B %-d, %Y").to_string(),
        _ => date.to_string(),
    }
}

/// Upper-cased first character of `name`, empty for an empty name.
pub fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

pub fn specialization_badge(specialization: &str) -> &'static str {
    match specialization {
        "Cardiology" | "Emergency Medicine" => "bg-red-100 text-red-800",
        "Neurology" => "bg-purple-100 text-purple-800",
        "Orthopedics" => "bg-blue-100 text-blue-800",
        "Pediatrics" => "bg-green-100 text-green-800",
        "Dermatology" => "bg-yellow-100 text-yellow-800",
        "Surgery" => "bg-orange-100 text-orange-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

/// Width of the availability bar as a percentage in `0..=100`.
pub fn slots_bar_percent(available_slots: i64) -> i64 {
    (available_slots.max(0) * 100 / SLOTS_BAR_FULL).min(100)
}

/// Availability badge text and classes for a doctor.
pub fn availability(doctor: &Doctor) -> (&'static str, &'static str) {
    if doctor.available_slots > 0 {
        ("Available", "bg-green-100 text-green-800")
    } else {
        ("Fully Booked", "bg-red-100 text-red-800")
    }
}

pub fn patient_option_label(patient: &Patient) -> String {
    format!("{} ({}, {})", patient.name, patient.age, patient.gender)
}

pub fn doctor_option_label(doctor: &Doctor) -> String {
    format!("Dr. {} - {}", doctor.name, doctor.specialization)
}

/// Sorts appointments newest first. Stored dates are ISO 8601, so string order
/// is chronological; ties fall back to the higher id first.
pub fn sort_newest_first(appointments: &mut [Appointment]) {
    appointments.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
}
