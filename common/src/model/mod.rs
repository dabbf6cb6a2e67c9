pub mod appointment;
pub mod doctor;
pub mod patient;

pub use appointment::Appointment;
pub use doctor::Doctor;
pub use patient::Patient;
