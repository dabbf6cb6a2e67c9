pub mod appointments;
pub mod doctors;
pub mod home;
pub mod patients;
