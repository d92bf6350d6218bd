pub mod access;
pub mod ports;
pub mod uploads;
pub mod use_cases;
pub mod validation;
