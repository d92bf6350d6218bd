pub mod auth;
pub mod contact;
pub mod profile;
pub mod projects;
