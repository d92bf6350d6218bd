pub mod profile;
pub mod project;
pub mod user;
