pub mod profile_repository;
pub mod project_repository;
pub mod storage_port;
pub mod user_repository;
