pub mod get_user;
pub mod sync_user;
