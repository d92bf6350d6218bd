pub mod get_my_profile;
pub mod get_public_profile;
pub mod upload_photo;
pub mod upsert_profile;
