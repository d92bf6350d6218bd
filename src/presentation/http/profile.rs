use axum::{
    Json, Router,
    extract::{Multipart, State},
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::uploads::ImagePayload;
use crate::application::use_cases::profile::get_my_profile::GetMyProfile;
use crate::application::use_cases::profile::get_public_profile::GetPublicProfile;
use crate::application::use_cases::profile::upload_photo::UploadProfilePhoto;
use crate::application::use_cases::profile::upsert_profile::{ProfilePayload, UpsertProfile};
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::default_content::DefaultProfile;
use crate::domain::portfolio::profile::Profile;
use crate::presentation::http::error::ApiError;
use crate::presentation::http::auth::AuthUser;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile_image_url: Option<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            name: p.name,
            title: p.title,
            email: p.email,
            phone: p.phone,
            location: p.location,
            profile_image_url: p.profile_image_url,
        }
    }
}

impl From<&DefaultProfile> for ProfileResponse {
    fn from(p: &DefaultProfile) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            title: p.title.clone(),
            email: p.email.clone(),
            phone: p.phone.clone(),
            location: p.location.clone(),
            profile_image_url: p.profile_image_url.clone(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoUploadResponse {
    pub image_url: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/profile/me", get(get_my_profile))
        .route("/profile/photo", post(upload_photo))
        .with_state(ctx)
}

/// Most recently updated active profile, or the configured default
/// content when none exists yet.
#[utoipa::path(get, path = "/api/profile", tag = "Profile", responses(
    (status = 200, body = ProfileResponse)
))]
pub async fn get_profile(State(ctx): State<AppContext>) -> Result<Json<ProfileResponse>, ApiError> {
    let repo = ctx.profile_repo();
    let uc = GetPublicProfile {
        repo: repo.as_ref(),
    };
    let profile = uc.execute().await.map_err(ApiError::from)?;
    let resp = match profile {
        Some(p) => ProfileResponse::from(p),
        None => ProfileResponse::from(&ctx.default_content().profile),
    };
    Ok(Json(resp))
}

/// The caller's own profile, `null` until first write.
#[utoipa::path(get, path = "/api/profile/me", tag = "Profile", responses(
    (status = 200, body = ProfileResponse, description = "The caller's profile, or null")
))]
pub async fn get_my_profile(
    State(ctx): State<AppContext>,
    auth: AuthUser,
) -> Result<Json<Option<ProfileResponse>>, ApiError> {
    let repo = ctx.profile_repo();
    let uc = GetMyProfile {
        repo: repo.as_ref(),
    };
    let profile = uc.execute(auth.id()).await.map_err(ApiError::from)?;
    Ok(Json(profile.map(ProfileResponse::from)))
}

/// Upsert keyed by the caller's id. Omitted fields are retained, never
/// cleared.
#[utoipa::path(put, path = "/api/profile", tag = "Profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, body = ProfileResponse),
        (status = 400, description = "Validation failure with per-field detail")
    ))]
pub async fn update_profile(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let repo = ctx.profile_repo();
    let uc = UpsertProfile {
        repo: repo.as_ref(),
    };
    let payload = ProfilePayload {
        name: req.name,
        title: req.title,
        email: req.email,
        phone: req.phone,
        location: req.location,
        profile_image_url: req.profile_image_url,
    };
    let profile = uc
        .execute(auth.id(), payload)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(ProfileResponse::from(profile)))
}

/// Multipart upload, field `photo`. Rejects non-image content and
/// payloads over the configured limit before anything is written.
#[utoipa::path(post, path = "/api/profile/photo", tag = "Profile",
    responses(
        (status = 200, body = PhotoUploadResponse),
        (status = 413, description = "Payload over the size limit"),
        (status = 415, description = "Not an image")
    ))]
pub async fn upload_photo(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<PhotoUploadResponse>, ApiError> {
    let mut photo: Option<ImagePayload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(ApiError::from_multipart)?
    {
        if field.name() == Some("photo") {
            let original_filename = field.file_name().map(|s| s.to_string());
            let content_type = field.content_type().map(|s| s.to_string());
            let bytes = field.bytes().await.map_err(ApiError::from_multipart)?;
            photo = Some(ImagePayload {
                bytes: bytes.to_vec(),
                original_filename,
                content_type,
            });
        }
    }

    let photo = photo.ok_or(ApiError::BadRequest("no file uploaded"))?;

    let repo = ctx.profile_repo();
    let storage = ctx.storage_port();
    let uc = UploadProfilePhoto {
        repo: repo.as_ref(),
        storage: storage.as_ref(),
        policy: ctx.upload_policy(),
        public_base_url: ctx.cfg.public_base_url.clone(),
    };
    let image_url = uc
        .execute(auth.id(), auth.claims.first_name.as_deref(), photo)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(PhotoUploadResponse { image_url }))
}
