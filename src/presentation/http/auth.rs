use axum::{Json, Router, extract::State, routing::get};
use jsonwebtoken::{DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::access::Actor;
use crate::application::ports::user_repository::UpsertUser;
use crate::application::use_cases::auth::get_user::GetUser;
use crate::application::use_cases::auth::sync_user::SyncUser;
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::presentation::http::error::ApiError;

/// Claims minted by the external identity provider. `sub` is the stable
/// subject id this service keys everything on; the display attributes are
/// merged into the users table on every authenticated request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new().route("/user", get(current_user)).with_state(ctx)
}

/// The caller's identity row.
#[utoipa::path(get, path = "/api/auth/user", tag = "Auth", responses(
    (status = 200, body = UserResponse),
    (status = 401, description = "No valid session")
))]
pub async fn current_user(
    State(ctx): State<AppContext>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = GetUser {
        repo: repo.as_ref(),
    };
    let user = uc
        .execute(auth.id())
        .await
        .map_err(ApiError::from)?
        .ok_or(ApiError::Unauthorized)?;
    Ok(Json(UserResponse {
        id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        profile_image_url: user.profile_image_url,
    }))
}

// --- Authenticated-caller extractor & JWT utils ---
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Validated caller identity. Extraction refreshes the identity row from
/// the claims, so a user record exists by the time any handler runs.
pub struct AuthUser {
    pub claims: Claims,
}

impl AuthUser {
    pub fn id(&self) -> &str {
        &self.claims.sub
    }

    pub fn actor(&self) -> Actor {
        Actor::User(self.claims.sub.clone())
    }
}

#[axum::async_trait]
impl FromRequestParts<AppContext> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts).ok_or(ApiError::Unauthorized)?;
        let claims = validate_token(&ctx.cfg, &token)?;

        let repo = ctx.user_repo();
        let uc = SyncUser {
            repo: repo.as_ref(),
        };
        uc.execute(&UpsertUser {
            id: claims.sub.clone(),
            email: claims.email.clone(),
            first_name: claims.first_name.clone(),
            last_name: claims.last_name.clone(),
            profile_image_url: claims.picture.clone(),
        })
        .await
        .map_err(ApiError::from)?;

        Ok(AuthUser { claims })
    }
}

fn extract_token(parts: &Parts) -> Option<String> {
    // 1) Prefer Authorization header if present
    if let Some(auth) = parts
        .headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        if let Some(t) = auth.strip_prefix("Bearer ") {
            return Some(t.to_string());
        }
    }

    // 2) Fallback to the provider's HttpOnly cookie `access_token`
    parts
        .headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|hdr| get_cookie(hdr, "access_token"))
}

pub(crate) fn validate_token(cfg: &Config, token: &str) -> Result<Claims, ApiError> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::Unauthorized)?;
    Ok(data.claims)
}

fn get_cookie(cookie_header: &str, name: &str) -> Option<String> {
    for part in cookie_header.split(';') {
        let kv = part.trim();
        if let Some((k, v)) = kv.split_once('=') {
            if k.trim() == name {
                return Some(v.trim().to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header};

    fn test_config() -> Config {
        Config {
            api_port: 0,
            frontend_url: None,
            database_url: String::new(),
            jwt_secret: "test-secret".into(),
            uploads_dir: "./uploads".into(),
            upload_max_bytes: 5 * 1024 * 1024,
            public_base_url: None,
            default_content_path: None,
            is_production: false,
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn accepts_provider_signed_token_and_reads_claims() {
        let cfg = test_config();
        let claims = Claims {
            sub: "user-123".into(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
            email: Some("a@b.c".into()),
            first_name: Some("Jane".into()),
            last_name: None,
            picture: None,
        };
        let token = sign(&claims, "test-secret");
        let decoded = validate_token(&cfg, &token).unwrap();
        assert_eq!(decoded.sub, "user-123");
        assert_eq!(decoded.first_name.as_deref(), Some("Jane"));
    }

    #[test]
    fn rejects_token_signed_with_wrong_secret() {
        let cfg = test_config();
        let claims = Claims {
            sub: "user-123".into(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
            email: None,
            first_name: None,
            last_name: None,
            picture: None,
        };
        let token = sign(&claims, "other-secret");
        assert!(validate_token(&cfg, &token).is_err());
    }

    #[test]
    fn finds_cookie_among_many() {
        let hdr = "theme=dark; access_token=abc.def.ghi; lang=en";
        assert_eq!(get_cookie(hdr, "access_token").as_deref(), Some("abc.def.ghi"));
        assert_eq!(get_cookie(hdr, "missing"), None);
    }
}
