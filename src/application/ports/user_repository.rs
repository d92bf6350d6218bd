use async_trait::async_trait;

use crate::domain::portfolio::user::User;

/// Claims-shaped payload used to create or refresh the identity row on
/// every successful authentication.
#[derive(Debug, Clone, Default)]
pub struct UpsertUser {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn upsert_user(&self, user: &UpsertUser) -> anyhow::Result<User>;
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>>;
}
