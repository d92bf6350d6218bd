use async_trait::async_trait;

use crate::domain::portfolio::profile::Profile;

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub user_id: String,
    pub name: String,
    pub title: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Partial update: `None` means "field omitted, keep the stored value".
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile_image_url: Option<String>,
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Option<Profile>>;
    /// Most recently updated active profile, for the public read path.
    async fn latest_active(&self) -> anyhow::Result<Option<Profile>>;
    async fn insert(&self, new: &NewProfile) -> anyhow::Result<Profile>;
    async fn update(&self, id: i64, changes: &ProfileChanges) -> anyhow::Result<Option<Profile>>;
}
