/// One portfolio profile per user. The schema does not enforce uniqueness;
/// the upsert use case decides create-vs-update by looking up the existing
/// row for the owner.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub title: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile_image_url: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
