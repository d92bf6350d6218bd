use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::profile_repository::{
    NewProfile, ProfileChanges, ProfileRepository,
};
use crate::domain::portfolio::profile::Profile;
use crate::infrastructure::db::PgPool;

pub struct SqlxProfileRepository {
    pub pool: PgPool,
}

impl SqlxProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PROFILE_COLUMNS: &str = "id, user_id, name, title, email, phone, location, \
                               profile_image_url, is_active, created_at, updated_at";

fn map_profile(row: &sqlx::postgres::PgRow) -> Profile {
    Profile {
        id: row.get("id"),
        user_id: row.get("user_id"),
        name: row.get("name"),
        title: row.get("title"),
        email: row.get("email"),
        phone: row.get("phone"),
        location: row.get("location"),
        profile_image_url: row.get("profile_image_url"),
        is_active: row.get("is_active"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepository {
    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Option<Profile>> {
        let row = sqlx::query(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1 \
             ORDER BY updated_at DESC LIMIT 1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_profile))
    }

    async fn latest_active(&self) -> anyhow::Result<Option<Profile>> {
        let row = sqlx::query(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE is_active \
             ORDER BY updated_at DESC LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_profile))
    }

    async fn insert(&self, new: &NewProfile) -> anyhow::Result<Profile> {
        let row = sqlx::query(&format!(
            "INSERT INTO profiles (user_id, name, title, email, phone, location, profile_image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(&new.user_id)
        .bind(&new.name)
        .bind(&new.title)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.location)
        .bind(&new.profile_image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_profile(&row))
    }

    async fn update(&self, id: i64, changes: &ProfileChanges) -> anyhow::Result<Option<Profile>> {
        // COALESCE keeps the stored value for omitted fields (merge policy).
        let row = sqlx::query(&format!(
            "UPDATE profiles SET \
                 name = COALESCE($2, name), \
                 title = COALESCE($3, title), \
                 email = COALESCE($4, email), \
                 phone = COALESCE($5, phone), \
                 location = COALESCE($6, location), \
                 profile_image_url = COALESCE($7, profile_image_url), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.title)
        .bind(&changes.email)
        .bind(&changes.phone)
        .bind(&changes.location)
        .bind(&changes.profile_image_url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_profile))
    }
}
