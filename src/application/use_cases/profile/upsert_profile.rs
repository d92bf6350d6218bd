use crate::application::ports::profile_repository::{
    NewProfile, ProfileChanges, ProfileRepository,
};
use crate::application::validation::{FieldErrors, clean_optional};
use crate::domain::portfolio::profile::Profile;

/// Candidate profile fields from the caller. Omitted fields are merged
/// over, never cleared.
#[derive(Debug, Clone, Default)]
pub struct ProfilePayload {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Create-if-absent, else merge-in-place, keyed by the caller's id. The
/// merge policy is deliberate: a partial payload must not wipe fields it
/// does not mention.
pub struct UpsertProfile<'a, R: ProfileRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProfileRepository + ?Sized> UpsertProfile<'a, R> {
    pub async fn execute(&self, user_id: &str, payload: ProfilePayload) -> anyhow::Result<Profile> {
        let existing = self.repo.find_by_user(user_id).await?;

        let mut errs = FieldErrors::new();
        let (name, title) = if existing.is_some() {
            // Merge onto the stored row: required fields may be omitted,
            // but a supplied blank is still rejected.
            let name = match payload.name.as_deref() {
                Some(_) => errs.require("name", payload.name.as_deref()),
                None => None,
            };
            let title = match payload.title.as_deref() {
                Some(_) => errs.require("title", payload.title.as_deref()),
                None => None,
            };
            (name, title)
        } else {
            (
                errs.require("name", payload.name.as_deref()),
                errs.require("title", payload.title.as_deref()),
            )
        };
        errs.finish()?;

        match existing {
            Some(profile) => {
                let changes = ProfileChanges {
                    name,
                    title,
                    email: clean_optional(payload.email),
                    phone: clean_optional(payload.phone),
                    location: clean_optional(payload.location),
                    profile_image_url: clean_optional(payload.profile_image_url),
                };
                self.repo
                    .update(profile.id, &changes)
                    .await?
                    .ok_or_else(|| anyhow::anyhow!("profile row vanished during update"))
            }
            None => {
                let new = NewProfile {
                    user_id: user_id.to_string(),
                    name: name.unwrap_or_default(),
                    title: title.unwrap_or_default(),
                    email: clean_optional(payload.email),
                    phone: clean_optional(payload.phone),
                    location: clean_optional(payload.location),
                    profile_image_url: clean_optional(payload.profile_image_url),
                };
                self.repo.insert(&new).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::validation::ValidationError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemProfiles {
        rows: Mutex<Vec<Profile>>,
        next_id: Mutex<i64>,
    }

    #[async_trait]
    impl ProfileRepository for MemProfiles {
        async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Option<Profile>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.user_id == user_id)
                .cloned())
        }

        async fn latest_active(&self) -> anyhow::Result<Option<Profile>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.is_active)
                .max_by_key(|p| p.updated_at)
                .cloned())
        }

        async fn insert(&self, new: &NewProfile) -> anyhow::Result<Profile> {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            let now = chrono::Utc::now();
            let profile = Profile {
                id: *next,
                user_id: new.user_id.clone(),
                name: new.name.clone(),
                title: new.title.clone(),
                email: new.email.clone(),
                phone: new.phone.clone(),
                location: new.location.clone(),
                profile_image_url: new.profile_image_url.clone(),
                is_active: true,
                created_at: now,
                updated_at: now,
            };
            self.rows.lock().unwrap().push(profile.clone());
            Ok(profile)
        }

        async fn update(
            &self,
            id: i64,
            changes: &ProfileChanges,
        ) -> anyhow::Result<Option<Profile>> {
            let mut rows = self.rows.lock().unwrap();
            let Some(row) = rows.iter_mut().find(|p| p.id == id) else {
                return Ok(None);
            };
            if let Some(v) = &changes.name {
                row.name = v.clone();
            }
            if let Some(v) = &changes.title {
                row.title = v.clone();
            }
            if let Some(v) = &changes.email {
                row.email = Some(v.clone());
            }
            if let Some(v) = &changes.phone {
                row.phone = Some(v.clone());
            }
            if let Some(v) = &changes.location {
                row.location = Some(v.clone());
            }
            if let Some(v) = &changes.profile_image_url {
                row.profile_image_url = Some(v.clone());
            }
            row.updated_at = chrono::Utc::now();
            Ok(Some(row.clone()))
        }
    }

    fn full_payload() -> ProfilePayload {
        ProfilePayload {
            name: Some("Jane Doe".into()),
            title: Some("Systems Engineer".into()),
            email: Some("jane@example.com".into()),
            phone: None,
            location: Some("Berlin".into()),
            profile_image_url: None,
        }
    }

    #[tokio::test]
    async fn creates_profile_on_first_write() {
        let repo = MemProfiles::default();
        let uc = UpsertProfile { repo: &repo };
        let profile = uc.execute("u1", full_payload()).await.unwrap();
        assert_eq!(profile.user_id, "u1");
        assert_eq!(profile.name, "Jane Doe");
        assert!(profile.is_active);
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn partial_payload_merges_without_clearing() {
        let repo = MemProfiles::default();
        let uc = UpsertProfile { repo: &repo };
        uc.execute("u1", full_payload()).await.unwrap();

        let partial = ProfilePayload {
            title: Some("Staff Engineer".into()),
            ..Default::default()
        };
        let updated = uc.execute("u1", partial).await.unwrap();
        assert_eq!(updated.title, "Staff Engineer");
        assert_eq!(updated.name, "Jane Doe");
        assert_eq!(updated.email.as_deref(), Some("jane@example.com"));
        assert_eq!(updated.location.as_deref(), Some("Berlin"));
    }

    #[tokio::test]
    async fn repeated_upsert_is_idempotent() {
        let repo = MemProfiles::default();
        let uc = UpsertProfile { repo: &repo };
        let first = uc.execute("u1", full_payload()).await.unwrap();
        let second = uc.execute("u1", full_payload()).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
        assert_eq!(second.name, first.name);
    }

    #[tokio::test]
    async fn missing_required_fields_are_enumerated_and_nothing_is_written() {
        let repo = MemProfiles::default();
        let uc = UpsertProfile { repo: &repo };
        let err = uc
            .execute("u1", ProfilePayload::default())
            .await
            .unwrap_err();
        let validation = err.downcast_ref::<ValidationError>().unwrap();
        let fields: Vec<_> = validation.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "title"]);
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_supplied_field_is_rejected_on_merge() {
        let repo = MemProfiles::default();
        let uc = UpsertProfile { repo: &repo };
        uc.execute("u1", full_payload()).await.unwrap();

        let payload = ProfilePayload {
            name: Some("   ".into()),
            ..Default::default()
        };
        let err = uc.execute("u1", payload).await.unwrap_err();
        assert!(err.downcast_ref::<ValidationError>().is_some());
        assert_eq!(repo.rows.lock().unwrap()[0].name, "Jane Doe");
    }
}
