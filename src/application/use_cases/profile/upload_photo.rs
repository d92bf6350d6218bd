use crate::application::ports::profile_repository::{
    NewProfile, ProfileChanges, ProfileRepository,
};
use crate::application::ports::storage_port::StoragePort;
use crate::application::uploads::{ImagePayload, UploadPolicy, public_upload_url};

/// Stores a profile photo and points the caller's profile at it. The file
/// write is the prerequisite: any admission or storage failure happens
/// before the profile row is touched. Callers without a profile get a
/// minimal one, named from the identity claims when available.
pub struct UploadProfilePhoto<'a, R, S>
where
    R: ProfileRepository + ?Sized,
    S: StoragePort + ?Sized,
{
    pub repo: &'a R,
    pub storage: &'a S,
    pub policy: UploadPolicy,
    pub public_base_url: Option<String>,
}

impl<'a, R, S> UploadProfilePhoto<'a, R, S>
where
    R: ProfileRepository + ?Sized,
    S: StoragePort + ?Sized,
{
    pub async fn execute(
        &self,
        user_id: &str,
        claims_first_name: Option<&str>,
        upload: ImagePayload,
    ) -> anyhow::Result<String> {
        self.policy.check_image(
            upload.content_type.as_deref(),
            upload.original_filename.as_deref(),
            upload.bytes.len(),
        )?;

        let stored = self
            .storage
            .store_image(upload.original_filename.as_deref(), &upload.bytes)
            .await
            .map_err(|err| {
                tracing::error!(error = ?err, "store_profile_photo_failed");
                err
            })?;
        let url = public_upload_url(self.public_base_url.as_deref(), &stored.relative_path);

        match self.repo.find_by_user(user_id).await? {
            Some(profile) => {
                let changes = ProfileChanges {
                    profile_image_url: Some(url.clone()),
                    ..Default::default()
                };
                self.repo
                    .update(profile.id, &changes)
                    .await?
                    .ok_or_else(|| anyhow::anyhow!("profile row vanished during update"))?;
            }
            None => {
                let new = NewProfile {
                    user_id: user_id.to_string(),
                    name: claims_first_name
                        .map(|s| s.trim())
                        .filter(|s| !s.is_empty())
                        .unwrap_or("User")
                        .to_string(),
                    title: "Developer".to_string(),
                    email: None,
                    phone: None,
                    location: None,
                    profile_image_url: Some(url.clone()),
                };
                self.repo.insert(&new).await?;
            }
        }

        Ok(url)
    }
}
