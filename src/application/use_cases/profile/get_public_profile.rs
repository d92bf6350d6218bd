use crate::application::ports::profile_repository::ProfileRepository;
use crate::domain::portfolio::profile::Profile;

/// Public read path: the most recently updated active profile. The caller
/// substitutes the configured default content when none exists yet.
pub struct GetPublicProfile<'a, R: ProfileRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProfileRepository + ?Sized> GetPublicProfile<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Option<Profile>> {
        self.repo.latest_active().await
    }
}
