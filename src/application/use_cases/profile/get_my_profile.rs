use crate::application::ports::profile_repository::ProfileRepository;
use crate::domain::portfolio::profile::Profile;

pub struct GetMyProfile<'a, R: ProfileRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProfileRepository + ?Sized> GetMyProfile<'a, R> {
    pub async fn execute(&self, user_id: &str) -> anyhow::Result<Option<Profile>> {
        self.repo.find_by_user(user_id).await
    }
}
