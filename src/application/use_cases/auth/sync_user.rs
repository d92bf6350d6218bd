use crate::application::ports::user_repository::{UpsertUser, UserRepository};
use crate::domain::portfolio::user::User;

/// Creates or refreshes the identity row from the provider's claims. Runs
/// on every successful authentication; keyed by the provider subject.
pub struct SyncUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> SyncUser<'a, R> {
    pub async fn execute(&self, claims: &UpsertUser) -> anyhow::Result<User> {
        self.repo.upsert_user(claims).await
    }
}
