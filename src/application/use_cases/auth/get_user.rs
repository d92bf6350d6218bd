use crate::application::ports::user_repository::UserRepository;
use crate::domain::portfolio::user::User;

pub struct GetUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> GetUser<'a, R> {
    pub async fn execute(&self, id: &str) -> anyhow::Result<Option<User>> {
        self.repo.find_by_id(id).await
    }
}
