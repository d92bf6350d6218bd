use crate::application::ports::project_repository::ProjectRepository;
use crate::domain::portfolio::project::Project;

/// Public read path: active projects only. The caller substitutes the
/// configured default content when the list is empty.
pub struct ListPublicProjects<'a, R: ProjectRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProjectRepository + ?Sized> ListPublicProjects<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Project>> {
        self.repo.list_active().await
    }
}
