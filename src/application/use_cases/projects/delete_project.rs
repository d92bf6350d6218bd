use crate::application::access::{self, Actor};
use crate::application::ports::project_repository::ProjectRepository;

/// Owner-only hard delete. `false` covers both a missing project and one
/// owned by someone else.
pub struct DeleteProject<'a, R: ProjectRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProjectRepository + ?Sized> DeleteProject<'a, R> {
    pub async fn execute(&self, actor: &Actor, project_id: i64) -> anyhow::Result<bool> {
        let Some(project) = access::find_owned_project(self.repo, actor, project_id).await? else {
            return Ok(false);
        };
        self.repo.delete(project.id).await
    }
}
