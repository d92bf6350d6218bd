use crate::application::ports::project_repository::ProjectRepository;
use crate::domain::portfolio::project::Project;

pub struct ListMyProjects<'a, R: ProjectRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProjectRepository + ?Sized> ListMyProjects<'a, R> {
    pub async fn execute(&self, user_id: &str) -> anyhow::Result<Vec<Project>> {
        self.repo.list_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::project_repository::ProjectChanges;
    use crate::application::use_cases::projects::test_support::MemProjects;

    #[tokio::test]
    async fn lists_most_recently_updated_first() {
        let repo = MemProjects::default();
        let older = repo.seed("u1", "Older").await;
        repo.seed("u1", "Newer").await;
        repo.seed("u2", "Other owner").await;

        let touched = ProjectChanges {
            description: Some("refreshed".into()),
            ..Default::default()
        };
        repo.update(older.id, &touched).await.unwrap();

        let uc = ListMyProjects { repo: &repo };
        let projects = uc.execute("u1").await.unwrap();
        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Older", "Newer"]);
    }
}
