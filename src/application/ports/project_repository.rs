use async_trait::async_trait;

use crate::domain::portfolio::project::Project;

#[derive(Debug, Clone)]
pub struct NewProject {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
}

/// Partial update: `None` means "field omitted, keep the stored value".
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Active projects, most recently updated first, for the public read path.
    async fn list_active(&self) -> anyhow::Result<Vec<Project>>;
    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Project>>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Project>>;
    async fn insert(&self, new: &NewProject) -> anyhow::Result<Project>;
    async fn update(&self, id: i64, changes: &ProjectChanges) -> anyhow::Result<Option<Project>>;
    /// Hard delete. Returns false when no row was removed.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
