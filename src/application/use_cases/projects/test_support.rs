use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::project_repository::{
    NewProject, ProjectChanges, ProjectRepository,
};
use crate::application::ports::storage_port::{StoragePort, StoredUpload};
use crate::domain::portfolio::project::Project;

#[derive(Default)]
pub struct MemProjects {
    pub rows: Mutex<Vec<Project>>,
    next_id: Mutex<i64>,
}

impl MemProjects {
    pub async fn seed(&self, user_id: &str, title: &str) -> Project {
        self.insert(&NewProject {
            user_id: user_id.into(),
            title: title.into(),
            description: "desc".into(),
            technologies: vec!["Rust".into()],
            image_url: None,
            project_url: None,
            github_url: None,
        })
        .await
        .unwrap()
    }
}

#[async_trait]
impl ProjectRepository for MemProjects {
    async fn list_active(&self) -> anyhow::Result<Vec<Project>> {
        let mut rows: Vec<Project> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(rows)
    }

    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Project>> {
        let mut rows: Vec<Project> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Project>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, new: &NewProject) -> anyhow::Result<Project> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let now = chrono::Utc::now();
        let project = Project {
            id: *next,
            user_id: new.user_id.clone(),
            title: new.title.clone(),
            description: new.description.clone(),
            technologies: new.technologies.clone(),
            image_url: new.image_url.clone(),
            project_url: new.project_url.clone(),
            github_url: new.github_url.clone(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn update(&self, id: i64, changes: &ProjectChanges) -> anyhow::Result<Option<Project>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(v) = &changes.title {
            row.title = v.clone();
        }
        if let Some(v) = &changes.description {
            row.description = v.clone();
        }
        if let Some(v) = &changes.technologies {
            row.technologies = v.clone();
        }
        if let Some(v) = &changes.image_url {
            row.image_url = Some(v.clone());
        }
        if let Some(v) = &changes.project_url {
            row.project_url = Some(v.clone());
        }
        if let Some(v) = &changes.github_url {
            row.github_url = Some(v.clone());
        }
        row.updated_at = chrono::Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct CountingStorage {
    pub writes: AtomicUsize,
}

#[async_trait]
impl StoragePort for CountingStorage {
    async fn store_image(
        &self,
        original_filename: Option<&str>,
        bytes: &[u8],
    ) -> anyhow::Result<StoredUpload> {
        let n = self.writes.fetch_add(1, Ordering::SeqCst);
        let ext = original_filename
            .and_then(|f| f.rsplit_once('.').map(|(_, e)| e.to_string()))
            .unwrap_or_else(|| "bin".into());
        Ok(StoredUpload {
            filename: format!("img-{n}.{ext}"),
            relative_path: format!("img-{n}.{ext}"),
            size: bytes.len() as i64,
        })
    }
}
