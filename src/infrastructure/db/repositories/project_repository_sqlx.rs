use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::project_repository::{
    NewProject, ProjectChanges, ProjectRepository,
};
use crate::domain::portfolio::project::Project;
use crate::infrastructure::db::PgPool;

pub struct SqlxProjectRepository {
    pub pool: PgPool,
}

impl SqlxProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PROJECT_COLUMNS: &str = "id, user_id, title, description, technologies, image_url, \
                               project_url, github_url, is_active, created_at, updated_at";

fn map_project(row: &sqlx::postgres::PgRow) -> Project {
    Project {
        id: row.get("id"),
        user_id: row.get("user_id"),
        title: row.get("title"),
        description: row.get("description"),
        technologies: row.get("technologies"),
        image_url: row.get("image_url"),
        project_url: row.get("project_url"),
        github_url: row.get("github_url"),
        is_active: row.get("is_active"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepository {
    async fn list_active(&self) -> anyhow::Result<Vec<Project>> {
        let rows = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE is_active \
             ORDER BY updated_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_project).collect())
    }

    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Project>> {
        let rows = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE user_id = $1 \
             ORDER BY updated_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_project).collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Project>> {
        let row = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_project))
    }

    async fn insert(&self, new: &NewProject) -> anyhow::Result<Project> {
        let row = sqlx::query(&format!(
            "INSERT INTO projects \
                 (user_id, title, description, technologies, image_url, project_url, github_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(&new.user_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.technologies)
        .bind(&new.image_url)
        .bind(&new.project_url)
        .bind(&new.github_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_project(&row))
    }

    async fn update(&self, id: i64, changes: &ProjectChanges) -> anyhow::Result<Option<Project>> {
        // COALESCE keeps the stored value for omitted fields (merge policy).
        let row = sqlx::query(&format!(
            "UPDATE projects SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 technologies = COALESCE($4, technologies), \
                 image_url = COALESCE($5, image_url), \
                 project_url = COALESCE($6, project_url), \
                 github_url = COALESCE($7, github_url), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.technologies)
        .bind(&changes.image_url)
        .bind(&changes.project_url)
        .bind(&changes.github_url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_project))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
