use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    routing::get,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::uploads::ImagePayload;
use crate::application::use_cases::projects::create_project::{CreateProject, ProjectPayload};
use crate::application::use_cases::projects::delete_project::DeleteProject;
use crate::application::use_cases::projects::list_my_projects::ListMyProjects;
use crate::application::use_cases::projects::list_public_projects::ListPublicProjects;
use crate::application::use_cases::projects::update_project::UpdateProject;
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::default_content::DefaultProject;
use crate::domain::portfolio::project::Project;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            technologies: p.technologies,
            image_url: p.image_url,
            project_url: p.project_url,
            github_url: p.github_url,
        }
    }
}

impl From<&DefaultProject> for ProjectResponse {
    fn from(p: &DefaultProject) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            description: p.description.clone(),
            technologies: p.technologies.clone(),
            image_url: p.image_url.clone(),
            project_url: p.project_url.clone(),
            github_url: p.github_url.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: &'static str,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/me", get(list_my_projects))
        .route(
            "/projects/:id",
            axum::routing::put(update_project).delete(delete_project),
        )
        .with_state(ctx)
}

/// Active projects, most recently updated first, or the configured
/// default content when none exist yet.
#[utoipa::path(get, path = "/api/projects", tag = "Projects", responses(
    (status = 200, body = Vec<ProjectResponse>)
))]
pub async fn list_projects(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let repo = ctx.project_repo();
    let uc = ListPublicProjects {
        repo: repo.as_ref(),
    };
    let projects = uc.execute().await.map_err(ApiError::from)?;
    let items: Vec<ProjectResponse> = if projects.is_empty() {
        ctx.default_content()
            .projects
            .iter()
            .map(ProjectResponse::from)
            .collect()
    } else {
        projects.into_iter().map(ProjectResponse::from).collect()
    };
    Ok(Json(items))
}

/// All of the caller's projects.
#[utoipa::path(get, path = "/api/projects/me", tag = "Projects", responses(
    (status = 200, body = Vec<ProjectResponse>)
))]
pub async fn list_my_projects(
    State(ctx): State<AppContext>,
    auth: AuthUser,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let repo = ctx.project_repo();
    let uc = ListMyProjects {
        repo: repo.as_ref(),
    };
    let projects = uc.execute(auth.id()).await.map_err(ApiError::from)?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

/// Multipart create. Text fields: title, description, technologies
/// (comma-delimited), projectUrl, githubUrl. Optional binary field
/// `image`.
#[utoipa::path(post, path = "/api/projects", tag = "Projects",
    responses(
        (status = 200, body = ProjectResponse),
        (status = 400, description = "Validation failure with per-field detail")
    ))]
pub async fn create_project(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    multipart: Multipart,
) -> Result<Json<ProjectResponse>, ApiError> {
    let (payload, image) = read_project_form(multipart).await?;

    let repo = ctx.project_repo();
    let storage = ctx.storage_port();
    let uc = CreateProject {
        repo: repo.as_ref(),
        storage: storage.as_ref(),
        policy: ctx.upload_policy(),
        public_base_url: ctx.cfg.public_base_url.clone(),
    };
    let project = uc
        .execute(auth.id(), payload, image)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(ProjectResponse::from(project)))
}

/// Owner-only partial update. A missing project and someone else's
/// project are both reported as not found.
#[utoipa::path(put, path = "/api/projects/{id}", tag = "Projects",
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 200, body = ProjectResponse),
        (status = 404, description = "Missing or not owned")
    ))]
pub async fn update_project(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<Json<ProjectResponse>, ApiError> {
    let (payload, image) = read_project_form(multipart).await?;

    let repo = ctx.project_repo();
    let storage = ctx.storage_port();
    let uc = UpdateProject {
        repo: repo.as_ref(),
        storage: storage.as_ref(),
        policy: ctx.upload_policy(),
        public_base_url: ctx.cfg.public_base_url.clone(),
    };
    let project = uc
        .execute(&auth.actor(), id, payload, image)
        .await
        .map_err(ApiError::from)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(ProjectResponse::from(project)))
}

/// Owner-only hard delete.
#[utoipa::path(delete, path = "/api/projects/{id}", tag = "Projects",
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 200, body = DeleteResponse),
        (status = 404, description = "Missing or not owned")
    ))]
pub async fn delete_project(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let repo = ctx.project_repo();
    let uc = DeleteProject {
        repo: repo.as_ref(),
    };
    let deleted = uc
        .execute(&auth.actor(), id)
        .await
        .map_err(ApiError::from)?;
    if !deleted {
        return Err(ApiError::NotFound);
    }
    Ok(Json(DeleteResponse {
        message: "Project deleted successfully",
    }))
}

async fn read_project_form(
    mut multipart: Multipart,
) -> Result<(ProjectPayload, Option<ImagePayload>), ApiError> {
    let mut payload = ProjectPayload::default();
    let mut image: Option<ImagePayload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(ApiError::from_multipart)?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("title") => payload.title = Some(read_text(field).await?),
            Some("description") => payload.description = Some(read_text(field).await?),
            Some("technologies") => payload.technologies = Some(read_text(field).await?),
            Some("projectUrl") => payload.project_url = Some(read_text(field).await?),
            Some("githubUrl") => payload.github_url = Some(read_text(field).await?),
            Some("image") => {
                let original_filename = field.file_name().map(|s| s.to_string());
                let content_type = field.content_type().map(|s| s.to_string());
                let bytes = field.bytes().await.map_err(ApiError::from_multipart)?;
                // An empty file part means the form had no image selected.
                if !bytes.is_empty() {
                    image = Some(ImagePayload {
                        bytes: bytes.to_vec(),
                        original_filename,
                        content_type,
                    });
                }
            }
            _ => { /* ignore additional fields */ }
        }
    }

    Ok((payload, image))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field.text().await.map_err(ApiError::from_multipart)
}
