use crate::application::ports::project_repository::{NewProject, ProjectRepository};
use crate::application::ports::storage_port::StoragePort;
use crate::application::uploads::{ImagePayload, UploadPolicy, public_upload_url};
use crate::application::validation::{FieldErrors, clean_optional};
use crate::domain::portfolio::project::{Project, split_technologies};

#[derive(Debug, Clone, Default)]
pub struct ProjectPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Comma-delimited, split and trimmed into an ordered list.
    pub technologies: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
}

pub struct CreateProject<'a, R, S>
where
    R: ProjectRepository + ?Sized,
    S: StoragePort + ?Sized,
{
    pub repo: &'a R,
    pub storage: &'a S,
    pub policy: UploadPolicy,
    pub public_base_url: Option<String>,
}

impl<'a, R, S> CreateProject<'a, R, S>
where
    R: ProjectRepository + ?Sized,
    S: StoragePort + ?Sized,
{
    pub async fn execute(
        &self,
        user_id: &str,
        payload: ProjectPayload,
        image: Option<ImagePayload>,
    ) -> anyhow::Result<Project> {
        let mut errs = FieldErrors::new();
        let title = errs.require("title", payload.title.as_deref());
        let description = errs.require("description", payload.description.as_deref());
        errs.finish()?;

        // Admission check runs before the file write; the file write runs
        // before the row insert.
        let image_url = match image {
            Some(img) => {
                self.policy.check_image(
                    img.content_type.as_deref(),
                    img.original_filename.as_deref(),
                    img.bytes.len(),
                )?;
                let stored = self
                    .storage
                    .store_image(img.original_filename.as_deref(), &img.bytes)
                    .await?;
                Some(public_upload_url(
                    self.public_base_url.as_deref(),
                    &stored.relative_path,
                ))
            }
            None => None,
        };

        let new = NewProject {
            user_id: user_id.to_string(),
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            technologies: payload
                .technologies
                .as_deref()
                .map(split_technologies)
                .unwrap_or_default(),
            image_url,
            project_url: clean_optional(payload.project_url),
            github_url: clean_optional(payload.github_url),
        };
        self.repo.insert(&new).await
    }
}
