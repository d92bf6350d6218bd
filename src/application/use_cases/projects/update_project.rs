use crate::application::access::{self, Actor};
use crate::application::ports::project_repository::{ProjectChanges, ProjectRepository};
use crate::application::ports::storage_port::StoragePort;
use crate::application::uploads::{ImagePayload, UploadPolicy, public_upload_url};
use crate::application::use_cases::projects::create_project::ProjectPayload;
use crate::application::validation::{FieldErrors, clean_optional};
use crate::domain::portfolio::project::{Project, split_technologies};

/// Owner-only partial update. Returns `None` for a missing or non-owned
/// project so the caller cannot tell the two apart. Supplied fields merge
/// over the stored row; a new image replaces the stored URL, an absent one
/// retains it; supplied technologies are re-split and replace the list.
pub struct UpdateProject<'a, R, S>
where
    R: ProjectRepository + ?Sized,
    S: StoragePort + ?Sized,
{
    pub repo: &'a R,
    pub storage: &'a S,
    pub policy: UploadPolicy,
    pub public_base_url: Option<String>,
}

impl<'a, R, S> UpdateProject<'a, R, S>
where
    R: ProjectRepository + ?Sized,
    S: StoragePort + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        project_id: i64,
        payload: ProjectPayload,
        image: Option<ImagePayload>,
    ) -> anyhow::Result<Option<Project>> {
        let Some(existing) = access::find_owned_project(self.repo, actor, project_id).await? else {
            return Ok(None);
        };

        let mut errs = FieldErrors::new();
        let title = match payload.title.as_deref() {
            Some(_) => errs.require("title", payload.title.as_deref()),
            None => None,
        };
        let description = match payload.description.as_deref() {
            Some(_) => errs.require("description", payload.description.as_deref()),
            None => None,
        };
        errs.finish()?;

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

        let changes = ProjectChanges {
            title,
            description,
            technologies: payload.technologies.as_deref().map(split_technologies),
            image_url,
            project_url: clean_optional(payload.project_url),
            github_url: clean_optional(payload.github_url),
        };
        self.repo.update(existing.id, &changes).await
    }
}
