use crate::application::ports::project_repository::ProjectRepository;
use crate::domain::portfolio::project::Project;

/// Who is performing the request. Presentation builds this from the
/// validated identity claims; this module intentionally avoids depending
/// on presentation types.
#[derive(Debug, Clone)]
pub enum Actor {
    User(String),
    Public,
}

impl Actor {
    pub fn owns(&self, owner_id: &str) -> bool {
        matches!(self, Actor::User(id) if id == owner_id)
    }
}

/// Looks up a project and applies the ownership capability check in one
/// place. A missing row and a row owned by someone else are
/// indistinguishable to the caller: both come back as `None`.
pub async fn find_owned_project<R>(
    repo: &R,
    actor: &Actor,
    project_id: i64,
) -> anyhow::Result<Option<Project>>
where
    R: ProjectRepository + ?Sized,
{
    let project = repo.find_by_id(project_id).await?;
    Ok(project.filter(|p| actor.owns(&p.user_id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_actor_owns_nothing() {
        assert!(!Actor::Public.owns("u1"));
    }

    #[test]
    fn user_actor_owns_only_its_own_rows() {
        let actor = Actor::User("u1".into());
        assert!(actor.owns("u1"));
        assert!(!actor.owns("u2"));
    }
}
