use std::sync::Arc;

use crate::application::ports::profile_repository::ProfileRepository;
use crate::application::ports::project_repository::ProjectRepository;
use crate::application::ports::storage_port::StoragePort;
use crate::application::ports::user_repository::UserRepository;
use crate::application::uploads::UploadPolicy;
use crate::bootstrap::config::Config;
use crate::bootstrap::default_content::DefaultContent;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    default_content: Arc<DefaultContent>,
    services: Arc<AppServices>,
}

pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    project_repo: Arc<dyn ProjectRepository>,
    storage_port: Arc<dyn StoragePort>,
}

impl AppServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        project_repo: Arc<dyn ProjectRepository>,
        storage_port: Arc<dyn StoragePort>,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            project_repo,
            storage_port,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, default_content: DefaultContent, services: AppServices) -> Self {
        Self {
            cfg,
            default_content: Arc::new(default_content),
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn profile_repo(&self) -> Arc<dyn ProfileRepository> {
        self.services.profile_repo.clone()
    }

    pub fn project_repo(&self) -> Arc<dyn ProjectRepository> {
        self.services.project_repo.clone()
    }

    pub fn storage_port(&self) -> Arc<dyn StoragePort> {
        self.services.storage_port.clone()
    }

    pub fn default_content(&self) -> &DefaultContent {
        &self.default_content
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy {
            max_bytes: self.cfg.upload_max_bytes,
        }
    }
}
