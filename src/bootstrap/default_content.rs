use serde::{Deserialize, Serialize};

/// Fallback payloads for the public read paths: served until the owner
/// has written real rows. Loaded once at startup from
/// `DEFAULT_CONTENT_PATH` when set, otherwise the built-in sample below.
/// Both public reads draw from this single document; there are no
/// per-route sample literals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultContent {
    pub profile: DefaultProfile,
    pub projects: Vec<DefaultProject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultProfile {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultProject {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

impl DefaultContent {
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p).map_err(|err| {
                    anyhow::anyhow!("failed to read default content {p}: {err}")
                })?;
                let content: Self = serde_json::from_str(&raw)
                    .map_err(|err| anyhow::anyhow!("invalid default content {p}: {err}"))?;
                Ok(content)
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn builtin() -> Self {
        Self {
            profile: DefaultProfile {
                id: 0,
                name: "John Developer".into(),
                title: "Full Stack Developer passionate about building useful software".into(),
                email: None,
                phone: None,
                location: None,
                profile_image_url: None,
            },
            projects: vec![
                DefaultProject {
                    id: 1,
                    title: "E-commerce Dashboard".into(),
                    description: "Admin dashboard with real-time analytics, inventory \
                                  management, and customer insights."
                        .into(),
                    technologies: vec!["React".into(), "Node.js".into(), "PostgreSQL".into()],
                    image_url: None,
                    project_url: None,
                    github_url: None,
                },
                DefaultProject {
                    id: 2,
                    title: "Fitness Tracking App".into(),
                    description: "Cross-platform mobile app for workout tracking, nutrition \
                                  logging, and progress visualization."
                        .into(),
                    technologies: vec!["React Native".into(), "Firebase".into()],
                    image_url: None,
                    project_url: None,
                    github_url: None,
                },
                DefaultProject {
                    id: 3,
                    title: "Analytics Platform".into(),
                    description: "Real-time analytics with interactive charts, custom \
                                  reports, and data export."
                        .into(),
                    technologies: vec!["Vue.js".into(), "Python".into(), "D3.js".into()],
                    image_url: None,
                    project_url: None,
                    github_url: None,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_has_profile_and_projects() {
        let content = DefaultContent::builtin();
        assert!(!content.profile.name.is_empty());
        assert!(!content.projects.is_empty());
    }

    #[test]
    fn loads_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"profile":{{"name":"Jane","title":"Engineer"}},
                "projects":[{{"title":"X","description":"Y","technologies":["Go"]}}]}}"#
        )
        .unwrap();
        let content =
            DefaultContent::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(content.profile.name, "Jane");
        assert_eq!(content.projects[0].technologies, vec!["Go"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(DefaultContent::load(Some("/nonexistent/content.json")).is_err());
    }
}
