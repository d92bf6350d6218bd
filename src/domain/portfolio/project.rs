#[derive(Debug, Clone)]
pub struct Project {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Splits a comma-delimited technologies string into an ordered list,
/// trimming whitespace and dropping empty items.
pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(split_technologies("Go, Rust"), vec!["Go", "Rust"]);
    }

    #[test]
    fn drops_empty_items_and_keeps_order() {
        assert_eq!(
            split_technologies(" React ,, Node.js , "),
            vec!["React", "Node.js"]
        );
        assert!(split_technologies("").is_empty());
    }
}
