use serde::Serialize;

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validation failure carrying per-field detail. Surfaces through anyhow
/// and is downcast at the HTTP boundary into a 400 with the field list.
#[derive(Debug, thiserror::Error)]
#[error("validation failed")]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

/// Collects field errors across a payload so a single response can
/// enumerate everything that failed.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Requires a non-empty value after trimming; returns the trimmed
    /// value when present.
    pub fn require(&mut self, field: &'static str, value: Option<&str>) -> Option<String> {
        match value.map(|v| v.trim()).filter(|v| !v.is_empty()) {
            Some(v) => Some(v.to_string()),
            None => {
                self.push(field, "is required");
                None
            }
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

/// Normalizes an optional free-text field: trims, and treats blank as
/// absent.
pub fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_optional_drops_blank_values() {
        assert_eq!(clean_optional(Some("  ".into())), None);
        assert_eq!(clean_optional(Some(" x ".into())), Some("x".into()));
        assert_eq!(clean_optional(None), None);
    }

    #[test]
    fn enumerates_every_missing_field() {
        let mut errs = FieldErrors::new();
        assert!(errs.require("name", None).is_none());
        assert!(errs.require("title", Some("   ")).is_none());
        let err = errs.finish().unwrap_err();
        let fields: Vec<_> = err.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "title"]);
    }

    #[test]
    fn trims_accepted_values() {
        let mut errs = FieldErrors::new();
        let v = errs.require("title", Some("  Developer "));
        assert_eq!(v.as_deref(), Some("Developer"));
        assert!(errs.finish().is_ok());
    }
}
