/// A binary image attachment pulled out of a multipart request.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub original_filename: Option<String>,
    pub content_type: Option<String>,
}

/// Builds the retrievable URL for a stored upload, served statically
/// under the `/uploads/` prefix.
pub fn public_upload_url(base: Option<&str>, relative_path: &str) -> String {
    let relative = relative_path.trim_start_matches('/');
    match base {
        Some(origin) => format!("{}/uploads/{}", origin.trim_end_matches('/'), relative),
        None => format!("/uploads/{}", relative),
    }
}

/// Image upload admission policy: rejected payloads must never reach the
/// storage port, so every upload path runs this check before any write.
#[derive(Debug, Clone, Copy)]
pub struct UploadPolicy {
    pub max_bytes: usize,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("only image uploads are accepted")]
    UnsupportedType,
    #[error("upload exceeds the size limit")]
    TooLarge,
}

impl UploadPolicy {
    pub fn check_image(
        &self,
        content_type: Option<&str>,
        original_filename: Option<&str>,
        len: usize,
    ) -> Result<(), UploadError> {
        let is_image = match content_type {
            Some(ct) => ct.starts_with("image/"),
            // Some clients omit the part content type; fall back to the
            // filename extension.
            None => original_filename
                .map(|f| mime_guess::from_path(f).first_or_octet_stream().type_() == mime_guess::mime::IMAGE)
                .unwrap_or(false),
        };
        if !is_image {
            return Err(UploadError::UnsupportedType);
        }
        if len > self.max_bytes {
            return Err(UploadError::TooLarge);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICY: UploadPolicy = UploadPolicy {
        max_bytes: 5 * 1024 * 1024,
    };

    #[test]
    fn accepts_image_under_limit() {
        assert_eq!(
            POLICY.check_image(Some("image/png"), Some("a.png"), 1024),
            Ok(())
        );
    }

    #[test]
    fn rejects_non_image_content_type() {
        assert_eq!(
            POLICY.check_image(Some("application/pdf"), Some("a.pdf"), 1024),
            Err(UploadError::UnsupportedType)
        );
    }

    #[test]
    fn rejects_oversized_payload() {
        assert_eq!(
            POLICY.check_image(Some("image/jpeg"), None, 6 * 1024 * 1024),
            Err(UploadError::TooLarge)
        );
    }

    #[test]
    fn falls_back_to_extension_when_type_missing() {
        assert_eq!(POLICY.check_image(None, Some("photo.jpg"), 10), Ok(()));
        assert_eq!(
            POLICY.check_image(None, Some("notes.txt"), 10),
            Err(UploadError::UnsupportedType)
        );
        assert_eq!(
            POLICY.check_image(None, None, 10),
            Err(UploadError::UnsupportedType)
        );
    }
}
