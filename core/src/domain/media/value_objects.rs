use std::{path::Path, time::Duration};

use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

/// Lifetime of a presigned upload URL.
pub const UPLOAD_URL_TTL: Duration = Duration::from_secs(5 * 60);

const UPLOAD_PREFIX: &str = "meals";

#[derive(Debug, Clone)]
pub struct CreateUploadUrlInput {
    pub content_type: String,
    pub filename: String,
}

impl CreateUploadUrlInput {
    /// `meals/<uuid>.<ext>`, keeping the extension of the client's file name.
    pub fn object_key(&self) -> String {
        let extension = Path::new(&self.filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        format!("{UPLOAD_PREFIX}/{}.{extension}", Uuid::new_v4())
    }
}

/// Normalizes a requested object path; parent segments and empty paths are rejected.
pub fn sanitize_object_path(path: &str) -> Result<String, CoreError> {
    let trimmed = path.trim_start_matches('/');

    if trimmed.is_empty() || trimmed.split('/').any(|segment| segment == "..") {
        return Err(CoreError::invalid_field("path", "The image path is invalid."));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_keeps_extension() {
        let input = CreateUploadUrlInput {
            content_type: "image/png".to_string(),
            filename: "Breakfast Bowl.PNG".to_string(),
        };

        let key = input.object_key();
        assert!(key.starts_with("meals/"));
        assert!(key.ends_with(".png"));
        let id = key.trim_start_matches("meals/").trim_end_matches(".png");
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn test_object_key_without_extension() {
        let input = CreateUploadUrlInput {
            content_type: "image/jpeg".to_string(),
            filename: "photo".to_string(),
        };

        assert!(input.object_key().ends_with('.'));
    }

    #[test]
    fn test_sanitize_object_path() {
        assert_eq!(
            sanitize_object_path("/meals/a.png").unwrap(),
            "meals/a.png".to_string()
        );
        assert!(sanitize_object_path("").is_err());
        assert!(sanitize_object_path("meals/../secrets").is_err());
    }
}
