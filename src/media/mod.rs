//! Poster image persistence.
//!
//! Object storage is an external collaborator; this store is its filesystem
//! face. Files land under `<root>/uploads/shows/` and are served back at
//! `<base_url>/uploads/shows/<file>` by the static-file route.

use std::path::PathBuf;

use uuid::Uuid;

use crate::utils::error::AppError;

const SHOW_UPLOAD_DIR: &str = "uploads/shows";

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    base_url: String,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    /// Validate that `bytes` decodes as an image, persist it under a
    /// collision-free name derived from the show title, and return the
    /// public URI.
    pub async fn store_show_image(&self, title: &str, bytes: &[u8]) -> Result<String, AppError> {
        let format = image::guess_format(bytes)
            .map_err(|_| AppError::field_validation("image", "payload is not a known image format"))?;
        image::load_from_memory(bytes)
            .map_err(|_| AppError::field_validation("image", "payload is not a decodable image"))?;

        let extension = format.extensions_str().first().copied().unwrap_or("img");
        let filename = format!("{}-{}.{}", slugify(title), Uuid::new_v4(), extension);

        let dir = self.root.join(SHOW_UPLOAD_DIR);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("media store: {e}")))?;
        tokio::fs::write(dir.join(&filename), bytes)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("media store: {e}")))?;

        Ok(format!("{}/{}/{}", self.base_url, SHOW_UPLOAD_DIR, filename))
    }
}

fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut last_was_dash = true;

    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        slug.push_str("show");
    }

    slug
}
