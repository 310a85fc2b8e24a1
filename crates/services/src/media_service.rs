use std::sync::Arc;

use maestro_core::model::MediaItem;
use storage::repository::MediaRepository;

use crate::error::MediaServiceError;

/// Reads the media library shown on the user dashboard.
#[derive(Clone)]
pub struct MediaService {
    media: Arc<dyn MediaRepository>,
}

impl MediaService {
    #[must_use]
    pub fn new(media: Arc<dyn MediaRepository>) -> Self {
        Self { media }
    }

    /// # Errors
    ///
    /// Returns `MediaServiceError::Storage` if the repository fails.
    pub async fn list_items(&self) -> Result<Vec<MediaItem>, MediaServiceError> {
        let items = self.media.list_media().await?;
        Ok(items)
    }
}
