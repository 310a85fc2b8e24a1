#![forbid(unsafe_code)]

pub mod error;
pub mod media_service;
pub mod progress_service;
pub mod ranking_service;

pub use error::{MediaServiceError, RankingServiceError};
pub use media_service::MediaService;
pub use progress_service::{DailySubmission, ProgressService, ProgressSnapshot};
pub use ranking_service::{RankingRow, RankingService};

pub use maestro_core::model::ProgressError;
