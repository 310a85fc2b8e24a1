mod input;
mod media;
mod progress;
mod ranking;

pub use input::parse_ap_input;
pub use media::{MediaItem, MediaKind};
pub use progress::{ProgressError, ProgressState, SEED_HISTORY, SEED_TARGET_AP};
pub use ranking::RankingEntry;
