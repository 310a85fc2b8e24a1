//! Fixed data the dashboard ships with until a real backend exists.

use maestro_core::model::{MediaItem, MediaKind, RankingEntry};

/// Leaderboard shown on the admin panel, best first.
#[must_use]
pub fn mock_ranking() -> Vec<RankingEntry> {
    vec![
        RankingEntry::new("Kim Ji-soo", 1250, 125),
        RankingEntry::new("Lee Min-ho", 980, 98),
        RankingEntry::new("Park Seo-jun", 850, 85),
        RankingEntry::new("Choi Woo-shik", 720, 72),
        RankingEntry::new("Song Hye-kyo", 650, 65),
    ]
}

/// Content tag and title of every library entry, in display order.
const MEDIA_CATALOG: [(&str, &str); 4] = [
    ("video", "Welcome to the 7th Business Unit"),
    ("video", "Weekly Leadership Briefing"),
    ("pdf", "AP Earning Guide"),
    ("pdf", "Quarterly Goal Handbook"),
];

#[must_use]
pub fn mock_media() -> Vec<MediaItem> {
    MEDIA_CATALOG
        .iter()
        .map(|(tag, title)| MediaItem::new(MediaKind::from_tag(tag), *title))
        .collect()
}
