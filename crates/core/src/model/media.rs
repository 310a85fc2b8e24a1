use serde::{Deserialize, Serialize};

/// Kind of learning material a modal can preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Video,
    Document,
}

impl MediaKind {
    /// Maps a content tag to a kind. Only `"video"` is a video; every other tag is
    /// shown in the document viewer.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("video") {
            Self::Video
        } else {
            Self::Document
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Document => "pdf",
        }
    }

    /// Name of the viewer the placeholder stands in for.
    #[must_use]
    pub fn viewer_label(self) -> &'static str {
        match self {
            Self::Video => "Video Player",
            Self::Document => "PDF Viewer",
        }
    }
}

/// An entry of the media library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub title: String,
}

impl MediaItem {
    #[must_use]
    pub fn new(kind: MediaKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
        }
    }
}
