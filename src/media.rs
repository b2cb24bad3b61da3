//! Placeholder image and video analysis.
//!
//! No decoding happens here: uploads get a fixed score and advisory text.

use serde::{Deserialize, Serialize};

/// Kind of uploaded media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn score(&self) -> u8 {
        match self {
            MediaKind::Image => 82,
            MediaKind::Video => 78,
        }
    }

    pub fn analysis(&self) -> &'static str {
        match self {
            MediaKind::Image => "Prototype image analysis complete.",
            MediaKind::Video => "Prototype video analysis complete.",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// Response for a media upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAnalysis {
    /// Client-supplied file name, echoed back
    pub filename: Option<String>,
    pub analysis: String,
    pub score: u8,
}

impl MediaAnalysis {
    pub fn stub(kind: MediaKind, filename: Option<String>) -> Self {
        Self {
            filename,
            analysis: kind.analysis().to_string(),
            score: kind.score(),
        }
    }
}
