//! Option Popularity Counters

use serde::Deserialize;

/// Which counter `POST /cake-face-option/{id}/rise` bumps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Counter {
    View,
    Download,
}

impl Counter {
    pub const fn column(&self) -> &'static str {
        match self {
            Counter::View => "view_amount",
            Counter::Download => "download_amount",
        }
    }
}
