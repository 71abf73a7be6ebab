//! Banner Reordering Direction

use serde::Deserialize;

/// `up` moves a banner one slot towards index 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerMove {
    Up,
    Down,
}

impl BannerMove {
    /// Index of the banner to swap with, `None` when moving off the front.
    ///
    /// Moving past the back is detected by the lookup finding no banner.
    pub fn neighbour_of(&self, index: i32) -> Option<i32> {
        match self {
            BannerMove::Up => index.checked_sub(1).filter(|i| *i >= 0),
            BannerMove::Down => index.checked_add(1),
        }
    }
}
