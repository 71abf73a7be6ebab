//! Banner Entity
//!
//! Banners form one ordered carousel. Indices are contiguous from 0; the
//! repository keeps them that way across inserts, swaps and deletes.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: i32,
    pub path: String,
    pub index: i32,
    pub create_time: DateTime<Utc>,
}
