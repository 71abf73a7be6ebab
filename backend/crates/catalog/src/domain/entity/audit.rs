//! Audit Columns
//!
//! Every mutable catalog row records who created and last changed it.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audit {
    pub create_date: DateTime<Utc>,
    pub create_by: String,
    pub update_date: DateTime<Utc>,
    pub update_by: String,
}

impl Audit {
    pub fn new(actor: &str) -> Self {
        let now = Utc::now();
        Self {
            create_date: now,
            create_by: actor.to_owned(),
            update_date: now,
            update_by: actor.to_owned(),
        }
    }

    pub fn touch(&mut self, actor: &str) {
        self.update_date = Utc::now();
        self.update_by = actor.to_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_keeps_creation() {
        let mut audit = Audit::new("alice");
        let created = audit.create_date;
        audit.touch("bob");
        assert_eq!(audit.create_by, "alice");
        assert_eq!(audit.create_date, created);
        assert_eq!(audit.update_by, "bob");
        assert!(audit.update_date >= created);
    }
}
