//! List Sort Columns
//!
//! `sortBy` is matched against a per-resource allow-list and resolved to a
//! fixed column name, so it can be spliced into `ORDER BY` safely.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    CreateDate,
    ViewAmount,
    DownloadAmount,
}

impl SortField {
    /// Sortable by name or creation date
    pub const BASIC: &'static [SortField] = &[SortField::Name, SortField::CreateDate];

    /// Options can also be ranked by their counters
    pub const WITH_COUNTERS: &'static [SortField] = &[
        SortField::Name,
        SortField::CreateDate,
        SortField::ViewAmount,
        SortField::DownloadAmount,
    ];

    /// Anything outside `allowed` falls back to `Name`
    pub fn parse(raw: Option<&str>, allowed: &[SortField]) -> Self {
        let field = match raw.map(str::trim) {
            Some("name") => SortField::Name,
            Some("createDate") => SortField::CreateDate,
            Some("viewAmount") => SortField::ViewAmount,
            Some("downloadAmount") => SortField::DownloadAmount,
            _ => return SortField::Name,
        };
        if allowed.contains(&field) {
            field
        } else {
            SortField::Name
        }
    }

    pub const fn column(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::CreateDate => "create_date",
            SortField::ViewAmount => "view_amount",
            SortField::DownloadAmount => "download_amount",
        }
    }
}
