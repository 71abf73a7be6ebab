//! List Inputs
//!
//! Raw query values for the catalog lists. Invalid values never fail a
//! list request: bad paging falls back to the defaults and a malformed
//! parent id simply does not filter.

use kernel::id::CakeFaceId;
use kernel::query::{ListQuery, non_blank};

use crate::domain::repository::{CakeFaceFilter, CakeFaceOptionFilter, CatalogFilter};
use crate::domain::value_object::sort_field::SortField;

#[derive(Debug, Clone, Default)]
pub struct ListInput {
    pub common: ListQuery,
    pub name: Option<String>,
}

impl ListInput {
    pub fn into_filter(self, sortable: &[SortField]) -> CatalogFilter {
        CatalogFilter {
            name: non_blank(self.name.as_deref()).map(str::to_owned),
            active: self.common.active(),
            sort_by: SortField::parse(self.common.sort_by(), sortable),
            sort: self.common.sort(),
            page: self.common.page(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CakeFaceListInput {
    pub base: ListInput,
    pub category_id: Option<String>,
}

impl From<CakeFaceListInput> for CakeFaceFilter {
    fn from(input: CakeFaceListInput) -> Self {
        Self {
            category_id: non_blank(input.category_id.as_deref()).and_then(|s| s.parse().ok()),
            common: input.base.into_filter(SortField::BASIC),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CakeFaceOptionListInput {
    pub base: ListInput,
    pub cake_face_id: Option<String>,
}

impl From<CakeFaceOptionListInput> for CakeFaceOptionFilter {
    fn from(input: CakeFaceOptionListInput) -> Self {
        Self {
            cake_face_id: non_blank(input.cake_face_id.as_deref())
                .and_then(|s| s.parse::<CakeFaceId>().ok()),
            common: input.base.into_filter(SortField::WITH_COUNTERS),
        }
    }
}
