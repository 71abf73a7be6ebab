//! Form Field Parsing
//!
//! Multipart text fields arrive as raw strings. A blank value is treated as
//! absent: on create the default applies, on update the current value stays.

use kernel::id::CakeFaceId;
use kernel::query::{non_blank, parse_flag};

use crate::domain::value_object::item_name::ItemName;
use crate::error::{CatalogError, CatalogResult};

pub(crate) fn required_name(raw: Option<&str>) -> CatalogResult<ItemName> {
    Ok(ItemName::new(raw.unwrap_or_default())?)
}

pub(crate) fn optional_name(raw: Option<&str>) -> CatalogResult<Option<ItemName>> {
    non_blank(raw).map(ItemName::new).transpose().map_err(Into::into)
}

/// `isActive`: `'1'`/`'0'` (or `true`/`false`)
pub(crate) fn flag(raw: Option<&str>) -> CatalogResult<Option<bool>> {
    match non_blank(raw) {
        None => Ok(None),
        Some(value) => parse_flag(value)
            .map(Some)
            .ok_or_else(|| CatalogError::Validation("isActive must be '1' or '0'".to_string())),
    }
}

pub(crate) fn category_id(raw: Option<&str>) -> CatalogResult<Option<i32>> {
    non_blank(raw)
        .map(|value| {
            value
                .parse::<i32>()
                .map_err(|_| CatalogError::Validation(format!("Invalid categoryId: {value}")))
        })
        .transpose()
}

pub(crate) fn cake_face_id(raw: Option<&str>) -> CatalogResult<Option<CakeFaceId>> {
    non_blank(raw)
        .map(|value| {
            value
                .parse::<CakeFaceId>()
                .map_err(|_| CatalogError::Validation(format!("Invalid cakeFaceId: {value}")))
        })
        .transpose()
}
