//! API DTOs (Data Transfer Objects)
//!
//! Every stored media path leaves the API as an absolute URL.

use chrono::{DateTime, Utc};
use kernel::query::ListQuery;
use platform::upload::UploadForm;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::CatalogConfig;
use crate::application::{
    CakeFaceForm, CakeFaceListInput, CakeFaceOptionForm, CakeFaceOptionListInput, CategoryForm,
    ListInput, LogoForm, SampleAssetForm,
};
use crate::domain::entity::audit::Audit;
use crate::domain::entity::{
    banner::Banner, cake_face::CakeFace, cake_face_option::CakeFaceOption, category::Category,
    sample_asset::SampleAsset, setting::Setting,
};
use crate::domain::value_object::banner_move::BannerMove;
use crate::domain::value_object::counter::Counter;

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResponse {
    pub create_date: DateTime<Utc>,
    pub create_by: String,
    pub update_date: DateTime<Utc>,
    pub update_by: String,
}

impl From<Audit> for AuditResponse {
    fn from(audit: Audit) -> Self {
        Self {
            create_date: audit.create_date,
            create_by: audit.create_by,
            update_date: audit.update_date,
            update_by: audit.update_by,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub thumbnail: String,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditResponse,
}

impl CategoryResponse {
    pub fn new(category: Category, config: &CatalogConfig) -> Self {
        Self {
            id: category.id,
            name: category.name.into_string(),
            thumbnail: config.url(&category.thumbnail),
            is_active: category.is_active,
            audit: category.audit.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeFaceResponse {
    pub id: Uuid,
    pub name: String,
    pub detail: String,
    pub content: String,
    pub thumbnail: String,
    pub config_file_path: String,
    pub is_active: bool,
    pub category_id: Option<i32>,
    #[serde(flatten)]
    pub audit: AuditResponse,
}

impl CakeFaceResponse {
    pub fn new(cake_face: CakeFace, config: &CatalogConfig) -> Self {
        Self {
            id: cake_face.id.into_uuid(),
            name: cake_face.name.into_string(),
            detail: cake_face.detail,
            content: cake_face.content,
            thumbnail: config.url(&cake_face.thumbnail),
            config_file_path: config.url(&cake_face.config_file_path),
            is_active: cake_face.is_active,
            category_id: cake_face.category_id,
            audit: cake_face.audit.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeFaceOptionResponse {
    pub id: Uuid,
    pub name: String,
    pub detail: String,
    pub image: String,
    pub is_active: bool,
    pub view_amount: i64,
    pub download_amount: i64,
    pub cake_face_id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
}

impl CakeFaceOptionResponse {
    pub fn new(option: CakeFaceOption, config: &CatalogConfig) -> Self {
        Self {
            id: option.id.into_uuid(),
            name: option.name.into_string(),
            detail: option.detail,
            image: config.url(&option.image),
            is_active: option.is_active,
            view_amount: option.view_amount,
            download_amount: option.download_amount,
            cake_face_id: option.cake_face_id.into_uuid(),
            audit: option.audit.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerResponse {
    pub id: i32,
    pub path: String,
    pub index: i32,
    pub create_time: DateTime<Utc>,
}

impl BannerResponse {
    pub fn new(banner: Banner, config: &CatalogConfig) -> Self {
        Self {
            id: banner.id,
            path: config.url(&banner.path),
            index: banner.index,
            create_time: banner.create_time,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleAssetResponse {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditResponse,
}

impl SampleAssetResponse {
    pub fn new(sample: SampleAsset, config: &CatalogConfig) -> Self {
        Self {
            id: sample.id,
            name: sample.name.into_string(),
            image: config.url(&sample.image),
            is_active: sample.is_active,
            audit: sample.audit.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingResponse {
    pub id: i32,
    pub name: String,
    /// Absolute URL, or the raw text for `seo_content`
    pub value: String,
    pub update_date: DateTime<Utc>,
    pub update_by: String,
}

impl SettingResponse {
    pub fn new(setting: Setting, config: &CatalogConfig) -> Self {
        let value = if setting.holds_media_path() {
            config.url(&setting.value)
        } else {
            setting.value
        };
        Self {
            id: setting.id,
            name: setting.name,
            value,
            update_date: setting.update_date,
            update_by: setting.update_by,
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

/// `PUT /banners/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct BannerMoveRequest {
    pub action: BannerMove,
}

/// `POST /cake-face-option/{id}/rise`
#[derive(Debug, Clone, Deserialize)]
pub struct RiseRequest {
    #[serde(rename = "type")]
    pub counter: Counter,
}

/// `POST /settings/seo-content`
#[derive(Debug, Clone, Deserialize)]
pub struct SeoContentRequest {
    pub value: String,
}

/// Query string of the category and sample asset lists
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogListQuery {
    #[serde(flatten)]
    pub common: ListQuery,
    pub name: Option<String>,
}

impl From<CatalogListQuery> for ListInput {
    fn from(query: CatalogListQuery) -> Self {
        Self {
            common: query.common,
            name: query.name,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeFaceListQuery {
    #[serde(flatten)]
    pub common: ListQuery,
    pub name: Option<String>,
    pub category_id: Option<String>,
}

impl From<CakeFaceListQuery> for CakeFaceListInput {
    fn from(query: CakeFaceListQuery) -> Self {
        Self {
            base: ListInput {
                common: query.common,
                name: query.name,
            },
            category_id: query.category_id,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeFaceOptionListQuery {
    #[serde(flatten)]
    pub common: ListQuery,
    pub name: Option<String>,
    pub cake_face_id: Option<String>,
}

impl From<CakeFaceOptionListQuery> for CakeFaceOptionListInput {
    fn from(query: CakeFaceOptionListQuery) -> Self {
        Self {
            base: ListInput {
                common: query.common,
                name: query.name,
            },
            cake_face_id: query.cake_face_id,
        }
    }
}

// ============================================================================
// Multipart forms
// ============================================================================

impl From<UploadForm> for CategoryForm {
    fn from(mut form: UploadForm) -> Self {
        Self {
            name: form.take_text("name"),
            is_active: form.take_text("isActive"),
            thumbnail: form.take_file("thumbnail"),
        }
    }
}

impl From<UploadForm> for CakeFaceForm {
    fn from(mut form: UploadForm) -> Self {
        Self {
            name: form.take_text("name"),
            detail: form.take_text("detail"),
            content: form.take_text("content"),
            category_id: form.take_text("categoryId"),
            is_active: form.take_text("isActive"),
            thumbnail: form.take_file("thumbnail"),
            config_file: form.take_file("configFile"),
        }
    }
}

impl From<UploadForm> for CakeFaceOptionForm {
    fn from(mut form: UploadForm) -> Self {
        Self {
            name: form.take_text("name"),
            detail: form.take_text("detail"),
            cake_face_id: form.take_text("cakeFaceId"),
            is_active: form.take_text("isActive"),
            image: form.take_file("image"),
        }
    }
}

impl From<UploadForm> for SampleAssetForm {
    fn from(mut form: UploadForm) -> Self {
        Self {
            name: form.take_text("name"),
            is_active: form.take_text("isActive"),
            image: form.take_file("image"),
        }
    }
}

impl From<UploadForm> for LogoForm {
    fn from(mut form: UploadForm) -> Self {
        Self {
            name: form.take_text("name"),
            image: form.take_file("image"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::logo_kind::SEO_CONTENT;

    fn config() -> CatalogConfig {
        CatalogConfig {
            media: platform::media::MediaStore::new("public/image"),
            api_host: "http://api.test/".to_string(),
        }
    }

    fn setting(name: &str, value: &str) -> Setting {
        Setting {
            id: 1,
            name: name.to_owned(),
            value: value.to_owned(),
            update_date: Utc::now(),
            update_by: "admin".to_owned(),
        }
    }

    #[test]
    fn test_setting_values_become_urls_except_seo() {
        let config = config();
        let logo = SettingResponse::new(setting("small_logo", "public/image/logo/a.png"), &config);
        assert_eq!(logo.value, "http://api.test/public/image/logo/a.png");

        let seo = SettingResponse::new(setting(SEO_CONTENT, "<meta name=x>"), &config);
        assert_eq!(seo.value, "<meta name=x>");
    }

    #[test]
    fn test_banner_response_shape() {
        let banner = Banner {
            id: 3,
            path: "public\\image\\banner\\bn_a.png".to_owned(),
            index: 0,
            create_time: Utc::now(),
        };
        let json = serde_json::to_value(BannerResponse::new(banner, &config())).unwrap();
        assert_eq!(json["path"], "http://api.test/public/image/banner/bn_a.png");
        assert_eq!(json["index"], 0);
        assert!(json.get("createTime").is_some());
    }

    #[test]
    fn test_audit_fields_are_flattened() {
        let category = Category {
            id: 1,
            name: crate::domain::value_object::item_name::ItemName::from_db("Roses"),
            thumbnail: "public/image/cake-face-category/default.png".to_owned(),
            is_active: true,
            audit: Audit::new("admin"),
        };
        let json = serde_json::to_value(CategoryResponse::new(category, &config())).unwrap();
        assert_eq!(json["createBy"], "admin");
        assert_eq!(json["isActive"], true);
    }

    #[test]
    fn test_rise_request_uses_type_key() {
        let req: RiseRequest =
            serde_json::from_value(serde_json::json!({"type": "download"})).unwrap();
        assert_eq!(req.counter, Counter::Download);
    }
}
