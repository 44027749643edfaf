use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PhotoDto {
    pub id: i32,
    pub storage_key: String,
    pub filename: String,
    pub caption: Option<String>,
    pub uploaded_at: NaiveDateTime,
    /// Approved owner ID of the uploader
    pub uploaded_by: i32,
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletePhotoDto {
    pub storage_key: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ViewUrlsRequestDto {
    pub storage_keys: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ViewUrlsDto {
    pub urls: BTreeMap<String, String>,
}
