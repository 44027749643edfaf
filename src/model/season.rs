use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::team::TeamSummaryDto;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SeasonDto {
    pub id: i32,
    pub year: i32,
    pub champion: Option<TeamSummaryDto>,
    pub co_champion: Option<TeamSummaryDto>,
    pub runner_up: Option<TeamSummaryDto>,
    pub is_co_championship: bool,
    pub draft_location: Option<DraftLocationSummaryDto>,
    pub note: Option<String>,
    pub group_photo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DraftLocationSummaryDto {
    pub id: i32,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
}

/// Draft location with every year a draft was held there, ascending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DraftLocationDto {
    pub id: i32,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
    pub years: Vec<i32>,
}
