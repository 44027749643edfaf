use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public team record. Owner contact details are left out.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub logo: Option<String>,
    pub owner_first_name: Option<String>,
    pub owner_last_name: Option<String>,
    pub is_active: bool,
}

/// Minimal team reference embedded in seasons, aliases and draft positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamSummaryDto {
    pub id: i32,
    pub name: String,
    pub logo: Option<String>,
    pub is_active: bool,
}

/// Active team with its championship record, including history inherited from
/// defunct predecessor franchises.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TeamWithStatsDto {
    pub id: i32,
    pub name: String,
    pub logo: Option<String>,
    pub championships: f64,
    pub appearances: u32,
    pub championship_years: Vec<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TeamAliasDto {
    pub id: i32,
    pub alias: String,
    pub team: TeamSummaryDto,
}

/// Admin changes to a team; omitted fields are left untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTeamDto {
    pub name: Option<String>,
    pub location: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub logo: Option<String>,
    pub owner_first_name: Option<String>,
    pub owner_last_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_phone: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTeamAliasDto {
    pub alias: String,
    pub team_id: i32,
}
