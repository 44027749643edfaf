use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// League-wide championship summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChampionshipStatsDto {
    pub total_seasons: u32,
    /// Distinct teams credited with at least a share of one title
    pub unique_champions: u32,
    pub most_titles: MostTitlesDto,
    /// `None` when no champion has gone at least a year without a title
    pub longest_drought: Option<DroughtDto>,
    pub no_titles: NoTitlesDto,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MostTitlesDto {
    pub teams: Vec<String>,
    /// Titles held, in steps of 0.5
    pub count: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DroughtDto {
    pub team: String,
    /// Years since the team's last title
    pub years: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NoTitlesDto {
    pub count: u32,
    pub teams: Vec<String>,
}

/// Teams sharing the same championship count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChampionshipTierDto {
    pub count: f64,
    pub teams: Vec<TierTeamDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TierTeamDto {
    pub name: String,
    pub appearances: u32,
}
