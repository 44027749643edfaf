//! Season service.
//!
//! Season results with resolved team and draft location references, and the list of
//! draft locations with the years each hosted a draft.

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::{
    model::season::{DraftLocationDto, DraftLocationSummaryDto, SeasonDto},
    server::{
        data::{
            draft_location::DraftLocationRepository, season::SeasonRepository,
            team::TeamRepository,
        },
        error::Error,
        model::db::{DraftLocationModel, SeasonModel, TeamModel},
        service::{retry::RetryContext, team::team_summary},
    },
};

pub struct SeasonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonService<'a> {
    /// Creates a new instance of SeasonService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every season, newest first.
    pub async fn get_seasons(&self) -> Result<Vec<SeasonDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("get seasons", || {
            let db = db.clone();

            Box::pin(async move {
                let seasons = SeasonRepository::new(&db).get_all().await?;

                Ok(resolve_seasons(&db, seasons).await?)
            })
        })
        .await
    }

    /// # Returns
    /// - `Ok(Some(SeasonDto))` - Season found
    /// - `Ok(None)` - No season for that year
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_season_by_year(&self, year: i32) -> Result<Option<SeasonDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get season {}", year), || {
            let db = db.clone();

            Box::pin(async move {
                let Some(season) = SeasonRepository::new(&db).find_by_year(year).await? else {
                    return Ok(None);
                };

                let resolved = resolve_seasons(&db, vec![season]).await?;

                Ok(resolved.into_iter().next())
            })
        })
        .await
    }

    /// Draft locations ordered by city, each with the years it hosted a draft.
    ///
    /// Locations that never hosted a draft are left out.
    pub async fn get_draft_locations(&self) -> Result<Vec<DraftLocationDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("get draft locations", || {
            let db = db.clone();

            Box::pin(async move {
                let locations = DraftLocationRepository::new(&db).get_all().await?;
                let seasons = SeasonRepository::new(&db).get_all().await?;

                let mut years_by_location: HashMap<i32, BTreeSet<i32>> = HashMap::new();
                for season in &seasons {
                    if let Some(location_id) = season.draft_location_id {
                        years_by_location
                            .entry(location_id)
                            .or_default()
                            .insert(season.year);
                    }
                }

                Ok(locations
                    .into_iter()
                    .filter_map(|location| {
                        let years = years_by_location.remove(&location.id)?;

                        Some(DraftLocationDto {
                            id: location.id,
                            city: location.city,
                            lat: location.lat,
                            lng: location.lng,
                            years: years.into_iter().collect(),
                        })
                    })
                    .collect())
            })
        })
        .await
    }
}

/// Attaches team summaries and draft locations to seasons, keeping their order.
async fn resolve_seasons<C: ConnectionTrait>(
    db: &C,
    seasons: Vec<SeasonModel>,
) -> Result<Vec<SeasonDto>, DbErr> {
    let team_ids: Vec<i32> = seasons
        .iter()
        .flat_map(|s| [s.champion_id, s.co_champion_id, s.runner_up_id])
        .flatten()
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect();

    let teams: HashMap<i32, TeamModel> = TeamRepository::new(db)
        .get_by_ids(&team_ids)
        .await?
        .into_iter()
        .map(|team| (team.id, team))
        .collect();
    let locations: BTreeMap<i32, DraftLocationModel> = DraftLocationRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|location| (location.id, location))
        .collect();

    let summary = |team_id: Option<i32>| team_id.and_then(|id| teams.get(&id)).map(team_summary);

    Ok(seasons
        .into_iter()
        .map(|season| SeasonDto {
            id: season.id,
            year: season.year,
            champion: summary(season.champion_id),
            co_champion: summary(season.co_champion_id),
            runner_up: summary(season.runner_up_id),
            is_co_championship: season.is_co_championship,
            draft_location: season
                .draft_location_id
                .and_then(|id| locations.get(&id))
                .map(|location| DraftLocationSummaryDto {
                    id: location.id,
                    city: location.city.clone(),
                    lat: location.lat,
                    lng: location.lng,
                }),
            note: season.note,
            group_photo: season.group_photo,
        })
        .collect())
}
