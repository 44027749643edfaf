//! Draft order service.

#[cfg(test)]
mod tests;

use std::collections::{BTreeSet, HashMap};

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::{
    model::draft::DraftPositionDto,
    server::{
        data::{
            draft_position::DraftPositionRepository, season::SeasonRepository,
            team::TeamRepository,
        },
        error::{league::LeagueError, Error},
        model::db::{DraftPositionModel, TeamModel},
        service::{retry::RetryContext, team::team_summary},
    },
};

pub struct DraftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DraftService<'a> {
    /// Creates a new instance of DraftService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every recorded pick, ordered by season year then draft position.
    pub async fn get_draft_positions(&self) -> Result<Vec<DraftPositionDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("get draft positions", || {
            let db = db.clone();

            Box::pin(async move {
                let positions = DraftPositionRepository::new(&db).get_all().await?;

                let positions = positions
                    .into_iter()
                    .filter_map(|(position, season)| Some((position, season?.year)))
                    .collect();

                Ok(with_teams(&db, positions).await?)
            })
        })
        .await
    }

    /// Draft order for the season played in `year`.
    ///
    /// # Returns
    /// - `Ok(Vec<DraftPositionDto>)` - Picks in draft order, empty if none were recorded
    /// - `Err(Error::LeagueError(LeagueError::SeasonNotFound))` - No season for that year
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_by_season_year(&self, year: i32) -> Result<Vec<DraftPositionDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get draft positions for {}", year), || {
            let db = db.clone();

            Box::pin(async move {
                let Some(season) = SeasonRepository::new(&db).find_by_year(year).await? else {
                    return Err(LeagueError::SeasonNotFound(year).into());
                };

                let positions = DraftPositionRepository::new(&db)
                    .get_by_season(season.id)
                    .await?
                    .into_iter()
                    .map(|position| (position, season.year))
                    .collect();

                Ok(with_teams(&db, positions).await?)
            })
        })
        .await
    }

    /// Draft history of one team, oldest season first.
    ///
    /// # Returns
    /// - `Err(Error::LeagueError(LeagueError::TeamNotFound))` - No team with that ID
    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<DraftPositionDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get draft positions for team ID {}", team_id), || {
            let db = db.clone();

            Box::pin(async move {
                let Some(team) = TeamRepository::new(&db).get_by_id(team_id).await? else {
                    return Err(LeagueError::TeamNotFound(team_id).into());
                };
                let team = team_summary(&team);

                let positions = DraftPositionRepository::new(&db).get_by_team(team_id).await?;

                Ok(positions
                    .into_iter()
                    .filter_map(|(position, season)| {
                        Some(DraftPositionDto {
                            id: position.id,
                            draft_position: position.draft_position,
                            year: season?.year,
                            team: team.clone(),
                        })
                    })
                    .collect())
            })
        })
        .await
    }
}

/// Resolves the team of each pick, dropping picks whose team no longer exists.
async fn with_teams<C: ConnectionTrait>(
    db: &C,
    positions: Vec<(DraftPositionModel, i32)>,
) -> Result<Vec<DraftPositionDto>, DbErr> {
    let team_ids: Vec<i32> = positions
        .iter()
        .map(|(position, _)| position.team_id)
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect();

    let teams: HashMap<i32, TeamModel> = TeamRepository::new(db)
        .get_by_ids(&team_ids)
        .await?
        .into_iter()
        .map(|team| (team.id, team))
        .collect();

    Ok(positions
        .into_iter()
        .filter_map(|(position, year)| {
            let team = teams.get(&position.team_id)?;

            Some(DraftPositionDto {
                id: position.id,
                draft_position: position.draft_position,
                year,
                team: team_summary(team),
            })
        })
        .collect())
}
