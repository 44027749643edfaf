//! Team service.
//!
//! Team roster reads, historical aliases, championship records per team and the admin
//! operations for editing team metadata.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::team::{
        CreateTeamAliasDto, TeamAliasDto, TeamDto, TeamSummaryDto, TeamWithStatsDto,
        UpdateTeamDto,
    },
    server::{
        data::{team::TeamRepository, team_alias::TeamAliasRepository},
        error::{league::LeagueError, Error},
        model::db::TeamModel,
        service::{championship::ChampionshipService, retry::RetryContext},
    },
};

/// Service for team roster reads and admin edits.
pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    /// Creates a new instance of TeamService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Teams ordered by name.
    ///
    /// # Arguments
    /// - `active_only` - Leave out teams no longer in the league
    pub async fn get_teams(&self, active_only: bool) -> Result<Vec<TeamDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("get teams", || {
            let db = db.clone();

            Box::pin(async move {
                let teams = TeamRepository::new(&db).get_all(active_only).await?;

                Ok(teams.into_iter().map(team_dto).collect())
            })
        })
        .await
    }

    /// # Returns
    /// - `Ok(Some(TeamDto))` - Team found
    /// - `Ok(None)` - No team with that ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_team(&self, team_id: i32) -> Result<Option<TeamDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get team ID {}", team_id), || {
            let db = db.clone();

            Box::pin(async move {
                let team = TeamRepository::new(&db).get_by_id(team_id).await?;

                Ok(team.map(team_dto))
            })
        })
        .await
    }

    /// Active teams with their championship record, ordered by name.
    ///
    /// A team also carries the titles and appearances of the franchises it directly
    /// succeeded, co-championships included.
    pub async fn get_teams_with_stats(&self) -> Result<Vec<TeamWithStatsDto>, Error> {
        let teams = self.get_active_team_models().await?;
        let records = ChampionshipService::new(self.db)
            .team_records(teams.clone())
            .await?;

        Ok(teams
            .into_iter()
            .zip(records)
            .map(|(team, record)| TeamWithStatsDto {
                id: team.id,
                name: team.name,
                logo: team.logo,
                championships: record.championships(),
                appearances: record.appearances,
                championship_years: record.championship_years,
            })
            .collect())
    }

    /// Every alias with the team it resolves to, ordered by alias.
    pub async fn get_aliases(&self) -> Result<Vec<TeamAliasDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("get team aliases", || {
            let db = db.clone();

            Box::pin(async move {
                let aliases = TeamAliasRepository::new(&db).get_all().await?;

                Ok(aliases
                    .into_iter()
                    .filter_map(|(alias, team)| {
                        team.map(|team| TeamAliasDto {
                            id: alias.id,
                            alias: alias.alias,
                            team: team_summary(&team),
                        })
                    })
                    .collect())
            })
        })
        .await
    }

    /// Resolves a historical team name to the team it now refers to.
    pub async fn get_team_by_alias(&self, alias: &str) -> Result<Option<TeamDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();
        let alias = alias.to_string();

        ctx.execute_with_retry(&format!("get team by alias {:?}", alias), || {
            let db = db.clone();
            let alias = alias.clone();

            Box::pin(async move {
                let found = TeamAliasRepository::new(&db).find_by_alias(&alias).await?;

                Ok(found.and_then(|(_, team)| team).map(team_dto))
            })
        })
        .await
    }

    /// Applies admin changes to a team.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - Updated team
    /// - `Err(Error::LeagueError(TeamNotFound))` - No team with that ID
    /// - `Err(Error::LeagueError(TeamNameTaken))` - Another team already uses the new name
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn update_team(
        &self,
        team_id: i32,
        changes: UpdateTeamDto,
    ) -> Result<TeamDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("update team ID {}", team_id), || {
            let db = db.clone();
            let changes = changes.clone();

            Box::pin(async move {
                match TeamRepository::new(&db).update(team_id, &changes).await {
                    Ok(Some(team)) => Ok(team_dto(team)),
                    Ok(None) => Err(LeagueError::TeamNotFound(team_id).into()),
                    Err(e) if is_unique_violation(&e) => {
                        Err(LeagueError::TeamNameTaken(changes.name.unwrap_or_default()).into())
                    }
                    Err(e) => Err(e.into()),
                }
            })
        })
        .await
    }

    /// Adds a historical name for a team.
    ///
    /// # Returns
    /// - `Ok(TeamAliasDto)` - Created alias
    /// - `Err(Error::LeagueError(TeamNotFound))` - No team with that ID
    /// - `Err(Error::LeagueError(AliasTaken))` - Alias already in use
    pub async fn create_alias(&self, new_alias: CreateTeamAliasDto) -> Result<TeamAliasDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("create team alias {:?}", new_alias.alias), || {
            let db = db.clone();
            let new_alias = new_alias.clone();

            Box::pin(async move {
                let team = TeamRepository::new(&db)
                    .get_by_id(new_alias.team_id)
                    .await?
                    .ok_or(LeagueError::TeamNotFound(new_alias.team_id))?;

                let alias = match TeamAliasRepository::new(&db)
                    .create(&new_alias.alias, team.id)
                    .await
                {
                    Ok(alias) => alias,
                    Err(e) if is_unique_violation(&e) => {
                        return Err(LeagueError::AliasTaken(new_alias.alias).into())
                    }
                    Err(e) => return Err(e.into()),
                };

                Ok(TeamAliasDto {
                    id: alias.id,
                    alias: alias.alias,
                    team: team_summary(&team),
                })
            })
        })
        .await
    }

    /// Removes a historical team name.
    ///
    /// # Returns
    /// - `Ok(())` - Alias deleted
    /// - `Err(Error::LeagueError(AliasNotFound))` - No alias with that ID
    pub async fn delete_alias(&self, alias_id: i32) -> Result<(), Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("delete team alias ID {}", alias_id), || {
            let db = db.clone();

            Box::pin(async move {
                let result = TeamAliasRepository::new(&db).delete(alias_id).await?;
                if result.rows_affected == 0 {
                    return Err(LeagueError::AliasNotFound(alias_id).into());
                }

                Ok(())
            })
        })
        .await
    }

    async fn get_active_team_models(&self) -> Result<Vec<TeamModel>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("get active teams", || {
            let db = db.clone();

            Box::pin(async move { Ok(TeamRepository::new(&db).get_all(true).await?) })
        })
        .await
    }
}

/// Public view of a team, without owner contact details.
pub(crate) fn team_dto(team: TeamModel) -> TeamDto {
    TeamDto {
        id: team.id,
        name: team.name,
        location: team.location,
        lat: team.lat,
        lng: team.lng,
        logo: team.logo,
        owner_first_name: team.owner_first_name,
        owner_last_name: team.owner_last_name,
        is_active: team.is_active,
    }
}

pub(crate) fn team_summary(team: &TeamModel) -> TeamSummaryDto {
    TeamSummaryDto {
        id: team.id,
        name: team.name.clone(),
        logo: team.logo.clone(),
        is_active: team.is_active,
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
