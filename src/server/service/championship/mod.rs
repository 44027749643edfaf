//! Championship service.
//!
//! Fetches the season, roster and lineage snapshot concurrently and hands it to the
//! attribution engine. The engine only runs once all three reads have succeeded.

pub mod attribution;

#[cfg(test)]
mod tests;

use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::championship::{ChampionshipStatsDto, ChampionshipTierDto},
    server::{
        data::{season::SeasonRepository, team::TeamRepository, team_lineage::TeamLineageRepository},
        error::Error,
        model::db::TeamModel,
        service::{
            championship::attribution::{
                team_record, ChampionshipLedger, LineageLink, SeasonRecord, TeamRef, TeamTally,
            },
            retry::RetryContext,
        },
        util::time::current_year,
    },
};

/// Service computing championship statistics from stored season results.
pub struct ChampionshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChampionshipService<'a> {
    /// Creates a new instance of ChampionshipService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// League-wide championship statistics.
    ///
    /// Droughts are measured against the current UTC year.
    ///
    /// # Returns
    /// - `Ok(ChampionshipStatsDto)` - Statistics for every stored season
    /// - `Err(Error::DbErr)` - One of the snapshot reads failed after retries
    pub async fn get_stats(&self) -> Result<ChampionshipStatsDto, Error> {
        let ledger = self.ledger().await?;

        Ok(ledger.stats(current_year(Utc::now())))
    }

    /// Teams grouped by championship count, ascending.
    ///
    /// # Returns
    /// - `Ok(Vec<ChampionshipTierDto>)` - Tiers, empty when no season has results
    /// - `Err(Error::DbErr)` - One of the snapshot reads failed after retries
    pub async fn get_tiers(&self) -> Result<Vec<ChampionshipTierDto>, Error> {
        let ledger = self.ledger().await?;

        Ok(ledger.tiers())
    }

    /// Builds the attribution ledger from a fresh snapshot.
    ///
    /// Seasons, active teams and lineage are read concurrently; the first failure is
    /// returned and the ledger is not built.
    async fn ledger(&self) -> Result<ChampionshipLedger, Error> {
        let (seasons, active_teams, lineage) = tokio::try_join!(
            self.fetch_seasons(),
            self.fetch_active_teams(),
            self.fetch_lineage()
        )?;

        Ok(ChampionshipLedger::build(&seasons, &lineage, &active_teams))
    }

    /// Championship records for roster teams, one per team in the order given.
    ///
    /// See [`team_record`] for how predecessor results are counted.
    pub async fn team_records(&self, teams: Vec<TeamModel>) -> Result<Vec<TeamTally>, Error> {
        let (seasons, lineage) = tokio::try_join!(self.fetch_seasons(), self.fetch_lineage())?;

        Ok(teams
            .into_iter()
            .map(|team| team_record(&seasons, &team_ref(team), &lineage))
            .collect())
    }

    /// Season results with team references resolved, oldest season first.
    async fn fetch_seasons(&self) -> Result<Vec<SeasonRecord>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("fetch season results", || {
            let db = db.clone();

            Box::pin(async move {
                let seasons = SeasonRepository::new(&db).get_all().await?;

                let team_ids: Vec<i32> = seasons
                    .iter()
                    .flat_map(|s| [s.champion_id, s.co_champion_id, s.runner_up_id])
                    .flatten()
                    .collect::<BTreeSet<i32>>()
                    .into_iter()
                    .collect();
                let teams: HashMap<i32, TeamRef> = TeamRepository::new(&db)
                    .get_by_ids(&team_ids)
                    .await?
                    .into_iter()
                    .map(|team| (team.id, team_ref(team)))
                    .collect();

                // A reference to a team that no longer exists leaves that role empty
                let resolve = |team_id: Option<i32>| team_id.and_then(|id| teams.get(&id).cloned());

                let mut records: Vec<SeasonRecord> = seasons
                    .into_iter()
                    .map(|season| SeasonRecord {
                        year: season.year,
                        champion: resolve(season.champion_id),
                        co_champion: resolve(season.co_champion_id),
                        runner_up: resolve(season.runner_up_id),
                    })
                    .collect();
                records.sort_by_key(|record| record.year);

                Ok(records)
            })
        })
        .await
    }

    async fn fetch_active_teams(&self) -> Result<Vec<TeamRef>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("fetch active teams", || {
            let db = db.clone();

            Box::pin(async move {
                let teams = TeamRepository::new(&db).get_all(true).await?;

                Ok(teams.into_iter().map(team_ref).collect())
            })
        })
        .await
    }

    async fn fetch_lineage(&self) -> Result<Vec<LineageLink>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("fetch team lineage", || {
            let db = db.clone();

            Box::pin(async move {
                let links = TeamLineageRepository::new(&db).get_all().await?;

                Ok(links
                    .into_iter()
                    .map(|link| LineageLink {
                        predecessor_id: link.predecessor_id,
                        successor_id: link.successor_id,
                    })
                    .collect())
            })
        })
        .await
    }
}

fn team_ref(team: TeamModel) -> TeamRef {
    TeamRef {
        id: team.id,
        name: team.name,
        is_active: team.is_active,
    }
}
