//! League fixture utilities.
//!
//! Inserts rows directly through SeaORM so tests don't depend on the repositories they
//! exercise.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::TEST_OWNER_EMAIL,
    error::TestError,
    model::{
        ApprovedOwnerModel, DraftLocationModel, DraftPhotoModel, DraftPositionModel, SeasonModel,
        TeamAliasModel, TeamLineageModel, TeamModel,
    },
    TestContext,
};

impl TestContext {
    pub fn league<'a>(&'a mut self) -> LeagueFixtures<'a> {
        LeagueFixtures { context: self }
    }
}

pub struct LeagueFixtures<'a> {
    context: &'a mut TestContext,
}

/// Season results to insert, referencing already inserted teams by database ID.
#[derive(Clone, Debug, Default)]
pub struct SeasonFixture {
    pub year: i32,
    pub champion_id: Option<i32>,
    pub co_champion_id: Option<i32>,
    pub runner_up_id: Option<i32>,
    pub draft_location_id: Option<i32>,
}

impl SeasonFixture {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Default::default()
        }
    }

    pub fn champion(mut self, team_id: i32) -> Self {
        self.champion_id = Some(team_id);
        self
    }

    pub fn co_champion(mut self, team_id: i32) -> Self {
        self.co_champion_id = Some(team_id);
        self
    }

    pub fn runner_up(mut self, team_id: i32) -> Self {
        self.runner_up_id = Some(team_id);
        self
    }

    pub fn drafted_at(mut self, draft_location_id: i32) -> Self {
        self.draft_location_id = Some(draft_location_id);
        self
    }
}

impl<'a> LeagueFixtures<'a> {
    /// Insert a team with no owner details.
    pub async fn insert_team(&self, name: &str, is_active: bool) -> Result<TeamModel, TestError> {
        self.insert_team_with_owner(name, is_active, None).await
    }

    /// Insert a team whose owner email is `owner_email`.
    pub async fn insert_team_with_owner(
        &self,
        name: &str,
        is_active: bool,
        owner_email: Option<&str>,
    ) -> Result<TeamModel, TestError> {
        Ok(entity::prelude::Team::insert(entity::team::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            location: ActiveValue::Set(None),
            lat: ActiveValue::Set(None),
            lng: ActiveValue::Set(None),
            logo: ActiveValue::Set(Some(format!("logos/{}.png", name.to_lowercase()))),
            owner_first_name: ActiveValue::Set(None),
            owner_last_name: ActiveValue::Set(None),
            owner_email: ActiveValue::Set(owner_email.map(str::to_string)),
            owner_phone: ActiveValue::Set(None),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_alias(
        &self,
        alias: &str,
        team_id: i32,
    ) -> Result<TeamAliasModel, TestError> {
        Ok(
            entity::prelude::TeamAlias::insert(entity::team_alias::ActiveModel {
                alias: ActiveValue::Set(alias.to_string()),
                team_id: ActiveValue::Set(team_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_lineage(
        &self,
        predecessor_id: i32,
        successor_id: i32,
    ) -> Result<TeamLineageModel, TestError> {
        Ok(
            entity::prelude::TeamLineage::insert(entity::team_lineage::ActiveModel {
                predecessor_id: ActiveValue::Set(predecessor_id),
                successor_id: ActiveValue::Set(successor_id),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_draft_location(&self, city: &str) -> Result<DraftLocationModel, TestError> {
        Ok(
            entity::prelude::DraftLocation::insert(entity::draft_location::ActiveModel {
                city: ActiveValue::Set(city.to_string()),
                lat: ActiveValue::Set(40.0),
                lng: ActiveValue::Set(-75.0),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a season; the co-championship flag follows the presence of a co-champion.
    pub async fn insert_season(&self, season: SeasonFixture) -> Result<SeasonModel, TestError> {
        Ok(entity::prelude::Season::insert(entity::season::ActiveModel {
            year: ActiveValue::Set(season.year),
            champion_id: ActiveValue::Set(season.champion_id),
            co_champion_id: ActiveValue::Set(season.co_champion_id),
            runner_up_id: ActiveValue::Set(season.runner_up_id),
            is_co_championship: ActiveValue::Set(season.co_champion_id.is_some()),
            draft_location_id: ActiveValue::Set(season.draft_location_id),
            note: ActiveValue::Set(None),
            group_photo: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_draft_position(
        &self,
        season_id: i32,
        team_id: i32,
        draft_position: i32,
    ) -> Result<DraftPositionModel, TestError> {
        Ok(
            entity::prelude::DraftPosition::insert(entity::draft_position::ActiveModel {
                season_id: ActiveValue::Set(season_id),
                team_id: ActiveValue::Set(team_id),
                draft_position: ActiveValue::Set(draft_position),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_approved_owner(
        &self,
        team_id: i32,
        is_admin: bool,
    ) -> Result<ApprovedOwnerModel, TestError> {
        Ok(
            entity::prelude::ApprovedOwner::insert(entity::approved_owner::ActiveModel {
                team_id: ActiveValue::Set(team_id),
                is_admin: ActiveValue::Set(is_admin),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert an active team owned by [`TEST_OWNER_EMAIL`] along with its approved owner.
    pub async fn insert_owned_team(
        &self,
        name: &str,
        is_admin: bool,
    ) -> Result<(TeamModel, ApprovedOwnerModel), TestError> {
        self.insert_owned_team_with_email(name, TEST_OWNER_EMAIL, is_admin)
            .await
    }

    pub async fn insert_owned_team_with_email(
        &self,
        name: &str,
        owner_email: &str,
        is_admin: bool,
    ) -> Result<(TeamModel, ApprovedOwnerModel), TestError> {
        let team = self
            .insert_team_with_owner(name, true, Some(owner_email))
            .await?;
        let owner = self.insert_approved_owner(team.id, is_admin).await?;

        Ok((team, owner))
    }

    pub async fn insert_photo(
        &self,
        season_id: i32,
        uploaded_by: i32,
        storage_key: &str,
        is_approved: bool,
    ) -> Result<DraftPhotoModel, TestError> {
        Ok(
            entity::prelude::DraftPhoto::insert(entity::draft_photo::ActiveModel {
                season_id: ActiveValue::Set(season_id),
                storage_key: ActiveValue::Set(storage_key.to_string()),
                filename: ActiveValue::Set("draft.jpg".to_string()),
                caption: ActiveValue::Set(None),
                uploaded_by: ActiveValue::Set(uploaded_by),
                is_approved: ActiveValue::Set(is_approved),
                uploaded_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
