use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::team::UpdateTeamDto, server::model::db::TeamModel};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets teams ordered by name, optionally only those still in the league
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<TeamModel>, DbErr> {
        let mut query = entity::prelude::Team::find();
        if active_only {
            query = query.filter(entity::team::Column::IsActive.eq(true));
        }

        query
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, team_id: i32) -> Result<Option<TeamModel>, DbErr> {
        entity::prelude::Team::find_by_id(team_id).one(self.db).await
    }

    /// Gets the teams with the provided IDs, IDs without a team are skipped
    pub async fn get_by_ids(&self, team_ids: &[i32]) -> Result<Vec<TeamModel>, DbErr> {
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(team_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Applies the provided changes to a team
    ///
    /// Fields left as `None` keep their current value. Returns `Ok(None)` if the team
    /// does not exist.
    pub async fn update(
        &self,
        team_id: i32,
        changes: &UpdateTeamDto,
    ) -> Result<Option<TeamModel>, DbErr> {
        let team = match entity::prelude::Team::find_by_id(team_id)
            .one(self.db)
            .await?
        {
            Some(team) => team,
            None => return Ok(None),
        };

        let mut team_am = team.into_active_model();
        if let Some(name) = &changes.name {
            team_am.name = ActiveValue::Set(name.clone());
        }
        if let Some(location) = &changes.location {
            team_am.location = ActiveValue::Set(Some(location.clone()));
        }
        if let Some(lat) = changes.lat {
            team_am.lat = ActiveValue::Set(Some(lat));
        }
        if let Some(lng) = changes.lng {
            team_am.lng = ActiveValue::Set(Some(lng));
        }
        if let Some(logo) = &changes.logo {
            team_am.logo = ActiveValue::Set(Some(logo.clone()));
        }
        if let Some(first_name) = &changes.owner_first_name {
            team_am.owner_first_name = ActiveValue::Set(Some(first_name.clone()));
        }
        if let Some(last_name) = &changes.owner_last_name {
            team_am.owner_last_name = ActiveValue::Set(Some(last_name.clone()));
        }
        if let Some(email) = &changes.owner_email {
            team_am.owner_email = ActiveValue::Set(Some(email.clone()));
        }
        if let Some(phone) = &changes.owner_phone {
            team_am.owner_phone = ActiveValue::Set(Some(phone.clone()));
        }
        if let Some(is_active) = changes.is_active {
            team_am.is_active = ActiveValue::Set(is_active);
        }

        let team = team_am.update(self.db).await?;

        Ok(Some(team))
    }
}

#[cfg(test)]
mod tests {

    mod get_all {
        use almanac_test_utils::prelude::*;

        use crate::server::data::team::TeamRepository;

        /// Expect every team ordered by name
        #[tokio::test]
        async fn returns_teams_ordered_by_name() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_league_tables().build().await?;
            test.league().insert_team("Zebras", true).await?;
            test.league().insert_team("Aardvarks", false).await?;

            let team_repo = TeamRepository::new(&test.db);
            let teams = team_repo.get_all(false).await?;

            let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
            assert_eq!(names, vec!["Aardvarks", "Zebras"]);

            Ok(())
        }

        /// Expect inactive teams to be excluded when only active teams are requested
        #[tokio::test]
        async fn filters_inactive_teams() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_league_tables().build().await?;
            test.league().insert_team("Zebras", true).await?;
            test.league().insert_team("Aardvarks", false).await?;

            let team_repo = TeamRepository::new(&test.db);
            let teams = team_repo.get_all(true).await?;

            assert_eq!(teams.len(), 1);
            assert_eq!(teams[0].name, "Zebras");

            Ok(())
        }

        /// Expect Error when required tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let team_repo = TeamRepository::new(&test.db);
            let result = team_repo.get_all(false).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_ids {
        use almanac_test_utils::prelude::*;

        use crate::server::data::team::TeamRepository;

        /// Expect only existing teams to be returned
        #[tokio::test]
        async fn skips_unknown_ids() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_league_tables().build().await?;
            let team = test.league().insert_team("Zebras", true).await?;

            let team_repo = TeamRepository::new(&test.db);
            let teams = team_repo.get_by_ids(&[team.id, team.id + 100]).await?;

            assert_eq!(teams, vec![team]);

            Ok(())
        }

        /// Expect no query and an empty result for an empty ID list
        #[tokio::test]
        async fn returns_empty_for_no_ids() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let team_repo = TeamRepository::new(&test.db);
            let teams = team_repo.get_by_ids(&[]).await?;

            assert!(teams.is_empty());

            Ok(())
        }
    }

    mod update {
        use almanac_test_utils::prelude::*;

        use crate::{model::team::UpdateTeamDto, server::data::team::TeamRepository};

        /// Expect only the provided fields to change
        #[tokio::test]
        async fn updates_provided_fields() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_league_tables().build().await?;
            let team = test.league().insert_team("Zebras", true).await?;

            let team_repo = TeamRepository::new(&test.db);
            let changes = UpdateTeamDto {
                location: Some("Allentown, PA".to_string()),
                is_active: Some(false),
                ..Default::default()
            };
            let updated = team_repo.update(team.id, &changes).await?;

            let updated = updated.unwrap();
            assert_eq!(updated.name, "Zebras");
            assert_eq!(updated.location.as_deref(), Some("Allentown, PA"));
            assert!(!updated.is_active);
            assert_eq!(updated.logo, team.logo);

            Ok(())
        }

        /// Expect Ok(None) for a team that does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_team() -> Result<(), TestError> {
            let test = TestBuilder::new().with_league_tables().build().await?;

            let team_repo = TeamRepository::new(&test.db);
            let result = team_repo.update(1, &UpdateTeamDto::default()).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect Error when renaming a team to a name already taken
        #[tokio::test]
        async fn fails_for_duplicate_name() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_league_tables().build().await?;
            test.league().insert_team("Zebras", true).await?;
            let team = test.league().insert_team("Aardvarks", true).await?;

            let team_repo = TeamRepository::new(&test.db);
            let changes = UpdateTeamDto {
                name: Some("Zebras".to_string()),
                ..Default::default()
            };
            let result = team_repo.update(team.id, &changes).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
