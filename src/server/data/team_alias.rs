use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{TeamAliasModel, TeamModel};

pub struct TeamAliasRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamAliasRepository<'a, C> {
    /// Creates a new instance of [`TeamAliasRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an alias pointing at a team
    pub async fn create(&self, alias: &str, team_id: i32) -> Result<TeamAliasModel, DbErr> {
        let team_alias = entity::team_alias::ActiveModel {
            alias: ActiveValue::Set(alias.to_string()),
            team_id: ActiveValue::Set(team_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        team_alias.insert(self.db).await
    }

    /// Gets every alias with the team it resolves to, ordered by alias
    pub async fn get_all(&self) -> Result<Vec<(TeamAliasModel, Option<TeamModel>)>, DbErr> {
        entity::prelude::TeamAlias::find()
            .find_also_related(entity::team::Entity)
            .order_by_asc(entity::team_alias::Column::Alias)
            .all(self.db)
            .await
    }

    /// Finds an alias by its exact name along with the team it resolves to
    pub async fn find_by_alias(
        &self,
        alias: &str,
    ) -> Result<Option<(TeamAliasModel, Option<TeamModel>)>, DbErr> {
        entity::prelude::TeamAlias::find()
            .filter(entity::team_alias::Column::Alias.eq(alias))
            .find_also_related(entity::team::Entity)
            .one(self.db)
            .await
    }

    /// Deletes an alias
    ///
    /// Returns OK regardless of the alias existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, alias_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TeamAlias::delete_by_id(alias_id)
            .exec(self.db)
            .await
    }
}
