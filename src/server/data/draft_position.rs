use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::{DraftPositionModel, SeasonModel};

pub struct DraftPositionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DraftPositionRepository<'a, C> {
    /// Creates a new instance of [`DraftPositionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every draft position with its season, ordered by season year then draft order
    pub async fn get_all(
        &self,
    ) -> Result<Vec<(DraftPositionModel, Option<SeasonModel>)>, DbErr> {
        entity::prelude::DraftPosition::find()
            .find_also_related(entity::season::Entity)
            .order_by_asc(entity::season::Column::Year)
            .order_by_asc(entity::draft_position::Column::DraftPosition)
            .all(self.db)
            .await
    }

    /// Gets the draft order for one season
    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<DraftPositionModel>, DbErr> {
        entity::prelude::DraftPosition::find()
            .filter(entity::draft_position::Column::SeasonId.eq(season_id))
            .order_by_asc(entity::draft_position::Column::DraftPosition)
            .all(self.db)
            .await
    }

    /// Gets a team's draft positions with their seasons, oldest season first
    pub async fn get_by_team(
        &self,
        team_id: i32,
    ) -> Result<Vec<(DraftPositionModel, Option<SeasonModel>)>, DbErr> {
        entity::prelude::DraftPosition::find()
            .filter(entity::draft_position::Column::TeamId.eq(team_id))
            .find_also_related(entity::season::Entity)
            .order_by_asc(entity::season::Column::Year)
            .all(self.db)
            .await
    }
}
