use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::TeamLineageModel;

pub struct TeamLineageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamLineageRepository<'a, C> {
    /// Creates a new instance of [`TeamLineageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every predecessor → successor link
    pub async fn get_all(&self) -> Result<Vec<TeamLineageModel>, DbErr> {
        entity::prelude::TeamLineage::find()
            .order_by_asc(entity::team_lineage::Column::Id)
            .all(self.db)
            .await
    }
}
