use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::DraftLocationModel;

pub struct DraftLocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DraftLocationRepository<'a, C> {
    /// Creates a new instance of [`DraftLocationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every draft location ordered by city
    pub async fn get_all(&self) -> Result<Vec<DraftLocationModel>, DbErr> {
        entity::prelude::DraftLocation::find()
            .order_by_asc(entity::draft_location::Column::City)
            .all(self.db)
            .await
    }
}
