use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::{ApprovedOwnerModel, TeamModel};

pub struct ApprovedOwnerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApprovedOwnerRepository<'a, C> {
    /// Creates a new instance of [`ApprovedOwnerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the approved owner whose team lists `email` as its owner email
    ///
    /// Emails are compared case-insensitively.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(ApprovedOwnerModel, TeamModel)>, DbErr> {
        let owner_email = Func::lower(Expr::col((
            entity::team::Entity,
            entity::team::Column::OwnerEmail,
        )));

        let result = entity::prelude::ApprovedOwner::find()
            .find_also_related(entity::team::Entity)
            .filter(Expr::expr(owner_email).eq(email.trim().to_lowercase()))
            .one(self.db)
            .await?;

        Ok(result.and_then(|(owner, team)| team.map(|team| (owner, team))))
    }
}
