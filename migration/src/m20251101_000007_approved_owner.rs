use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_team::Team;

static FK_APPROVED_OWNER_TEAM_ID: &str = "fk-approved_owner-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApprovedOwner::Table)
                    .if_not_exists()
                    .col(pk_auto(ApprovedOwner::Id))
                    .col(integer_uniq(ApprovedOwner::TeamId))
                    .col(boolean(ApprovedOwner::IsAdmin).default(false))
                    .col(timestamp(ApprovedOwner::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPROVED_OWNER_TEAM_ID)
                    .from_tbl(ApprovedOwner::Table)
                    .from_col(ApprovedOwner::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPROVED_OWNER_TEAM_ID)
                    .table(ApprovedOwner::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ApprovedOwner::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ApprovedOwner {
    Table,
    Id,
    TeamId,
    IsAdmin,
    CreatedAt,
}
