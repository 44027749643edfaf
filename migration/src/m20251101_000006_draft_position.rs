use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_team::Team, m20251101_000005_season::Season};

static IDX_DRAFT_POSITION_SEASON_TEAM: &str = "idx-draft_position-season_id-team_id";
static FK_DRAFT_POSITION_SEASON_ID: &str = "fk-draft_position-season_id";
static FK_DRAFT_POSITION_TEAM_ID: &str = "fk-draft_position-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DraftPosition::Table)
                    .if_not_exists()
                    .col(pk_auto(DraftPosition::Id))
                    .col(integer(DraftPosition::SeasonId))
                    .col(integer(DraftPosition::TeamId))
                    .col(integer(DraftPosition::DraftPosition))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DRAFT_POSITION_SEASON_TEAM)
                    .table(DraftPosition::Table)
                    .col(DraftPosition::SeasonId)
                    .col(DraftPosition::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DRAFT_POSITION_SEASON_ID)
                    .from_tbl(DraftPosition::Table)
                    .from_col(DraftPosition::SeasonId)
                    .to_tbl(Season::Table)
                    .to_col(Season::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DRAFT_POSITION_TEAM_ID)
                    .from_tbl(DraftPosition::Table)
                    .from_col(DraftPosition::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_DRAFT_POSITION_TEAM_ID, FK_DRAFT_POSITION_SEASON_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(DraftPosition::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DRAFT_POSITION_SEASON_TEAM)
                    .table(DraftPosition::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DraftPosition::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DraftPosition {
    Table,
    Id,
    SeasonId,
    TeamId,
    DraftPosition,
}
