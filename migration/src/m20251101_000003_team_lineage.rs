use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_team::Team;

static IDX_TEAM_LINEAGE_PAIR: &str = "idx-team_lineage-predecessor_id-successor_id";
static FK_TEAM_LINEAGE_PREDECESSOR_ID: &str = "fk-team_lineage-predecessor_id";
static FK_TEAM_LINEAGE_SUCCESSOR_ID: &str = "fk-team_lineage-successor_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamLineage::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamLineage::Id))
                    .col(integer(TeamLineage::PredecessorId))
                    .col(integer(TeamLineage::SuccessorId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_LINEAGE_PAIR)
                    .table(TeamLineage::Table)
                    .col(TeamLineage::PredecessorId)
                    .col(TeamLineage::SuccessorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_LINEAGE_PREDECESSOR_ID)
                    .from_tbl(TeamLineage::Table)
                    .from_col(TeamLineage::PredecessorId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_LINEAGE_SUCCESSOR_ID)
                    .from_tbl(TeamLineage::Table)
                    .from_col(TeamLineage::SuccessorId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_TEAM_LINEAGE_SUCCESSOR_ID, FK_TEAM_LINEAGE_PREDECESSOR_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(TeamLineage::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_LINEAGE_PAIR)
                    .table(TeamLineage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamLineage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TeamLineage {
    Table,
    Id,
    PredecessorId,
    SuccessorId,
}
