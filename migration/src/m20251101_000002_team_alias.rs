use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_team::Team;

static IDX_TEAM_ALIAS_TEAM_ID: &str = "idx-team_alias-team_id";
static FK_TEAM_ALIAS_TEAM_ID: &str = "fk-team_alias-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamAlias::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamAlias::Id))
                    .col(string_uniq(TeamAlias::Alias))
                    .col(integer(TeamAlias::TeamId))
                    .col(timestamp(TeamAlias::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_ALIAS_TEAM_ID)
                    .table(TeamAlias::Table)
                    .col(TeamAlias::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_ALIAS_TEAM_ID)
                    .from_tbl(TeamAlias::Table)
                    .from_col(TeamAlias::TeamId)
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
                    .name(FK_TEAM_ALIAS_TEAM_ID)
                    .table(TeamAlias::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_ALIAS_TEAM_ID)
                    .table(TeamAlias::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamAlias::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TeamAlias {
    Table,
    Id,
    Alias,
    TeamId,
    CreatedAt,
}
