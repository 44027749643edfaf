use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_team::Team, m20251101_000004_draft_location::DraftLocation};

static FK_SEASON_CHAMPION_ID: &str = "fk-season-champion_id";
static FK_SEASON_CO_CHAMPION_ID: &str = "fk-season-co_champion_id";
static FK_SEASON_RUNNER_UP_ID: &str = "fk-season-runner_up_id";
static FK_SEASON_DRAFT_LOCATION_ID: &str = "fk-season-draft_location_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Season::Table)
                    .if_not_exists()
                    .col(pk_auto(Season::Id))
                    .col(integer_uniq(Season::Year))
                    .col(integer_null(Season::ChampionId))
                    .col(integer_null(Season::CoChampionId))
                    .col(integer_null(Season::RunnerUpId))
                    .col(boolean(Season::IsCoChampionship).default(false))
                    .col(integer_null(Season::DraftLocationId))
                    .col(text_null(Season::Note))
                    .col(string_null(Season::GroupPhoto))
                    .to_owned(),
            )
            .await?;

        let team_refs = [
            (FK_SEASON_CHAMPION_ID, Season::ChampionId),
            (FK_SEASON_CO_CHAMPION_ID, Season::CoChampionId),
            (FK_SEASON_RUNNER_UP_ID, Season::RunnerUpId),
        ];

        for (name, column) in team_refs {
            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name(name)
                        .from_tbl(Season::Table)
                        .from_col(column)
                        .to_tbl(Team::Table)
                        .to_col(Team::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SEASON_DRAFT_LOCATION_ID)
                    .from_tbl(Season::Table)
                    .from_col(Season::DraftLocationId)
                    .to_tbl(DraftLocation::Table)
                    .to_col(DraftLocation::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_SEASON_DRAFT_LOCATION_ID,
            FK_SEASON_RUNNER_UP_ID,
            FK_SEASON_CO_CHAMPION_ID,
            FK_SEASON_CHAMPION_ID,
        ] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(fk).table(Season::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Season::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Season {
    Table,
    Id,
    Year,
    ChampionId,
    CoChampionId,
    RunnerUpId,
    IsCoChampionship,
    DraftLocationId,
    Note,
    GroupPhoto,
}
