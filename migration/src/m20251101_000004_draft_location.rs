use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DraftLocation::Table)
                    .if_not_exists()
                    .col(pk_auto(DraftLocation::Id))
                    .col(string(DraftLocation::City))
                    .col(double(DraftLocation::Lat))
                    .col(double(DraftLocation::Lng))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DraftLocation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DraftLocation {
    Table,
    Id,
    City,
    Lat,
    Lng,
}
