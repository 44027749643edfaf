use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string_uniq(Team::Name))
                    .col(string_null(Team::Location))
                    .col(double_null(Team::Lat))
                    .col(double_null(Team::Lng))
                    .col(string_null(Team::Logo))
                    .col(string_null(Team::OwnerFirstName))
                    .col(string_null(Team::OwnerLastName))
                    .col(string_null(Team::OwnerEmail))
                    .col(string_null(Team::OwnerPhone))
                    .col(boolean(Team::IsActive).default(true))
                    .col(timestamp(Team::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    Name,
    Location,
    Lat,
    Lng,
    Logo,
    OwnerFirstName,
    OwnerLastName,
    OwnerEmail,
    OwnerPhone,
    IsActive,
    CreatedAt,
}
