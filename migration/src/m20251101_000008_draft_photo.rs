use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000005_season::Season, m20251101_000007_approved_owner::ApprovedOwner,
};

static IDX_DRAFT_PHOTO_SEASON_ID: &str = "idx-draft_photo-season_id";
static FK_DRAFT_PHOTO_SEASON_ID: &str = "fk-draft_photo-season_id";
static FK_DRAFT_PHOTO_UPLOADED_BY: &str = "fk-draft_photo-uploaded_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DraftPhoto::Table)
                    .if_not_exists()
                    .col(pk_auto(DraftPhoto::Id))
                    .col(integer(DraftPhoto::SeasonId))
                    .col(string_uniq(DraftPhoto::StorageKey))
                    .col(string(DraftPhoto::Filename))
                    .col(text_null(DraftPhoto::Caption))
                    .col(integer(DraftPhoto::UploadedBy))
                    .col(boolean(DraftPhoto::IsApproved).default(false))
                    .col(timestamp(DraftPhoto::UploadedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DRAFT_PHOTO_SEASON_ID)
                    .table(DraftPhoto::Table)
                    .col(DraftPhoto::SeasonId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DRAFT_PHOTO_SEASON_ID)
                    .from_tbl(DraftPhoto::Table)
                    .from_col(DraftPhoto::SeasonId)
                    .to_tbl(Season::Table)
                    .to_col(Season::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DRAFT_PHOTO_UPLOADED_BY)
                    .from_tbl(DraftPhoto::Table)
                    .from_col(DraftPhoto::UploadedBy)
                    .to_tbl(ApprovedOwner::Table)
                    .to_col(ApprovedOwner::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_DRAFT_PHOTO_UPLOADED_BY, FK_DRAFT_PHOTO_SEASON_ID] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(fk).table(DraftPhoto::Table).to_owned())
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DRAFT_PHOTO_SEASON_ID)
                    .table(DraftPhoto::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DraftPhoto::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DraftPhoto {
    Table,
    Id,
    SeasonId,
    StorageKey,
    Filename,
    Caption,
    UploadedBy,
    IsApproved,
    UploadedAt,
}
