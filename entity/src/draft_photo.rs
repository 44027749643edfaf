use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "draft_photo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub season_id: i32,
    #[sea_orm(unique)]
    pub storage_key: String,
    pub filename: String,
    pub caption: Option<String>,
    pub uploaded_by: i32,
    pub is_approved: bool,
    pub uploaded_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::season::Entity",
        from = "Column::SeasonId",
        to = "super::season::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Season,
    #[sea_orm(
        belongs_to = "super::approved_owner::Entity",
        from = "Column::UploadedBy",
        to = "super::approved_owner::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ApprovedOwner,
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl Related<super::approved_owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApprovedOwner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
