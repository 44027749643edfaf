use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "season")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub year: i32,
    pub champion_id: Option<i32>,
    pub co_champion_id: Option<i32>,
    pub runner_up_id: Option<i32>,
    pub is_co_championship: bool,
    pub draft_location_id: Option<i32>,
    pub note: Option<String>,
    pub group_photo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::ChampionId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Champion,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::CoChampionId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    CoChampion,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::RunnerUpId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    RunnerUp,
    #[sea_orm(
        belongs_to = "super::draft_location::Entity",
        from = "Column::DraftLocationId",
        to = "super::draft_location::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    DraftLocation,
    #[sea_orm(has_many = "super::draft_position::Entity")]
    DraftPosition,
    #[sea_orm(has_many = "super::draft_photo::Entity")]
    DraftPhoto,
}

impl Related<super::draft_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DraftLocation.def()
    }
}

impl Related<super::draft_position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DraftPosition.def()
    }
}

impl Related<super::draft_photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DraftPhoto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
