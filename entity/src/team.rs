use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub location: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub logo: Option<String>,
    pub owner_first_name: Option<String>,
    pub owner_last_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team_alias::Entity")]
    TeamAlias,
    #[sea_orm(has_one = "super::approved_owner::Entity")]
    ApprovedOwner,
    #[sea_orm(has_many = "super::draft_position::Entity")]
    DraftPosition,
}

impl Related<super::team_alias::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamAlias.def()
    }
}

impl Related<super::approved_owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApprovedOwner.def()
    }
}

impl Related<super::draft_position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DraftPosition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
