pub use super::approved_owner::Entity as ApprovedOwner;
pub use super::draft_location::Entity as DraftLocation;
pub use super::draft_photo::Entity as DraftPhoto;
pub use super::draft_position::Entity as DraftPosition;
pub use super::season::Entity as Season;
pub use super::team::Entity as Team;
pub use super::team_alias::Entity as TeamAlias;
pub use super::team_lineage::Entity as TeamLineage;
