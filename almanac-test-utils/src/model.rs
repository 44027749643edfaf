//! Database model type aliases for test utilities.
//!
//! Mirrors the aliases used by the main crate so fixtures read the same in both.

pub type TeamModel = entity::team::Model;
pub type TeamAliasModel = entity::team_alias::Model;
pub type TeamLineageModel = entity::team_lineage::Model;
pub type DraftLocationModel = entity::draft_location::Model;
pub type SeasonModel = entity::season::Model;
pub type DraftPositionModel = entity::draft_position::Model;
pub type ApprovedOwnerModel = entity::approved_owner::Model;
pub type DraftPhotoModel = entity::draft_photo::Model;
