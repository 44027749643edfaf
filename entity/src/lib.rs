//! SeaORM entities for the league history schema.

pub mod prelude;

pub mod approved_owner;
pub mod draft_location;
pub mod draft_photo;
pub mod draft_position;
pub mod season;
pub mod team;
pub mod team_alias;
pub mod team_lineage;
