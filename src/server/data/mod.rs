//! Data access layer repositories.
//!
//! One repository per league table. Repositories are generic over [`sea_orm::ConnectionTrait`]
//! so they work on a plain connection or inside a transaction.

pub mod approved_owner;
pub mod draft_location;
pub mod draft_photo;
pub mod draft_position;
pub mod season;
pub mod team;
pub mod team_alias;
pub mod team_lineage;
