//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate, used throughout the repositories
//! and services.

/// Type alias for team database model.
///
/// # Fields (from `entity::team::Model`)
/// - `id` - Primary key
/// - `name` - Current team name, unique across the league
/// - `location` / `lat` / `lng` - Home town and its coordinates (nullable)
/// - `logo` - Logo reference (nullable)
/// - `owner_first_name` / `owner_last_name` / `owner_email` / `owner_phone` - Owner contact
///   details (nullable)
/// - `is_active` - Whether the team still plays in the league
/// - `created_at` - Timestamp when the record was created
pub type TeamModel = entity::team::Model;

/// Type alias for historical team name database model.
pub type TeamAliasModel = entity::team_alias::Model;

/// Type alias for predecessor → successor franchise link database model.
pub type TeamLineageModel = entity::team_lineage::Model;

/// Type alias for season database model.
///
/// # Fields (from `entity::season::Model`)
/// - `id` - Primary key
/// - `year` - Season year, unique
/// - `champion_id` / `co_champion_id` / `runner_up_id` - Team references (nullable)
/// - `is_co_championship` - Set when the title was shared
/// - `draft_location_id` - Where that season's draft took place (nullable)
/// - `note` / `group_photo` - Free text and photo reference (nullable)
pub type SeasonModel = entity::season::Model;

/// Type alias for draft location database model.
pub type DraftLocationModel = entity::draft_location::Model;

/// Type alias for draft order database model.
pub type DraftPositionModel = entity::draft_position::Model;

/// Type alias for approved owner database model.
pub type ApprovedOwnerModel = entity::approved_owner::Model;

/// Type alias for draft photo metadata database model.
pub type DraftPhotoModel = entity::draft_photo::Model;
