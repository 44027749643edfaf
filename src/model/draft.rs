use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::team::TeamSummaryDto;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DraftPositionDto {
    pub id: i32,
    pub draft_position: i32,
    pub year: i32,
    pub team: TeamSummaryDto,
}
