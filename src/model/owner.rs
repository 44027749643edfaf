use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidateEmailDto {
    pub email: String,
}

/// Result of checking whether an email belongs to an approved league owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OwnerValidationDto {
    pub valid: bool,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub team_logo: Option<String>,
    pub is_admin: bool,
    pub message: Option<String>,
}
