//! Identity of the approved owner making a request.

use crate::server::error::auth::AuthError;

/// Approved owner resolved from a verified bearer credential.
///
/// Built fresh for every request by the owner service and passed explicitly to whatever
/// needs it; nothing about the caller is kept between requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnerContext {
    /// Approved owner record ID, recorded as the uploader of photos
    pub owner_id: i32,
    pub team_id: i32,
    pub team_name: String,
    pub is_admin: bool,
}

impl OwnerContext {
    /// # Returns
    /// - `Ok(())` - Owner holds admin rights
    /// - `Err(AuthError::AdminRequired)` - Owner is not an admin
    pub fn require_admin(&self) -> Result<(), AuthError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AuthError::AdminRequired(self.owner_id))
        }
    }
}
