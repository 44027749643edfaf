//! Approved owner service.
//!
//! Owners are the people listed as a team's `owner_email` who also have an approved owner
//! record. Bearer tokens identify a caller by email; this service turns that email into an
//! [`OwnerContext`] for the request, or rejects it.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::owner::OwnerValidationDto,
    server::{
        data::approved_owner::ApprovedOwnerRepository,
        error::{auth::AuthError, Error},
        model::{
            db::{ApprovedOwnerModel, TeamModel},
            owner::OwnerContext,
        },
        service::retry::RetryContext,
        util::token::{extract_bearer, TokenVerifier},
    },
};

const NOT_AUTHORIZED_MESSAGE: &str = "Email not authorized for this league";

pub struct OwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerService<'a> {
    /// Creates a new instance of OwnerService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether `email` belongs to an approved league owner.
    ///
    /// An unknown email is not an error; it produces `valid: false` with a message.
    ///
    /// # Returns
    /// - `Ok(OwnerValidationDto)` - Validation outcome
    /// - `Err(Error::AuthError(AuthError::EmailRequired))` - Email was blank
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn validate_email(&self, email: &str) -> Result<OwnerValidationDto, Error> {
        if email.trim().is_empty() {
            return Err(AuthError::EmailRequired.into());
        }

        let validation = match self.find_owner(email).await? {
            Some((owner, team)) => OwnerValidationDto {
                valid: true,
                team_id: Some(team.id),
                team_name: Some(team.name),
                team_logo: team.logo,
                is_admin: owner.is_admin,
                message: None,
            },
            None => OwnerValidationDto {
                valid: false,
                team_id: None,
                team_name: None,
                team_logo: None,
                is_admin: false,
                message: Some(NOT_AUTHORIZED_MESSAGE.to_string()),
            },
        };

        Ok(validation)
    }

    /// Resolves the caller of a request from its `Authorization` header.
    ///
    /// # Arguments
    /// - `authorization` - Raw `Authorization` header value, if the request had one
    /// - `verifier` - Verifier for bearer token signatures
    ///
    /// # Returns
    /// - `Ok(OwnerContext)` - Caller is an approved owner
    /// - `Err(Error::AuthError(AuthError::MissingBearer))` - No bearer token was provided
    /// - `Err(Error::AuthError(AuthError::InvalidCredential))` - Token failed verification
    /// - `Err(Error::AuthError(AuthError::NotApprovedOwner))` - Token email is not an approved owner
    pub async fn resolve(
        &self,
        authorization: Option<&str>,
        verifier: &TokenVerifier,
    ) -> Result<OwnerContext, Error> {
        let token = authorization
            .and_then(extract_bearer)
            .ok_or(AuthError::MissingBearer)?;
        let claims = verifier.verify(token)?;

        let Some((owner, team)) = self.find_owner(&claims.email).await? else {
            return Err(AuthError::NotApprovedOwner(claims.email).into());
        };

        tracing::debug!(
            "Resolved approved owner ID {} for team {:?}",
            owner.id,
            team.name
        );

        Ok(OwnerContext {
            owner_id: owner.id,
            team_id: team.id,
            team_name: team.name,
            is_admin: owner.is_admin,
        })
    }

    async fn find_owner(
        &self,
        email: &str,
    ) -> Result<Option<(ApprovedOwnerModel, TeamModel)>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();
        let email = email.to_string();

        ctx.execute_with_retry("find approved owner", || {
            let db = db.clone();
            let email = email.clone();

            Box::pin(async move {
                Ok(ApprovedOwnerRepository::new(&db)
                    .find_by_email(&email)
                    .await?)
            })
        })
        .await
    }
}
