use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::Error,
    model::{app::AppState, owner::OwnerContext},
    service::owner::OwnerService,
};

/// Resolves the approved owner making a request from its bearer token
///
/// # Arguments
/// - `state`: Application state with database connection & token verifier
/// - `headers`: Request headers
///
/// # Returns
/// - `Ok(OwnerContext)`: Caller is an approved owner
/// - `Err(Error::AuthError(AuthError::MissingBearer))`: No usable `Authorization` header
/// - `Err(Error::AuthError(AuthError::InvalidCredential))`: Token failed verification
/// - `Err(Error::AuthError(AuthError::NotApprovedOwner))`: Token email is not an approved owner
/// - `Err(Error)`: Internal errors (database query failures)
pub async fn get_owner(state: &AppState, headers: &HeaderMap) -> Result<OwnerContext, Error> {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    OwnerService::new(&state.db)
        .resolve(authorization, &state.token_verifier)
        .await
}

/// Resolves the calling owner and requires admin rights
///
/// # Returns
/// - `Ok(OwnerContext)`: Caller is an approved owner with admin rights
/// - `Err(Error::AuthError(AuthError::AdminRequired))`: Caller is not an admin
/// - `Err(Error)`: Any error from [`get_owner`]
pub async fn get_admin(state: &AppState, headers: &HeaderMap) -> Result<OwnerContext, Error> {
    let owner = get_owner(state, headers).await?;
    owner.require_admin()?;

    Ok(owner)
}
