use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{storage::PhotoStorage, util::token::TokenVerifier};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: Arc<dyn PhotoStorage>,
    pub token_verifier: TokenVerifier,
}
