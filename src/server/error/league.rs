use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("No season found for year {0}")]
    SeasonNotFound(i32),
    #[error("No team found with ID {0}")]
    TeamNotFound(i32),
    #[error("No team alias found with ID {0}")]
    AliasNotFound(i32),
    #[error("No team found for alias {0:?}")]
    UnknownAlias(String),
    #[error("Team name {0:?} is already in use")]
    TeamNameTaken(String),
    #[error("Team alias {0:?} is already in use")]
    AliasTaken(String),
}

impl IntoResponse for LeagueError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::SeasonNotFound(_) => error_response(StatusCode::NOT_FOUND, "Season not found"),
            Self::TeamNotFound(_) => error_response(StatusCode::NOT_FOUND, "Team not found"),
            Self::AliasNotFound(_) | Self::UnknownAlias(_) => {
                error_response(StatusCode::NOT_FOUND, "Alias not found")
            }
            Self::TeamNameTaken(_) | Self::AliasTaken(_) => {
                error_response(StatusCode::CONFLICT, self.to_string())
            }
        }
    }
}
