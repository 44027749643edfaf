//! Data transfer objects shared by the HTTP API and its consumers.

pub mod api;
pub mod championship;
pub mod draft;
pub mod owner;
pub mod photo;
pub mod season;
pub mod team;
