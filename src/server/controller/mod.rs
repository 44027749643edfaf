//! HTTP controller endpoints for the Almanac web API.
//!
//! Axum handlers for league history reads, approved owner validation, draft photo uploads
//! and the admin surface. Controllers extract request data, resolve the calling owner where
//! a route requires one, delegate to services and convert results into responses. Endpoints
//! are documented for OpenAPI with utoipa.

pub mod admin;
pub mod auth;
pub mod championship;
pub mod draft;
pub mod media;
pub mod photo;
pub mod season;
pub mod team;
pub mod util;
