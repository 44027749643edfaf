//! Server application models and type definitions.
//!
//! Application state shared by the HTTP handlers, database model type aliases and the
//! per-request owner identity.

pub mod app;
pub mod db;
pub mod owner;
