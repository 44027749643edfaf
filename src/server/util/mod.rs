//! Utility functions and helpers for server operations.
//!
//! Bearer token verification and time helpers shared by the services and controllers.

pub mod time;
pub mod token;
