//! Server application core modules.
//!
//! This module contains all server-side functionality for the Almanac league history service:
//! configuration, HTTP routing, database access, the championship attribution engine and the
//! other league services, bearer token verification and draft photo storage.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod storage;
pub mod util;
