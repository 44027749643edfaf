//! Test fixture modules.
//!
//! - `auth` - Signed bearer tokens for approved-owner requests
//! - `league` - Teams, seasons, draft records and photos

pub mod auth;
pub mod league;
