//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories, the championship attribution engine and photo storage.
//! Database reads and writes run inside a [`retry::RetryContext`] so transient connection
//! failures are retried with exponential backoff.

pub mod championship;
pub mod draft;
pub mod owner;
pub mod photo;
pub mod retry;
pub mod season;
pub mod team;
