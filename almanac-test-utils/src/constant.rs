//! Test configuration constants.
//!
//! Placeholder values shared by every test that needs credentials. None of these are real.

/// HS256 secret used to sign bearer tokens in tests.
///
/// At least 32 bytes so it also passes the server's configuration checks.
pub static TEST_JWT_SECRET: &str = "almanac-test-secret-0123456789abcdef";

/// Owner email assigned to teams created with an owner by the league fixtures.
pub static TEST_OWNER_EMAIL: &str = "owner@example.com";
