//! Test context returned by `TestBuilder`.
//!
//! Holds the in-memory SQLite database the test runs against.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment produced by [`TestBuilder::build`](crate::TestBuilder::build).
///
/// ```ignore
/// let mut test = TestBuilder::new().with_league_tables().build().await?;
///
/// let team = test.league().insert_team("Gridiron Gang", true).await?;
/// let repo = TeamRepository::new(&test.db);
/// ```
pub struct TestContext {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Connects to a fresh in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an empty database
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db })
    }

    /// Executes CREATE TABLE statements in order.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
