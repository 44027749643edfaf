//! Declarative test builder.
//!
//! Tables are queued while chaining and created in a single pass by `build()`.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_league_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_league_tables: false,
        }
    }

    /// Add every league table to the test database.
    ///
    /// Creates Team, TeamAlias, TeamLineage, DraftLocation, Season, DraftPosition,
    /// ApprovedOwner and DraftPhoto in dependency order.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_league_tables(mut self) -> Self {
        self.include_league_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; they are created in call order after
    /// the league tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context, creating all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_league_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::TeamAlias),
                schema.create_table_from_entity(entity::prelude::TeamLineage),
                schema.create_table_from_entity(entity::prelude::DraftLocation),
                schema.create_table_from_entity(entity::prelude::Season),
                schema.create_table_from_entity(entity::prelude::DraftPosition),
                schema.create_table_from_entity(entity::prelude::ApprovedOwner),
                schema.create_table_from_entity(entity::prelude::DraftPhoto),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
