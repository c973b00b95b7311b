use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityName, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
/// The partial unique indexes from the migrations are created for every added table
/// they apply to, so uniqueness among active rows is enforced as in production.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Team, Player};
///
/// let test = TestBuilder::new()
///     .with_table(Team)
///     .with_table(Player)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Names of the added tables, used to pick the indexes to create.
    table_names: Vec<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            table_names: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.table_names.push(entity.table_name().to_string());
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for match scheduling: Team and Match.
    pub fn with_match_tables(self) -> Self {
        self.with_table(Team).with_table(Match)
    }

    /// Adds every table involved in recording match results.
    ///
    /// Equivalent to `with_match_tables()` followed by MatchResult and Goal.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_match_result_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_match_result_tables(self) -> Self {
        self.with_match_tables()
            .with_table(MatchResult)
            .with_table(Goal)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables and indexes ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_active_unique_indexes(&self.table_names).await?;

        Ok(setup)
    }
}
