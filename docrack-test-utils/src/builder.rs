//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    include_rack_tables: bool,

    // Database fixtures to insert
    users: Vec<(String, String)>, // (username, password)
    racks: Vec<(String, i32)>,    // (name, height)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            include_rack_tables: false,
            users: Vec::new(),
            racks: Vec::new(),
        }
    }

    /// Add the user table to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add the rack, equipment, port and connection tables to the test database.
    pub fn with_rack_tables(mut self) -> Self {
        self.include_rack_tables = true;
        self
    }

    /// Add every DocRack table to the test database.
    pub fn with_all_tables(self) -> Self {
        self.with_user_tables().with_rack_tables()
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use docrack_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), docrack_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(DocrackRack)
    ///     .with_table(DocrackEquipment)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the given credentials.
    ///
    /// The user table must be included via `with_user_tables` or `with_all_tables`.
    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.push((username.into(), password.into()));
        self
    }

    /// Insert an empty rack.
    ///
    /// The rack tables must be included via `with_rack_tables` or `with_all_tables`.
    pub fn with_rack(mut self, name: impl Into<String>, height: i32) -> Self {
        self.racks.push((name.into(), height));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (user tables, rack tables, then custom tables)
    /// 2. Inserts database fixtures (users, racks)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::DocrackUser));
        }

        if self.include_rack_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::DocrackRack),
                schema.create_table_from_entity(entity::prelude::DocrackEquipment),
                schema.create_table_from_entity(entity::prelude::DocrackPort),
                schema.create_table_from_entity(entity::prelude::DocrackConnection),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (username, password) in self.users {
            setup.user().insert_user(&username, &password).await?;
        }

        for (name, height) in self.racks {
            setup.rack().insert_rack(&name, height).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
