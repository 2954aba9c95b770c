use crate::Serializer;

use tagorm_core::{
    schema::{ForeignKey, Table},
    Dialect, Result,
};

use indexmap::IndexMap;

/// One migration session: the tables to create and the foreign keys
/// collected from them.
///
/// Foreign keys are registered under their referencing table. Constraint
/// names are unique across the session; registering a name twice is a no-op.
#[derive(Debug)]
pub struct Migration {
    serializer: Serializer,
    tables: IndexMap<String, Table>,
    foreign_keys: IndexMap<String, Vec<ForeignKey>>,
}

/// The statements to run for one table, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStep {
    pub table: String,

    /// `CREATE TABLE IF NOT EXISTS` statement
    pub create: String,

    /// `ALTER TABLE` statements, to run once `create` succeeded
    pub foreign_keys: Vec<String>,
}

impl Migration {
    pub fn new(dialect: Dialect) -> Migration {
        Migration {
            serializer: Serializer::new(dialect),
            tables: IndexMap::new(),
            foreign_keys: IndexMap::new(),
        }
    }

    /// Adds a table to the session, rendering its DDL and registering its
    /// foreign keys.
    ///
    /// A table registered again under the same name replaces the earlier one
    /// but keeps its position.
    pub fn register(&mut self, mut table: Table) -> Result<()> {
        self.serializer.create_table(&mut table)?;

        for fk in &table.foreign_keys {
            self.register_foreign_key(fk.clone());
        }

        self.tables.insert(table.name.clone(), table);
        Ok(())
    }

    /// Returns `false` if a constraint with the same name was already
    /// registered.
    pub fn register_foreign_key(&mut self, fk: ForeignKey) -> bool {
        let exists = self
            .foreign_keys
            .values()
            .flatten()
            .any(|existing| existing.name == fk.name);

        if exists {
            return false;
        }

        self.foreign_keys.entry(fk.table.clone()).or_default().push(fk);
        true
    }

    pub fn foreign_keys(&self, table: &str) -> &[ForeignKey] {
        self.foreign_keys.get(table).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> + '_ {
        self.tables.values()
    }

    /// The statements of every registered table, in registration order.
    pub fn steps(&mut self) -> Result<Vec<MigrationStep>> {
        let serializer = self.serializer;
        let mut steps = Vec::with_capacity(self.tables.len());

        for table in self.tables.values_mut() {
            let create = serializer.create_table(table)?;

            let foreign_keys = self
                .foreign_keys
                .get(&table.name)
                .into_iter()
                .flatten()
                .map(|fk| serializer.foreign_key(fk))
                .collect();

            steps.push(MigrationStep {
                table: table.name.clone(),
                create,
                foreign_keys,
            });
        }

        Ok(steps)
    }
}
