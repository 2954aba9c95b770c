use super::{Field, ForeignKey};
use crate::{Error, Result};

use indexmap::IndexMap;

/// In-memory model of one relation.
#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,

    /// All fields in declaration order, relation fields included
    pub fields: Vec<Field>,

    /// Index of the primary key field
    pub primary_key: Option<usize>,

    /// Fields with a single-column `UNIQUE` constraint
    pub unique: Vec<usize>,

    /// `uniqueIndex` group name to participating fields
    pub composite_unique: IndexMap<String, Vec<usize>>,

    /// Constraints declared by this table's relation fields
    pub foreign_keys: Vec<ForeignKey>,

    ddl: Ddl,
}

/// Render state of a table's `CREATE TABLE` statement.
///
/// A table is rendered at most once. The first rendered text is kept for the
/// lifetime of the table even if its fields change afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Ddl {
    #[default]
    Unrendered,
    Rendered(String),
}

impl Ddl {
    /// Moves to `Rendered`. An already rendered state is returned unchanged.
    pub fn advance(self, text: String) -> Ddl {
        match self {
            Ddl::Unrendered => Ddl::Rendered(text),
            rendered => rendered,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, Ddl::Rendered(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Ddl::Rendered(text) => Some(text),
            Ddl::Unrendered => None,
        }
    }
}

impl Table {
    /// Classifies `fields` by their tags.
    pub fn build(name: String, fields: Vec<Field>) -> Result<Table> {
        let mut primary_key: Option<usize> = None;
        let mut unique = vec![];
        let mut composite_unique: IndexMap<String, Vec<usize>> = IndexMap::new();
        let mut foreign_keys: Vec<ForeignKey> = vec![];

        for (index, field) in fields.iter().enumerate() {
            if field.foreign_key {
                let fk = ForeignKey::from_field(&name, field)?;

                if !foreign_keys.iter().any(|existing| existing.name == fk.name) {
                    foreign_keys.push(fk);
                }

                continue;
            }

            if field.primary_key {
                if let Some(existing) = primary_key {
                    return Err(Error::multiple_primary_keys(
                        &name,
                        &fields[existing].column,
                        &field.column,
                    ));
                }

                primary_key = Some(index);
            }

            if field.tags.contains("unique") {
                unique.push(index);
            }

            if field.tags.contains("uniqueIndex") {
                let Some(group) = field.tags.value("uniqueIndex").filter(|g| !g.is_empty()) else {
                    return Err(Error::invalid_tag(
                        &field.name,
                        "`uniqueIndex` needs a group name",
                    ));
                };

                composite_unique
                    .entry(group.to_string())
                    .or_default()
                    .push(index);
            }
        }

        Ok(Table {
            name,
            fields,
            primary_key,
            unique,
            composite_unique,
            foreign_keys,
            ddl: Ddl::Unrendered,
        })
    }

    pub fn primary_key_field(&self) -> Option<&Field> {
        self.primary_key.map(|index| &self.fields[index])
    }

    /// Fields that map to columns, in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_column())
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns().map(|field| field.column.as_str()).collect()
    }

    /// Column names prefixed with the table name, e.g. `users.id`.
    pub fn qualified_column_names(&self) -> Vec<String> {
        self.columns()
            .map(|field| format!("{}.{}", self.name, field.column))
            .collect()
    }

    pub fn unique_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.unique.iter().map(|index| &self.fields[*index])
    }

    pub fn composite_groups(&self) -> impl Iterator<Item = (&str, Vec<&Field>)> + '_ {
        self.composite_unique.iter().map(|(name, indices)| {
            let fields = indices.iter().map(|index| &self.fields[*index]).collect();
            (name.as_str(), fields)
        })
    }

    pub fn ddl(&self) -> &Ddl {
        &self.ddl
    }

    /// Returns the cached `CREATE TABLE` text, calling `render` on first use.
    ///
    /// A failed render leaves the table unrendered.
    pub fn render_ddl(&mut self, render: impl FnOnce(&Table) -> Result<String>) -> Result<&str> {
        if !self.ddl.is_rendered() {
            let text = render(self)?;
            self.ddl = std::mem::take(&mut self.ddl).advance(text);
        }

        Ok(self.ddl.text().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::Type;
    use pretty_assertions::assert_eq;

    fn user_fields() -> Vec<Field> {
        vec![
            Field::new("ID", Type::I64, "primaryKey;not null;autoIncrement"),
            Field::new("Name", Type::String, "type:varchar(200);not null;uniqueIndex:username_index"),
            Field::new("Email", Type::String, "unique"),
            Field::new("Username", Type::String, "not null;uniqueIndex:username_index"),
        ]
    }

    #[test]
    fn classify() {
        let table = Table::build("users".to_string(), user_fields()).unwrap();

        assert_eq!(table.primary_key_field().unwrap().column, "id");
        assert_eq!(table.unique, [2]);
        assert_eq!(table.composite_unique["username_index"], [1, 3]);
        assert!(table.foreign_keys.is_empty());
        assert_eq!(table.column_names(), ["id", "name", "email", "username"]);
        assert_eq!(table.qualified_column_names()[1], "users.name");
    }

    #[test]
    fn second_primary_key_is_rejected() {
        let fields = vec![
            Field::new("ID", Type::I64, "primaryKey"),
            Field::new("UUID", Type::Uuid, "primaryKey"),
        ];

        let err = Table::build("users".to_string(), fields).unwrap_err();
        assert!(err.is_multiple_primary_keys());
        assert_eq!(
            err.to_string(),
            "table `users` declares more than one primary key (`id`, `uuid`)"
        );
    }

    #[test]
    fn unnamed_unique_index() {
        let fields = vec![Field::new("Name", Type::String, "uniqueIndex")];
        let err = Table::build("users".to_string(), fields).unwrap_err();
        assert!(err.is_invalid_tag());
    }

    #[test]
    fn render_once() {
        let mut table = Table::build("users".to_string(), user_fields()).unwrap();
        assert_eq!(table.ddl(), &Ddl::Unrendered);

        let first = table.render_ddl(|t| Ok(format!("{} v1", t.name))).unwrap().to_string();
        table.name = "renamed".to_string();
        let second = table.render_ddl(|t| Ok(format!("{} v2", t.name))).unwrap();

        assert_eq!(first, "users v1");
        assert_eq!(second, "users v1");
    }

    #[test]
    fn failed_render_stays_unrendered() {
        let mut table = Table::build("users".to_string(), user_fields()).unwrap();
        assert!(table
            .render_ddl(|_| Err(crate::err!("boom")))
            .is_err());
        assert!(!table.ddl().is_rendered());
    }

    #[test]
    fn advance_is_one_way() {
        let ddl = Ddl::Unrendered.advance("a".to_string());
        assert_eq!(ddl.clone().advance("b".to_string()), Ddl::Rendered("a".to_string()));
    }
}
