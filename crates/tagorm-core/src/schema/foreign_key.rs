use super::{Field, Name};
use crate::{Error, Result};

/// A foreign key constraint, rendered as a separate `ALTER TABLE` statement.
///
/// The constraint is declared on a relation field of the parent model. The
/// field's model is the referencing table and carries the key column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Constraint name, `{parent_table}_{field}_fkey`
    pub name: String,

    /// The referencing table, altered to add the constraint
    pub table: String,

    /// Key column in the referencing table
    pub column: String,

    /// The referenced table, i.e. the model declaring the relation field
    pub parent_table: String,

    /// Referenced column in the parent table
    pub parent_column: String,

    pub on_delete: Option<String>,

    pub on_update: Option<String>,
}

impl ForeignKey {
    /// Builds the constraint declared by a `foreignKey:<field>-><parentColumn>`
    /// tag on `field`, a member of the model backed by `parent_table`.
    pub fn from_field(parent_table: &str, field: &Field) -> Result<ForeignKey> {
        let source = field.tags.value("foreignKey").unwrap_or_default();

        let (column, parent_column) = match source.split_once("->") {
            Some((column, parent_column))
                if !column.trim().is_empty()
                    && !parent_column.trim().is_empty()
                    && !parent_column.contains("->") =>
            {
                (column.trim(), parent_column.trim())
            }
            _ => {
                return Err(Error::invalid_tag(
                    &field.name,
                    format!("foreign key `{source}` is not of the form `field->parentColumn`"),
                ))
            }
        };

        let Some(model) = field.ty.model() else {
            return Err(Error::invalid_tag(
                &field.name,
                "a foreign key field must hold another model",
            ));
        };

        let parent_table = Name::new(parent_table).snake_case();

        Ok(ForeignKey {
            name: format!("{parent_table}_{}_fkey", field.column),
            table: model.table_name(),
            column: Name::new(column).snake_case(),
            parent_table,
            parent_column: Name::new(parent_column).snake_case(),
            on_delete: action(field, "onDelete"),
            on_update: action(field, "onUpdate"),
        })
    }
}

fn action(field: &Field, key: &str) -> Option<String> {
    field
        .tags
        .value(key)
        .filter(|action| !action.is_empty())
        .map(String::from)
}
