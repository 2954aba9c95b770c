use super::{Name, Tags};
use crate::stmt::Type;

/// One struct member mapped to one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The member name as declared
    pub name: String,

    /// Column name, the snake cased member name
    pub column: String,

    pub ty: Type,

    pub tags: Tags,

    /// Explicit `type` tag, or the type inferred from `ty`. `None` when
    /// neither is available.
    pub sql_type: Option<String>,

    pub primary_key: bool,

    /// Foreign key fields are relations, not columns
    pub foreign_key: bool,
}

impl Field {
    pub fn new(name: &str, ty: Type, tags: &str) -> Field {
        let tags = Tags::parse(tags);

        let sql_type = match tags.value("type") {
            Some(explicit) if !explicit.is_empty() => Some(explicit.to_string()),
            _ => ty.sql_type().map(String::from),
        };

        Field {
            name: name.to_string(),
            column: Name::new(name).snake_case(),
            primary_key: tags.contains("primaryKey"),
            foreign_key: tags.contains("foreignKey"),
            ty,
            tags,
            sql_type,
        }
    }

    pub fn auto_increment(&self) -> bool {
        self.tags.contains("autoIncrement")
    }

    /// Returns `true` if the field maps to a column.
    pub fn is_column(&self) -> bool {
        !self.foreign_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inferred_sql_type() {
        let field = Field::new("BirthDate", Type::Date, "not null");
        assert_eq!(field.column, "birth_date");
        assert_eq!(field.sql_type.as_deref(), Some("date"));
        assert!(!field.primary_key);
    }

    #[test]
    fn explicit_type_wins() {
        let field = Field::new("Name", Type::String, "type:varchar(200);not null");
        assert_eq!(field.sql_type.as_deref(), Some("varchar(200)"));
    }

    #[test]
    fn unknown_type_without_tag() {
        let field = Field::new("Avatar", Type::Unknown("Image"), "");
        assert_eq!(field.sql_type, None);
    }

    #[test]
    fn key_flags() {
        let field = Field::new("ID", Type::I64, "primaryKey;autoIncrement");
        assert!(field.primary_key);
        assert!(field.auto_increment());
        assert!(field.is_column());
    }
}
