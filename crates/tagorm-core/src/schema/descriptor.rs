use super::{Field, Name, Table};
use crate::{stmt::Type, Error, Result};

/// Static description of a Rust type, produced by `#[derive(Model)]` or
/// written by hand.
///
/// Only descriptors with a [`Shape::Struct`] shape map to tables.
#[derive(Debug)]
pub struct Descriptor {
    /// The Rust type name
    pub name: &'static str,

    /// Explicit table name, used verbatim instead of the derived one
    pub table_name: Option<&'static str>,

    pub shape: Shape,
}

#[derive(Debug)]
pub enum Shape {
    /// A record with named members, in declaration order
    Struct(&'static [FieldDescriptor]),

    /// A single value
    Scalar,

    /// A sequence of values
    List,
}

/// One member of a described struct.
#[derive(Debug)]
pub struct FieldDescriptor {
    pub name: &'static str,

    /// Raw tag source, e.g. `"primaryKey;autoIncrement"`
    pub tags: &'static str,

    /// Skipped members are never mapped to columns
    pub exported: bool,

    pub ty: fn() -> Type,
}

impl Descriptor {
    pub fn is_struct(&self) -> bool {
        matches!(self.shape, Shape::Struct(_))
    }

    /// The table backing this type: the explicit override, or the snake
    /// cased type name pluralized.
    pub fn table_name(&self) -> String {
        match self.table_name {
            Some(name) => name.to_string(),
            None => Name::new(self.name).plural(),
        }
    }

    /// Walks the exported members in declaration order.
    pub fn fields(&self) -> Result<Vec<Field>> {
        let Shape::Struct(members) = self.shape else {
            return Err(Error::not_a_struct(self.name));
        };

        Ok(members
            .iter()
            .filter(|member| member.exported)
            .map(|member| Field::new(member.name, (member.ty)(), member.tags))
            .collect())
    }

    /// Derives the fields and builds the table model.
    pub fn table(&self) -> Result<Table> {
        let fields = self.fields()?;
        Table::build(self.table_name(), fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn string() -> Type {
        Type::String
    }

    fn i64() -> Type {
        Type::I64
    }

    static CATEGORY: Descriptor = Descriptor {
        name: "Category",
        table_name: None,
        shape: Shape::Struct(&[
            FieldDescriptor {
                name: "ID",
                tags: "primaryKey",
                exported: true,
                ty: i64,
            },
            FieldDescriptor {
                name: "cache",
                tags: "",
                exported: false,
                ty: string,
            },
            FieldDescriptor {
                name: "Name",
                tags: "not null;unique",
                exported: true,
                ty: string,
            },
        ]),
    };

    static SCALAR: Descriptor = Descriptor {
        name: "i64",
        table_name: None,
        shape: Shape::Scalar,
    };

    #[test]
    fn fields_skip_unexported_members() {
        let fields = CATEGORY.fields().unwrap();
        let names: Vec<_> = fields.iter().map(|field| field.name.as_str()).collect();
        assert_eq!(names, ["ID", "Name"]);
        assert_eq!(fields[1].tags.len(), 2);
    }

    #[test]
    fn table_name_is_pluralized() {
        assert_eq!(CATEGORY.table_name(), "categories");
    }

    #[test]
    fn table_name_override_is_verbatim() {
        let descriptor = Descriptor {
            name: "User",
            table_name: Some("examples"),
            shape: Shape::Struct(&[]),
        };
        assert_eq!(descriptor.table_name(), "examples");
    }

    #[test]
    fn scalar_is_not_a_struct() {
        let err = SCALAR.fields().unwrap_err();
        assert!(err.is_not_a_struct());
        assert!(SCALAR.table().unwrap_err().is_not_a_struct());

        let list = Descriptor {
            name: "Vec<User>",
            table_name: None,
            shape: Shape::List,
        };
        assert!(list.fields().unwrap_err().is_not_a_struct());
    }
}
