use crate::schema::Descriptor;

use std::fmt;

/// The declared type of a model field, from tagorm's point of view.
///
/// The type drives SQL type inference for columns that carry no explicit
/// `type` tag. See [`Type::sql_type`].
#[derive(Clone)]
pub enum Type {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    Uuid,

    /// A civil date without time of day
    Date,

    /// An instant in time
    Timestamp,

    /// A JSON object
    Json,

    /// A homogeneous list
    List(Box<Type>),

    /// Another model, referenced through a `foreignKey` tag
    Model(fn() -> &'static Descriptor),

    /// A type with no SQL mapping. Columns of this type need a `type` tag.
    Unknown(&'static str),
}

impl Type {
    pub fn list(item: Type) -> Type {
        Type::List(Box::new(item))
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Type::I8 | Type::I16 | Type::I32 | Type::I64 | Type::U8 | Type::U16 | Type::U32 | Type::U64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Type::F32 | Type::F64)
    }

    /// Returns the referenced model's descriptor for `Model` types and lists
    /// of models.
    pub fn model(&self) -> Option<&'static Descriptor> {
        match self {
            Type::Model(descriptor) => Some(descriptor()),
            Type::List(item) => item.model(),
            _ => None,
        }
    }

    /// Infers the SQL column type, in lower case.
    ///
    /// Returns `None` when the type has no mapping. Rendering such a column
    /// without an explicit `type` tag is an error.
    pub fn sql_type(&self) -> Option<&'static str> {
        Some(match self {
            Type::String => "varchar(255)",
            ty if ty.is_integer() => "integer",
            ty if ty.is_float() => "real",
            Type::Bool => "boolean",
            Type::Uuid => "uuid",
            Type::Date => "date",
            Type::Timestamp => "timestamptz",
            Type::Json => "json",
            Type::List(item) => match &**item {
                Type::String => "text[]",
                Type::U8 => "bytea",
                ty if ty.is_integer() => "integer[]",
                ty if ty.is_float() => "real[]",
                Type::Bool => "boolean[]",
                Type::List(inner) if matches!(**inner, Type::U8) => "bytea[]",
                _ => "text[]",
            },
            _ => return None,
        })
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::List(a), Type::List(b)) => a == b,
            (Type::Model(a), Type::Model(b)) => std::ptr::eq(a(), b()),
            (Type::Unknown(a), Type::Unknown(b)) => a == b,
            (a, b) => std::mem::discriminant(a) == std::mem::discriminant(b),
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => fmt.write_str("Bool"),
            Type::I8 => fmt.write_str("I8"),
            Type::I16 => fmt.write_str("I16"),
            Type::I32 => fmt.write_str("I32"),
            Type::I64 => fmt.write_str("I64"),
            Type::U8 => fmt.write_str("U8"),
            Type::U16 => fmt.write_str("U16"),
            Type::U32 => fmt.write_str("U32"),
            Type::U64 => fmt.write_str("U64"),
            Type::F32 => fmt.write_str("F32"),
            Type::F64 => fmt.write_str("F64"),
            Type::String => fmt.write_str("String"),
            Type::Uuid => fmt.write_str("Uuid"),
            Type::Date => fmt.write_str("Date"),
            Type::Timestamp => fmt.write_str("Timestamp"),
            Type::Json => fmt.write_str("Json"),
            Type::List(item) => fmt.debug_tuple("List").field(item).finish(),
            Type::Model(descriptor) => write!(fmt, "Model({})", descriptor().name),
            Type::Unknown(name) => fmt.debug_tuple("Unknown").field(name).finish(),
        }
    }
}
