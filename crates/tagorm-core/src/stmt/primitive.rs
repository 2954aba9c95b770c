use super::{Date, Json, Type, Value};
use crate::{Error, Result};

/// Conversion hooks between a Rust field type and tagorm's [`Value`].
///
/// Every field of a derived model must implement this trait. `ty` feeds SQL
/// type inference; `to_value` and `load` move data to and from the
/// execution layer.
pub trait Primitive: Sized {
    /// The declared type of fields holding this Rust type.
    fn ty() -> Type;

    /// Converts a field value to a statement value.
    fn to_value(&self) -> Value;

    /// Converts a value read from a row back to the field type.
    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_integer {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                fn load(value: Value) -> Result<Self> {
                    value
                        .as_integer()
                        .and_then(|v| <$ty>::try_from(v).ok())
                        .ok_or_else(|| Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_integer! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

impl Primitive for f32 {
    fn ty() -> Type {
        Type::F32
    }

    fn to_value(&self) -> Value {
        Value::F32(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F32(v) => Ok(v),
            Value::F64(v) => Ok(v as f32),
            value => match value.as_integer() {
                Some(v) => Ok(v as f32),
                None => Err(Error::type_conversion(value, "f32")),
            },
        }
    }
}

impl Primitive for f64 {
    fn ty() -> Type {
        Type::F64
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::F32(v) => Ok(v.into()),
            value => match value.as_integer() {
                Some(v) => Ok(v as f64),
                None => Err(Error::type_conversion(value, "f64")),
            },
        }
    }
}

impl Primitive for bool {
    fn ty() -> Type {
        Type::Bool
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl Primitive for String {
    fn ty() -> Type {
        Type::String
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        value.into_string()
    }
}

impl Primitive for uuid::Uuid {
    fn ty() -> Type {
        Type::Uuid
    }

    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::String(v) => Ok(v.parse()?),
            value => Err(Error::type_conversion(value, "Uuid")),
        }
    }
}

impl Primitive for jiff::Timestamp {
    fn ty() -> Type {
        Type::Timestamp
    }

    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(v) => Ok(v),
            Value::String(v) => Ok(v.parse()?),
            value => Err(Error::type_conversion(value, "Timestamp")),
        }
    }
}

impl Primitive for Date {
    fn ty() -> Type {
        Type::Date
    }

    fn to_value(&self) -> Value {
        Value::Date(self.into_inner())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Date(v) => Ok(Date::from(v)),
            Value::Timestamp(v) => Ok(Date::from(v.to_zoned(jiff::tz::TimeZone::UTC).date())),
            Value::String(v) => v.parse(),
            value => Err(Error::type_conversion(value, "Date")),
        }
    }
}

impl Primitive for Json {
    fn ty() -> Type {
        Type::Json
    }

    fn to_value(&self) -> Value {
        Value::Json(serde_json::Value::Object(self.0.clone()))
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null | Value::Json(serde_json::Value::Null) => Ok(Json::default()),
            Value::Json(serde_json::Value::Object(map)) => Ok(Json(map)),
            Value::String(v) => v.parse(),
            value => Err(Error::type_conversion(value, "Json")),
        }
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn ty() -> Type {
        T::ty()
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::load(value).map(Some),
        }
    }
}

impl<T: Primitive> Primitive for Vec<T> {
    fn ty() -> Type {
        Type::list(T::ty())
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Primitive::to_value).collect())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(vec![]),
            Value::List(items) => items.into_iter().map(T::load).collect(),
            Value::Bytes(bytes) => bytes.into_iter().map(|b| T::load(Value::U8(b))).collect(),
            value => Err(Error::type_conversion(value, "List")),
        }
    }
}
