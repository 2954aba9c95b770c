use jiff::tz::TimeZone;
use postgres_types::{private::BytesMut, to_sql_checked, IsNull, Kind, ToSql, Type};
use tagorm_core::stmt::{self, Value as CoreValue};

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Sync + Send>;

/// Binds a tagorm value to a PostgreSQL parameter.
///
/// Integers are narrowed or widened to the width of the target column.
#[derive(Debug)]
pub struct Value(pub(crate) CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

macro_rules! int_to_sql {
    ($value:expr, $ty:expr, $out:expr) => {{
        let value = $value;
        match *$ty {
            Type::INT2 => i16::try_from(value)?.to_sql($ty, $out),
            Type::INT4 => i32::try_from(value)?.to_sql($ty, $out),
            Type::INT8 => i64::try_from(value)?.to_sql($ty, $out),
            Type::FLOAT4 => (value as f32).to_sql($ty, $out),
            Type::FLOAT8 => (value as f64).to_sql($ty, $out),
            Type::TEXT | Type::VARCHAR => value.to_string().to_sql($ty, $out),
            _ => Err(mismatch(&CoreValue::from(value), $ty)),
        }
    }};
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        match &self.0 {
            stmt::Value::Null => Ok(IsNull::Yes),
            stmt::Value::Bool(value) => value.to_sql(ty, out),
            stmt::Value::I8(value) => int_to_sql!(*value, ty, out),
            stmt::Value::I16(value) => int_to_sql!(*value, ty, out),
            stmt::Value::I32(value) => int_to_sql!(*value, ty, out),
            stmt::Value::I64(value) => int_to_sql!(*value, ty, out),
            stmt::Value::U8(value) => int_to_sql!(*value, ty, out),
            stmt::Value::U16(value) => int_to_sql!(*value, ty, out),
            stmt::Value::U32(value) => int_to_sql!(*value, ty, out),
            stmt::Value::U64(value) => int_to_sql!(*value, ty, out),
            stmt::Value::F32(value) => match *ty {
                Type::FLOAT8 => f64::from(*value).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::F64(value) => match *ty {
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::String(value) => value.to_sql(ty, out),
            stmt::Value::Bytes(value) => value.to_sql(ty, out),
            stmt::Value::Uuid(value) => value.to_sql(ty, out),
            stmt::Value::Date(value) => value.to_sql(ty, out),
            // `timestamp` columns hold the UTC wall clock of the instant
            stmt::Value::Timestamp(value) => match *ty {
                Type::TIMESTAMP => value.to_zoned(TimeZone::UTC).datetime().to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::Json(value) => match *ty {
                Type::TEXT | Type::VARCHAR => value.to_string().to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::List(items) if *ty == Type::BYTEA => {
                let bytes = items
                    .iter()
                    .map(|item| match item {
                        stmt::Value::U8(b) => Ok(*b),
                        item => Err(mismatch(item, ty)),
                    })
                    .collect::<Result<Vec<u8>, _>>()?;
                bytes.to_sql(ty, out)
            }
            stmt::Value::List(items) => {
                if !matches!(ty.kind(), Kind::Array(_)) {
                    return Err(mismatch(&self.0, ty));
                }

                let items: Vec<Value> = items.iter().cloned().map(Value).collect();
                items.to_sql(ty, out)
            }
        }
    }

    fn accepts(ty: &Type) -> bool {
        if let Kind::Array(member) = ty.kind() {
            return Self::accepts(member);
        }

        matches!(
            *ty,
            Type::BOOL
                | Type::INT2
                | Type::INT4
                | Type::INT8
                | Type::FLOAT4
                | Type::FLOAT8
                | Type::TEXT
                | Type::VARCHAR
                | Type::BPCHAR
                | Type::NAME
                | Type::BYTEA
                | Type::UUID
                | Type::DATE
                | Type::TIMESTAMP
                | Type::TIMESTAMPTZ
                | Type::JSON
                | Type::JSONB
        )
    }

    to_sql_checked!();
}

fn mismatch(value: &CoreValue, ty: &Type) -> BoxError {
    format!("cannot encode {} as PostgreSQL `{ty}`", value.kind_name()).into()
}
