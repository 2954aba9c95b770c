use jiff::tz::TimeZone;
use postgres_types::{FromSql, Type};
use tagorm_core::{err, stmt, Error, Result};
use tokio_postgres::Row;

/// Converts a PostgreSQL row into a tagorm row.
///
/// Values keep the width of their column type; narrowing to the field type
/// happens when the model loads the row.
pub(crate) fn postgres_to_tagorm(row: &Row) -> Result<stmt::Row> {
    let mut columns = Vec::with_capacity(row.len());
    let mut values = Vec::with_capacity(row.len());

    for (index, column) in row.columns().iter().enumerate() {
        columns.push(column.name().to_string());
        values.push(column_value(row, index, column.type_())?);
    }

    Ok(stmt::Row::new(columns, values))
}

fn column_value(row: &Row, index: usize, ty: &Type) -> Result<stmt::Value> {
    // The PostgreSQL type enum is opaque, so each type is matched by constant.
    Ok(match *ty {
        Type::BOOL => get::<bool>(row, index)?,
        Type::INT2 => get::<i16>(row, index)?,
        Type::INT4 => get::<i32>(row, index)?,
        Type::INT8 => get::<i64>(row, index)?,
        Type::FLOAT4 => get::<f32>(row, index)?,
        Type::FLOAT8 => get::<f64>(row, index)?,
        Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME => get::<String>(row, index)?,
        Type::BYTEA => row
            .try_get::<_, Option<Vec<u8>>>(index)
            .map_err(Error::driver)?
            .map(stmt::Value::Bytes)
            .unwrap_or_default(),
        Type::UUID => get::<uuid::Uuid>(row, index)?,
        Type::DATE => get::<jiff::civil::Date>(row, index)?,
        Type::TIMESTAMP => row
            .try_get::<_, Option<jiff::civil::DateTime>>(index)
            .map_err(Error::driver)?
            .map(|wall| wall.to_zoned(TimeZone::UTC).map(|zoned| zoned.timestamp()))
            .transpose()
            .map_err(|err| err!("timestamp column `{}`: {err}", row.columns()[index].name()))?
            .map(stmt::Value::Timestamp)
            .unwrap_or_default(),
        Type::TIMESTAMPTZ => get::<jiff::Timestamp>(row, index)?,
        Type::JSON | Type::JSONB => get::<serde_json::Value>(row, index)?,
        Type::BOOL_ARRAY => get_list::<bool>(row, index)?,
        Type::INT2_ARRAY => get_list::<i16>(row, index)?,
        Type::INT4_ARRAY => get_list::<i32>(row, index)?,
        Type::INT8_ARRAY => get_list::<i64>(row, index)?,
        Type::FLOAT4_ARRAY => get_list::<f32>(row, index)?,
        Type::FLOAT8_ARRAY => get_list::<f64>(row, index)?,
        Type::TEXT_ARRAY | Type::VARCHAR_ARRAY => get_list::<String>(row, index)?,
        Type::UUID_ARRAY => get_list::<uuid::Uuid>(row, index)?,
        _ => {
            return Err(err!(
                "unsupported PostgreSQL column type `{ty}` for column `{}`",
                row.columns()[index].name()
            ))
        }
    })
}

fn get<'a, T>(row: &'a Row, index: usize) -> Result<stmt::Value>
where
    T: FromSql<'a> + Into<stmt::Value>,
{
    Ok(row
        .try_get::<_, Option<T>>(index)
        .map_err(Error::driver)?
        .map(Into::into)
        .unwrap_or_default())
}

fn get_list<'a, T>(row: &'a Row, index: usize) -> Result<stmt::Value>
where
    T: FromSql<'a> + Into<stmt::Value>,
{
    Ok(row
        .try_get::<_, Option<Vec<T>>>(index)
        .map_err(Error::driver)?
        .map(|items| stmt::Value::List(items.into_iter().map(Into::into).collect()))
        .unwrap_or_default())
}
