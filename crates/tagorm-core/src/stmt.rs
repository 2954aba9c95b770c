mod date;
pub use date::Date;

mod json;
pub use json::Json;

mod primitive;
pub use primitive::Primitive;

mod row;
pub use row::Row;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
