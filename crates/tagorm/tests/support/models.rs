use tagorm::{Date, Json, Model};

#[derive(Debug, Default, Clone, PartialEq, Model)]
pub struct Category {
    #[orm("primaryKey;autoIncrement")]
    pub id: i32,

    #[orm("not null;unique")]
    pub name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Model)]
pub struct Profile {
    #[orm("primaryKey;autoIncrement")]
    pub id: i32,

    #[orm("not null")]
    pub bio: String,

    #[orm("not null;unique")]
    pub user_id: i32,
}

#[derive(Debug, Default, Clone, PartialEq, Model)]
pub struct User {
    #[orm("primaryKey;autoIncrement")]
    pub id: i32,

    #[orm("type:varchar(100);not null;uniqueIndex:idx_name_email")]
    pub name: String,

    #[orm("not null;uniqueIndex:idx_name_email")]
    pub email: String,

    #[orm("check:age >= 0;default:18")]
    pub age: i16,

    pub birthday: Option<Date>,

    pub tags: Vec<String>,

    pub settings: Json,

    #[orm("foreignKey:UserID->id;onDelete:CASCADE")]
    pub profile: Profile,

    #[orm(skip)]
    pub session: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Model)]
#[orm(table = "audit_log")]
pub struct AuditEntry {
    #[orm("primaryKey")]
    pub id: uuid::Uuid,

    pub message: String,

    pub at: Option<jiff::Timestamp>,
}

/// A coordinate pair with no SQL mapping of its own.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl tagorm::Primitive for Point {
    fn ty() -> tagorm::Type {
        tagorm::Type::Unknown("Point")
    }

    fn to_value(&self) -> tagorm::Value {
        tagorm::Value::String(format!("({},{})", self.x, self.y))
    }

    fn load(value: tagorm::Value) -> tagorm::Result<Self> {
        Err(tagorm::err!("cannot load a point from {value}"))
    }
}

/// Lacks a `type` tag on `location`, so its table cannot be rendered.
#[derive(Debug, Default, Clone, PartialEq, Model)]
pub struct Place {
    #[orm("primaryKey;autoIncrement")]
    pub id: i32,

    pub location: Point,
}
