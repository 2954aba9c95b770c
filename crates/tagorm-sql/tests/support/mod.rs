#![allow(dead_code)]

use tagorm_core::{
    schema::{Descriptor, FieldDescriptor, Shape, Table},
    stmt::Type,
};

fn i32() -> Type {
    Type::I32
}

fn i64() -> Type {
    Type::I64
}

fn string() -> Type {
    Type::String
}

fn date() -> Type {
    Type::Date
}

fn json() -> Type {
    Type::Json
}

fn uuid() -> Type {
    Type::Uuid
}

fn strings() -> Type {
    Type::list(Type::String)
}

fn profile() -> Type {
    Type::Model(|| &PROFILE)
}

fn contact() -> Type {
    Type::Model(|| &CONTACT)
}

fn token() -> Type {
    Type::Model(|| &TOKEN)
}

pub static PROFILE: Descriptor = Descriptor {
    name: "UserProfile",
    table_name: None,
    shape: Shape::Struct(&[
        FieldDescriptor { name: "ID", tags: "primaryKey", exported: true, ty: i32 },
        FieldDescriptor { name: "Name", tags: "not null", exported: true, ty: string },
        FieldDescriptor { name: "UserID", tags: "not null;unique", exported: true, ty: i32 },
    ]),
};

pub static CONTACT: Descriptor = Descriptor {
    name: "Contact",
    table_name: None,
    shape: Shape::Struct(&[
        FieldDescriptor { name: "ID", tags: "primaryKey", exported: true, ty: i32 },
        FieldDescriptor { name: "Mobile", tags: "", exported: true, ty: string },
        FieldDescriptor { name: "UserID", tags: "not null;unique", exported: true, ty: i32 },
    ]),
};

pub static TOKEN: Descriptor = Descriptor {
    name: "Token",
    table_name: None,
    shape: Shape::Struct(&[
        FieldDescriptor { name: "UUID", tags: "primaryKey;not null", exported: true, ty: uuid },
        FieldDescriptor { name: "UserID", tags: "not null", exported: true, ty: i32 },
        FieldDescriptor { name: "Privileges", tags: "", exported: true, ty: strings },
    ]),
};

pub static USER: Descriptor = Descriptor {
    name: "User",
    table_name: Some("examples"),
    shape: Shape::Struct(&[
        FieldDescriptor {
            name: "ID",
            tags: "primaryKey;not null;autoIncrement",
            exported: true,
            ty: i64,
        },
        FieldDescriptor {
            name: "Name",
            tags: "type:varchar(200);not null;uniqueIndex:username_index",
            exported: true,
            ty: string,
        },
        FieldDescriptor {
            name: "Age",
            tags: "not null;default:20;check:age > 20",
            exported: true,
            ty: i64,
        },
        FieldDescriptor { name: "BirthDate", tags: "not null", exported: true, ty: date },
        FieldDescriptor { name: "Details", tags: "type:jsonb", exported: true, ty: json },
        FieldDescriptor {
            name: "Username",
            tags: "not null;uniqueIndex:username_index;check:age > 20",
            exported: true,
            ty: string,
        },
        FieldDescriptor {
            name: "Profile",
            tags: "foreignKey:UserID->ID;onDelete:CASCADE; onUpdate:CASCADE",
            exported: true,
            ty: profile,
        },
        FieldDescriptor {
            name: "Contact",
            tags: "foreignKey:UserID->ID;onDelete:CASCADE; onUpdate:CASCADE",
            exported: true,
            ty: contact,
        },
        FieldDescriptor {
            name: "Token",
            tags: "foreignKey:UserID->ID;onDelete:CASCADE; onUpdate:CASCADE",
            exported: true,
            ty: token,
        },
    ]),
};

/// `ID` serial key plus two plain columns.
pub static WIDGET: Descriptor = Descriptor {
    name: "Widget",
    table_name: None,
    shape: Shape::Struct(&[
        FieldDescriptor { name: "ID", tags: "primaryKey;autoIncrement", exported: true, ty: i64 },
        FieldDescriptor { name: "Name", tags: "not null", exported: true, ty: string },
        FieldDescriptor { name: "Price", tags: "", exported: true, ty: i64 },
    ]),
};

/// Keyed by a date column.
pub static HOLIDAY: Descriptor = Descriptor {
    name: "Holiday",
    table_name: None,
    shape: Shape::Struct(&[
        FieldDescriptor { name: "Day", tags: "primaryKey", exported: true, ty: date },
        FieldDescriptor { name: "Name", tags: "not null", exported: true, ty: string },
    ]),
};

pub fn table(descriptor: &Descriptor) -> Table {
    descriptor.table().unwrap()
}
