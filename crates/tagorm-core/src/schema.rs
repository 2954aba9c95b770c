mod descriptor;
pub use descriptor::{Descriptor, FieldDescriptor, Shape};

mod field;
pub use field::Field;

mod foreign_key;
pub use foreign_key::ForeignKey;

mod name;
pub use name::Name;

mod table;
pub use table::{Ddl, Table};

mod tag;
pub use tag::Tags;
