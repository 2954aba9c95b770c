use super::{Formatter, Params, Serializer, ToSql};

use tagorm_core::schema::ForeignKey;

struct AddForeignKey<'a>(&'a ForeignKey);

impl Serializer {
    /// Renders the `ALTER TABLE ... ADD CONSTRAINT` statement for `fk`.
    pub fn foreign_key(&self, fk: &ForeignKey) -> String {
        self.serialize(AddForeignKey(fk)).sql
    }
}

impl ToSql for AddForeignKey<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let fk = self.0;

        fmt!(
            f,
            "ALTER TABLE ", &fk.table,
            " ADD CONSTRAINT ", &fk.name,
            " FOREIGN KEY (", &fk.column, ")",
            " REFERENCES ", &fk.parent_table, " (", &fk.parent_column, ")",
        );

        if let Some(action) = &fk.on_delete {
            fmt!(f, " ON DELETE ", action);
        }

        if let Some(action) = &fk.on_update {
            fmt!(f, " ON UPDATE ", action);
        }
    }
}
