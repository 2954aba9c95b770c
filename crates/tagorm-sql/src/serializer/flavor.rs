use super::Serializer;

use tagorm_core::Dialect;

impl Serializer {
    pub fn postgresql() -> Serializer {
        Serializer::new(Dialect::Postgresql)
    }

    pub fn mysql() -> Serializer {
        Serializer::new(Dialect::Mysql)
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(Dialect::Sqlite)
    }
}
