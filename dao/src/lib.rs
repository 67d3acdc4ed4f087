use ep_db_postgresql::db::PostgresDb;
use ep_db_sqlite::db::SqliteDb;

pub mod project;

pub enum Db {
    PostgresqlDb(PostgresDb),
    SqliteDb(SqliteDb),
}
