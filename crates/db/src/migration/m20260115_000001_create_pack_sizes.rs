//! Initial database migration.
//!
//! Creates the pack_sizes table holding the configured whole-pack sizes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(PACK_SIZES_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const PACK_SIZES_SQL: &str = r"
CREATE TABLE IF NOT EXISTS pack_sizes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    size INTEGER NOT NULL UNIQUE
);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS pack_sizes;
";
