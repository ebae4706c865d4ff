//! Database seeder for Packwise development and testing.
//!
//! Installs the default pack sizes, skipping any that already exist.
//!
//! Usage: cargo run --bin seeder

use sea_orm_migration::MigratorTrait;

use packwise_db::migration::Migrator;
use packwise_db::{PackSizeError, PackSizeRepository, DEFAULT_PACK_SIZES};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://packwise.db?mode=rwc".to_string());

    println!("Connecting to database...");
    let db = packwise_db::connect(&database_url, 5, 1)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    println!("Seeding default pack sizes...");
    let repo = PackSizeRepository::new(db);
    for &size in &DEFAULT_PACK_SIZES {
        match repo.create(size).await {
            Ok(row) => println!("  Added pack size {} (id {})", row.size, row.id),
            Err(PackSizeError::Conflict) => {
                println!("  Pack size {size} already exists, skipping...");
            }
            Err(e) => panic!("Failed to seed pack size {size}: {e}"),
        }
    }

    println!("Seeding complete!");
}
