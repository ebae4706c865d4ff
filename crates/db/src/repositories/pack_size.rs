//! Pack-size repository for managing the configured whole-pack sizes.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::entities::pack_sizes;

/// Pack sizes installed by [`PackSizeRepository::reset_to_default`].
pub const DEFAULT_PACK_SIZES: [i64; 5] = [250, 500, 1000, 2000, 5000];

/// Error types for pack-size operations.
#[derive(Debug, thiserror::Error)]
pub enum PackSizeError {
    /// A pack size with the same item count already exists.
    #[error("pack size already exists")]
    Conflict,

    /// No pack size with the given id.
    #[error("pack size not found")]
    NotFound,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Pack-size repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct PackSizeRepository {
    db: DatabaseConnection,
}

impl PackSizeRepository {
    /// Creates a new pack-size repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all configured pack sizes, ordered by size ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<pack_sizes::Model>, PackSizeError> {
        let rows = pack_sizes::Entity::find()
            .order_by_asc(pack_sizes::Column::Size)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Creates a new pack size.
    ///
    /// # Errors
    ///
    /// Returns [`PackSizeError::Conflict`] if the size already exists.
    pub async fn create(&self, size: i64) -> Result<pack_sizes::Model, PackSizeError> {
        let existing = pack_sizes::Entity::find()
            .filter(pack_sizes::Column::Size.eq(size))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(PackSizeError::Conflict);
        }

        let row = pack_sizes::ActiveModel {
            size: Set(size),
            ..Default::default()
        };
        Ok(row.insert(&self.db).await?)
    }

    /// Updates an existing pack size.
    ///
    /// # Errors
    ///
    /// Returns [`PackSizeError::NotFound`] if the id does not exist, or
    /// [`PackSizeError::Conflict`] if another row already has the size.
    pub async fn update(&self, id: i64, size: i64) -> Result<pack_sizes::Model, PackSizeError> {
        let Some(existing) = pack_sizes::Entity::find_by_id(id).one(&self.db).await? else {
            return Err(PackSizeError::NotFound);
        };

        let duplicate = pack_sizes::Entity::find()
            .filter(pack_sizes::Column::Size.eq(size))
            .filter(pack_sizes::Column::Id.ne(id))
            .one(&self.db)
            .await?;
        if duplicate.is_some() {
            return Err(PackSizeError::Conflict);
        }

        let mut active: pack_sizes::ActiveModel = existing.into();
        active.size = Set(size);
        Ok(active.update(&self.db).await?)
    }

    /// Deletes a pack size by id.
    ///
    /// # Errors
    ///
    /// Returns [`PackSizeError::NotFound`] if the id does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), PackSizeError> {
        let result = pack_sizes::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(PackSizeError::NotFound);
        }
        Ok(())
    }

    /// Replaces all configured pack sizes with [`DEFAULT_PACK_SIZES`].
    ///
    /// Runs in a transaction so a failed reset leaves the previous
    /// configuration intact.
    ///
    /// # Errors
    ///
    /// Returns an error if any database operation fails.
    pub async fn reset_to_default(&self) -> Result<Vec<i64>, PackSizeError> {
        let txn = self.db.begin().await?;

        pack_sizes::Entity::delete_many().exec(&txn).await?;
        for &size in &DEFAULT_PACK_SIZES {
            let row = pack_sizes::ActiveModel {
                size: Set(size),
                ..Default::default()
            };
            row.insert(&txn).await?;
        }

        txn.commit().await?;
        Ok(DEFAULT_PACK_SIZES.to_vec())
    }
}
