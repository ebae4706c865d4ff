//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application.

pub mod pack_size;

pub use pack_size::{PackSizeError, PackSizeRepository, DEFAULT_PACK_SIZES};
