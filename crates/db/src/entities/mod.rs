//! `SeaORM` entity definitions.

pub mod pack_sizes;
