//! Database repository layer for moderation state.
//!
//! This module contains repository structs that handle database operations for the
//! per-guild moderation config and the warning records. Repositories use SeaORM entity
//! models internally and return domain models to maintain separation between the data
//! layer and business logic layer.

pub mod moderation_config;
pub mod warning;

#[cfg(test)]
mod test;
