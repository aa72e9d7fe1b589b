//! Farm operations - Creation, lookup, and starter-farm seeding.
//!
//! A freshly created farm only needs a name; the schema fills in the starting
//! balance (1500 ecus) and purchase credits (12). Name uniqueness and the
//! three-character minimum are enforced by the engine, so a violating insert
//! fails with a constraint-violation error rather than being corrected here.

use crate::{
    config::farms,
    entities::{Farm, farm},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, warn};

/// Creates a new farm with the given name, leaving every other column to its
/// schema default.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The name is shorter than 3 characters or already taken (engine CHECK /
///   UNIQUE violation)
/// - The database insert operation fails
pub async fn create_farm(db: &DatabaseConnection, name: &str) -> Result<farm::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            field: "name",
            message: "Farm name cannot be empty".to_string(),
        });
    }

    let new_farm = farm::ActiveModel {
        name: Set(name.trim().to_string()),
        ..Default::default()
    };
    new_farm.insert(db).await.map_err(Into::into)
}

/// Retrieves a farm by its unique ID, returning None if it does not exist.
pub async fn get_farm_by_id(db: &DatabaseConnection, farm_id: i64) -> Result<Option<farm::Model>> {
    Farm::find_by_id(farm_id).one(db).await.map_err(Into::into)
}

/// Retrieves a farm by its unique name, returning None if not found.
pub async fn get_farm_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<farm::Model>> {
    Farm::find()
        .filter(farm::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all farms, ordered alphabetically by name.
pub async fn get_all_farms(db: &DatabaseConnection) -> Result<Vec<farm::Model>> {
    Farm::find()
        .order_by_asc(farm::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Seeds the starter farms from configuration, returning the ids of the rows
/// now backing each configured name.
///
/// Farms whose name already exists are skipped rather than re-inserted, so
/// seeding an already populated database is harmless. The returned ids are in
/// configuration order and include both freshly inserted and pre-existing
/// farms, ready for dependent fixtures.
pub async fn seed_starter_farms(db: &DatabaseConnection, config: &farms::Config) -> Result<Vec<i64>> {
    info!(
        "Seeding starter farms. Found {} configurations from TOML.",
        config.farms.len()
    );
    let mut ids = Vec::with_capacity(config.farms.len());

    for cfg_farm in &config.farms {
        if let Some(existing) = get_farm_by_name(db, &cfg_farm.name).await? {
            warn!("Farm '{}' already exists. Skipping.", cfg_farm.name);
            ids.push(existing.id);
            continue;
        }

        let created = create_farm(db, &cfg_farm.name).await?;
        info!("Seeded starter farm '{}' (id {})", created.name, created.id);
        ids.push(created.id);
    }

    Ok(ids)
}
