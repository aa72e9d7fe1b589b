//! Shared test utilities for farmstead.
//!
//! This module provides common helper functions for setting up test databases
//! and seeding the baseline fixtures (two named farms) that most scenarios
//! build on. Every test gets a fresh in-memory database; nothing is shared
//! across tests.

use crate::{core::farm, errors::Result};
use chrono::{Days, Utc};
use sea_orm::DatabaseConnection;
use sea_orm::prelude::Date;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Seeds the two baseline farms most scenarios depend on and returns their
/// generated ids as (`Clover Hollow`, `Willow Creek`).
pub async fn seed_two_farms(db: &DatabaseConnection) -> Result<(i64, i64)> {
    let first = farm::create_farm(db, "Clover Hollow").await?;
    let second = farm::create_farm(db, "Willow Creek").await?;
    Ok((first.id, second.id))
}

/// Yesterday's date, for care-timestamp fixtures.
#[must_use]
pub fn yesterday() -> Date {
    Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(1))
        .unwrap_or_else(|| Utc::now().date_naive())
}
