//! Account entity - A player account, optionally linked to a farm.
//!
//! Pseudonyms are unique and at least three characters. The farm link is
//! one-to-one: a farm can back at most one account.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Unique identifier for the account
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Farm this account plays as, None for accounts without a farm yet
    #[sea_orm(unique)]
    pub farm_id: Option<i64>,
    /// Player pseudonym, unique across accounts (minimum 3 characters)
    #[sea_orm(unique)]
    pub pseudo: String,
    /// Timestamp of the player's most recent connection
    pub last_connection: Option<DateTimeUtc>,
}

/// Defines relationships between Account and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each account belongs to at most one farm
    #[sea_orm(
        belongs_to = "super::farm::Entity",
        from = "Column::FarmId",
        to = "super::farm::Column::Id"
    )]
    Farm,
}

impl Related<super::farm::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farm.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
