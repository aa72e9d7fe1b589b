//! Farm entity - The top-level owned entity of the game world.
//!
//! A farm owns livestock (chickens, a cow, a rabbit hutch), holds a currency
//! balance in ecus, and participates in trades, discounts, and the ranking.
//! Farm names are unique and at least three characters long.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Farm database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "farms")]
pub struct Model {
    /// Unique identifier for the farm
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable farm name, unique across the game (minimum 3 characters)
    #[sea_orm(unique)]
    pub name: String,
    /// Currency balance in ecus, never negative (defaults to 1500)
    pub balance: f64,
    /// Date the farm entered hibernation, None while active
    pub hibernating_since: Option<Date>,
    /// Purchase credits remaining this season, never negative (defaults to 12)
    pub purchases_remaining: i32,
    /// Date of the most recent purchase, None if the farm never bought anything
    pub last_purchase: Option<Date>,
}

/// Defines relationships between Farm and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One farm is linked to at most one player account
    #[sea_orm(has_one = "super::account::Entity")]
    Account,
    /// One farm owns many chickens
    #[sea_orm(has_many = "super::chicken::Entity")]
    Chickens,
    /// One farm owns at most one cow (cow rows are keyed by farm)
    #[sea_orm(has_one = "super::cow::Entity")]
    Cow,
    /// One farm owns at most one rabbit hutch
    #[sea_orm(has_one = "super::hutch::Entity")]
    Hutch,
    /// One farm holds many product discounts
    #[sea_orm(has_many = "super::discount::Entity")]
    Discounts,
    /// One farm has at most one ranking entry
    #[sea_orm(has_one = "super::ranking::Entity")]
    Ranking,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::chicken::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chickens.def()
    }
}

impl Related<super::cow::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cow.def()
    }
}

impl Related<super::hutch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hutch.def()
    }
}

impl Related<super::discount::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discounts.def()
    }
}

impl Related<super::ranking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ranking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
