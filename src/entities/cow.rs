//! Cow entity - One cow record per farm, keyed by the owning farm.
//!
//! The schema models a single cow per farm: the farm id doubles as the
//! primary key, so a second insert for the same farm is a key conflict.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cow database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cows")]
pub struct Model {
    /// Owning farm - also the primary key (one cow per farm)
    #[sea_orm(primary_key, auto_increment = false)]
    pub farm_id: i64,
    /// Weight in kilograms, never negative (defaults to 1)
    pub weight: i32,
    /// Age in days, never negative (defaults to 0)
    pub age: i32,
    /// Litres of milk available, never negative (defaults to 0)
    pub milk_quantity: i32,
    /// Date the cow was last fed
    pub last_fed: Option<Date>,
    /// Date the cow was last watered
    pub last_watered: Option<Date>,
    /// Date the cow was last washed
    pub last_washed: Option<Date>,
    /// Date the cow fell sick, None while healthy
    pub sick_since: Option<Date>,
}

/// Defines relationships between Cow and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each cow record belongs to exactly one farm
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
