//! Chicken entity - Individual hens and roosters owned by a farm.
//!
//! Unlike cows and hutches, chickens are tracked per animal: a farm may own
//! any number of them. Weight, age, and egg count are non-negative; sex is
//! required and stored as a single character (`M`, `F`, or `U`).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Biological sex of a chicken, stored as a one-character code
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum Sex {
    /// Rooster
    #[sea_orm(string_value = "M")]
    Male,
    /// Hen
    #[sea_orm(string_value = "F")]
    Female,
    /// Not yet sexed
    #[default]
    #[sea_orm(string_value = "U")]
    Unknown,
}

/// Chicken database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chickens")]
pub struct Model {
    /// Unique identifier for the chicken
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning farm, None for unowned birds
    pub farm_id: Option<i64>,
    /// Weight in kilograms, never negative (defaults to 0.05)
    pub weight: f64,
    /// Age in days, never negative (defaults to 0)
    pub age: i32,
    /// Sex of the animal - required at insert time
    pub sex: Sex,
    /// Number of eggs laid, never negative (defaults to 0)
    pub egg_count: i32,
    /// Date the chicken was last fed
    pub last_fed: Option<Date>,
    /// Date the chicken was last watered
    pub last_watered: Option<Date>,
    /// Date the chicken was last washed
    pub last_washed: Option<Date>,
    /// Date the chicken fell sick, None while healthy
    pub sick_since: Option<Date>,
}

/// Defines relationships between Chicken and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each chicken belongs to at most one farm
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
