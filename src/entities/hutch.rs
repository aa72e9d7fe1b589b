//! Hutch entity - The rabbit enclosure of a farm, keyed by the owning farm.
//!
//! Rabbits are not tracked individually; the hutch aggregates the population
//! by life stage. A fresh hutch starts with eight babies and nothing else.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Hutch database model - rabbit population counts by life stage
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hutches")]
pub struct Model {
    /// Owning farm - also the primary key (one hutch per farm)
    #[sea_orm(primary_key, auto_increment = false)]
    pub farm_id: i64,
    /// Date the rabbits were last fed
    pub last_fed: Option<Date>,
    /// Date the rabbits were last watered
    pub last_watered: Option<Date>,
    /// Date the hutch was last cleaned
    pub last_washed: Option<Date>,
    /// Date sickness was detected in the hutch, None while healthy
    pub sick_since: Option<Date>,
    /// Newborn rabbits, never negative (defaults to 8)
    pub baby_count: i32,
    /// Small rabbits, never negative (defaults to 0)
    pub small_count: i32,
    /// Large rabbits, never negative (defaults to 0)
    pub large_count: i32,
    /// Adult males, never negative (defaults to 0)
    pub adult_male_count: i32,
    /// Adult females, never negative (defaults to 0)
    pub adult_female_count: i32,
}

/// Defines relationships between Hutch and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each hutch belongs to exactly one farm
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
