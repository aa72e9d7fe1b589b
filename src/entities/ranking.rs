//! Ranking entity - One score per farm, keyed by the farm.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ranking database model - a farm's score on the leaderboard
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rankings")]
pub struct Model {
    /// Ranked farm - also the primary key (one entry per farm)
    #[sea_orm(primary_key, auto_increment = false)]
    pub farm_id: i64,
    /// Numeric score, None until first recorded
    pub score: Option<f64>,
}

/// Defines relationships between Ranking and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each ranking entry belongs to exactly one farm
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
