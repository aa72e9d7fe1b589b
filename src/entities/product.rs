//! Product entity - Goods that farms can hold, discount, and trade.
//!
//! Product names are unique and at least two characters; the sellable flag
//! marks whether a product may appear in trades.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Product name, unique across the catalog (minimum 2 characters)
    #[sea_orm(unique)]
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Whether this product may be listed in trades
    pub sellable: bool,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One product appears in many trades
    #[sea_orm(has_many = "super::trade::Entity")]
    Trades,
    /// One product type appears in many discounts
    #[sea_orm(has_many = "super::discount::Entity")]
    Discounts,
}

impl Related<super::trade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trades.def()
    }
}

impl Related<super::discount::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
