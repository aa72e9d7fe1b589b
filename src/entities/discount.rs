//! Discount entity - A quantity of a product type granted to a farm.
//!
//! Discounts sit outside the trade flow: they record held quantities per
//! product type per farm. The quantity is required but deliberately carries
//! no lower bound, mirroring the game rules.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Discount database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "discounts")]
pub struct Model {
    /// Unique identifier for the discount
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Farm holding the discount
    pub farm_id: Option<i64>,
    /// Product type the discount applies to
    pub product_id: Option<i64>,
    /// Discounted quantity - required, but no lower-bound check
    pub quantity: i32,
}

/// Defines relationships between Discount and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each discount belongs to at most one farm
    #[sea_orm(
        belongs_to = "super::farm::Entity",
        from = "Column::FarmId",
        to = "super::farm::Column::Id"
    )]
    Farm,
    /// Each discount applies to at most one product type
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::farm::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farm.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
