//! Trade entity - A buy/sell transaction between two farms for a product.
//!
//! Quantity is at least one and the unit price strictly positive. Buyer,
//! seller, and product references are nullable so listings survive the
//! disappearance of a counterparty. Both buyer and seller point at the farms
//! table, so no single `Related<Farm>` impl is defined; callers pick the
//! relation they mean.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Trade database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trades")]
pub struct Model {
    /// Unique identifier for the trade
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Farm buying the goods
    pub buyer_id: Option<i64>,
    /// Farm selling the goods
    pub seller_id: Option<i64>,
    /// Product being traded
    pub product_id: Option<i64>,
    /// Number of units exchanged, at least 1
    pub quantity: i32,
    /// Price per unit in ecus, strictly positive
    pub unit_price: f64,
    /// Timestamp the listing went up, None for unlisted trades
    pub listed_since: Option<DateTimeUtc>,
}

/// Defines relationships between Trade and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The purchasing farm
    #[sea_orm(
        belongs_to = "super::farm::Entity",
        from = "Column::BuyerId",
        to = "super::farm::Column::Id"
    )]
    Buyer,
    /// The selling farm
    #[sea_orm(
        belongs_to = "super::farm::Entity",
        from = "Column::SellerId",
        to = "super::farm::Column::Id"
    )]
    Seller,
    /// The product being exchanged
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
