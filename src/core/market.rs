//! Market operations - Products, trades between farms, and discounts.
//!
//! Quantity floors (trade quantity >= 1, unit price > 0) and product name
//! rules are schema constraints; a violating insert fails with a database
//! error and is never silently corrected.

use crate::{
    entities::{Discount, Product, Trade, discount, product, trade},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new product in the catalog.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The name is shorter than 2 characters or already taken (engine CHECK /
///   UNIQUE violation)
/// - The database insert operation fails
pub async fn create_product(
    db: &DatabaseConnection,
    name: &str,
    description: Option<String>,
    sellable: bool,
) -> Result<product::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            field: "name",
            message: "Product name cannot be empty".to_string(),
        });
    }

    let new_product = product::ActiveModel {
        name: Set(name.trim().to_string()),
        description: Set(description),
        sellable: Set(sellable),
        ..Default::default()
    };
    new_product.insert(db).await.map_err(Into::into)
}

/// Retrieves a product by its unique ID, returning None if not found.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id).one(db).await.map_err(Into::into)
}

/// Retrieves a product by its unique name, returning None if not found.
pub async fn get_product_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all sellable products, ordered alphabetically by name.
pub async fn list_sellable_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .filter(product::Column::Sellable.eq(true))
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Arguments for recording a trade between two farms.
#[derive(Debug)]
pub struct NewTrade {
    /// Farm buying the goods
    pub buyer_id: Option<i64>,
    /// Farm selling the goods
    pub seller_id: Option<i64>,
    /// Product being traded
    pub product_id: Option<i64>,
    /// Units exchanged, at least 1
    pub quantity: i32,
    /// Price per unit in ecus, strictly positive
    pub unit_price: f64,
    /// When the listing went up
    pub listed_since: Option<DateTimeUtc>,
}

/// Records a trade.
///
/// # Errors
/// Returns an error if:
/// - The unit price is not finite
/// - The quantity or unit price trips a schema CHECK constraint
/// - A buyer/seller/product reference is dangling
/// - The database insert operation fails
pub async fn create_trade(db: &DatabaseConnection, args: &NewTrade) -> Result<trade::Model> {
    if !args.unit_price.is_finite() {
        return Err(Error::Validation {
            field: "unit_price",
            message: format!("Unit price must be finite, got {}", args.unit_price),
        });
    }

    let new_trade = trade::ActiveModel {
        buyer_id: Set(args.buyer_id),
        seller_id: Set(args.seller_id),
        product_id: Set(args.product_id),
        quantity: Set(args.quantity),
        unit_price: Set(args.unit_price),
        listed_since: Set(args.listed_since),
        ..Default::default()
    };
    new_trade.insert(db).await.map_err(Into::into)
}

/// Retrieves all trades where the given farm is the buyer, newest listing
/// first.
pub async fn get_trades_for_buyer(
    db: &DatabaseConnection,
    farm_id: i64,
) -> Result<Vec<trade::Model>> {
    Trade::find()
        .filter(trade::Column::BuyerId.eq(farm_id))
        .order_by_desc(trade::Column::ListedSince)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Grants a farm a discount on a product type.
///
/// The quantity is required but deliberately unchecked: the game rules allow
/// zero and negative discount quantities.
pub async fn create_discount(
    db: &DatabaseConnection,
    farm_id: Option<i64>,
    product_id: Option<i64>,
    quantity: i32,
) -> Result<discount::Model> {
    let new_discount = discount::ActiveModel {
        farm_id: Set(farm_id),
        product_id: Set(product_id),
        quantity: Set(quantity),
        ..Default::default()
    };
    new_discount.insert(db).await.map_err(Into::into)
}

/// Retrieves all discounts held by a farm.
pub async fn get_discounts_for_farm(
    db: &DatabaseConnection,
    farm_id: i64,
) -> Result<Vec<discount::Model>> {
    Discount::find()
        .filter(discount::Column::FarmId.eq(farm_id))
        .all(db)
        .await
        .map_err(Into::into)
}
