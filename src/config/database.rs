//! Database configuration module for farmstead.
//!
//! This module handles `SQLite` database connection and table creation. Tables
//! are built with sea-query `Table::create()` statements rather than derived
//! from the entity models, because the schema carries CHECK constraints
//! (non-negative quantities, minimum name lengths, the sex code set) and
//! column defaults that the entity derive cannot express. The entity
//! definitions in [`crate::entities`] must stay in step with these statements.

use crate::entities::{account, chicken, cow, discount, farm, hutch, product, ranking, trade};
use crate::errors::Result;
use sea_orm::sea_query::{
    ColumnDef, Expr, ForeignKey, Table, TableCreateStatement,
};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/farmstead.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL`
/// environment variable, falling back to a default local file.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all game tables with their constraints, in dependency order.
///
/// Every statement uses `IF NOT EXISTS`, so calling this against an already
/// initialized database is a no-op. A failed statement aborts the remainder;
/// no partial-schema recovery is attempted.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();

    // Referenced tables (farms, products) must exist before their dependents.
    let statements = [
        farms_table(),
        accounts_table(),
        chickens_table(),
        cows_table(),
        hutches_table(),
        products_table(),
        trades_table(),
        discounts_table(),
        rankings_table(),
    ];

    for statement in &statements {
        db.execute(builder.build(statement)).await?;
    }

    Ok(())
}

fn farms_table() -> TableCreateStatement {
    Table::create()
        .table(farm::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(farm::Column::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(farm::Column::Name)
                .string_len(40)
                .not_null()
                .unique_key()
                .check(Expr::cust("LENGTH(name) >= 3")),
        )
        .col(
            ColumnDef::new(farm::Column::Balance)
                .double()
                .not_null()
                .default(1500)
                .check(Expr::col(farm::Column::Balance).gte(0)),
        )
        .col(ColumnDef::new(farm::Column::HibernatingSince).date())
        .col(
            ColumnDef::new(farm::Column::PurchasesRemaining)
                .integer()
                .not_null()
                .default(12)
                .check(Expr::col(farm::Column::PurchasesRemaining).gte(0)),
        )
        .col(ColumnDef::new(farm::Column::LastPurchase).date())
        .to_owned()
}

fn accounts_table() -> TableCreateStatement {
    Table::create()
        .table(account::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(account::Column::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(account::Column::FarmId)
                .big_integer()
                .unique_key(),
        )
        .col(
            ColumnDef::new(account::Column::Pseudo)
                .string_len(40)
                .not_null()
                .unique_key()
                .check(Expr::cust("LENGTH(pseudo) >= 3")),
        )
        .col(ColumnDef::new(account::Column::LastConnection).timestamp())
        .foreign_key(
            ForeignKey::create()
                .name("fk_accounts_farm")
                .from(account::Entity, account::Column::FarmId)
                .to(farm::Entity, farm::Column::Id),
        )
        .to_owned()
}

fn chickens_table() -> TableCreateStatement {
    Table::create()
        .table(chicken::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(chicken::Column::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(chicken::Column::FarmId).big_integer())
        .col(
            ColumnDef::new(chicken::Column::Weight)
                .double()
                .not_null()
                .default(0.05)
                .check(Expr::col(chicken::Column::Weight).gte(0)),
        )
        .col(
            ColumnDef::new(chicken::Column::Age)
                .integer()
                .not_null()
                .default(0)
                .check(Expr::col(chicken::Column::Age).gte(0)),
        )
        .col(
            ColumnDef::new(chicken::Column::Sex)
                .string_len(1)
                .not_null()
                .check(Expr::col(chicken::Column::Sex).is_in(["M", "F", "U"])),
        )
        .col(
            ColumnDef::new(chicken::Column::EggCount)
                .integer()
                .not_null()
                .default(0)
                .check(Expr::col(chicken::Column::EggCount).gte(0)),
        )
        .col(ColumnDef::new(chicken::Column::LastFed).date())
        .col(ColumnDef::new(chicken::Column::LastWatered).date())
        .col(ColumnDef::new(chicken::Column::LastWashed).date())
        .col(ColumnDef::new(chicken::Column::SickSince).date())
        .foreign_key(
            ForeignKey::create()
                .name("fk_chickens_farm")
                .from(chicken::Entity, chicken::Column::FarmId)
                .to(farm::Entity, farm::Column::Id),
        )
        .to_owned()
}

fn cows_table() -> TableCreateStatement {
    Table::create()
        .table(cow::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(cow::Column::FarmId)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(cow::Column::Weight)
                .integer()
                .not_null()
                .default(1)
                .check(Expr::col(cow::Column::Weight).gte(0)),
        )
        .col(
            ColumnDef::new(cow::Column::Age)
                .integer()
                .not_null()
                .default(0)
                .check(Expr::col(cow::Column::Age).gte(0)),
        )
        .col(
            ColumnDef::new(cow::Column::MilkQuantity)
                .integer()
                .not_null()
                .default(0)
                .check(Expr::col(cow::Column::MilkQuantity).gte(0)),
        )
        .col(ColumnDef::new(cow::Column::LastFed).date())
        .col(ColumnDef::new(cow::Column::LastWatered).date())
        .col(ColumnDef::new(cow::Column::LastWashed).date())
        .col(ColumnDef::new(cow::Column::SickSince).date())
        .foreign_key(
            ForeignKey::create()
                .name("fk_cows_farm")
                .from(cow::Entity, cow::Column::FarmId)
                .to(farm::Entity, farm::Column::Id),
        )
        .to_owned()
}

fn hutches_table() -> TableCreateStatement {
    Table::create()
        .table(hutch::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(hutch::Column::FarmId)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(hutch::Column::LastFed).date())
        .col(ColumnDef::new(hutch::Column::LastWatered).date())
        .col(ColumnDef::new(hutch::Column::LastWashed).date())
        .col(ColumnDef::new(hutch::Column::SickSince).date())
        .col(
            ColumnDef::new(hutch::Column::BabyCount)
                .integer()
                .not_null()
                .default(8)
                .check(Expr::col(hutch::Column::BabyCount).gte(0)),
        )
        .col(
            ColumnDef::new(hutch::Column::SmallCount)
                .integer()
                .not_null()
                .default(0)
                .check(Expr::col(hutch::Column::SmallCount).gte(0)),
        )
        .col(
            ColumnDef::new(hutch::Column::LargeCount)
                .integer()
                .not_null()
                .default(0)
                .check(Expr::col(hutch::Column::LargeCount).gte(0)),
        )
        .col(
            ColumnDef::new(hutch::Column::AdultMaleCount)
                .integer()
                .not_null()
                .default(0)
                .check(Expr::col(hutch::Column::AdultMaleCount).gte(0)),
        )
        .col(
            ColumnDef::new(hutch::Column::AdultFemaleCount)
                .integer()
                .not_null()
                .default(0)
                .check(Expr::col(hutch::Column::AdultFemaleCount).gte(0)),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_hutches_farm")
                .from(hutch::Entity, hutch::Column::FarmId)
                .to(farm::Entity, farm::Column::Id),
        )
        .to_owned()
}

fn products_table() -> TableCreateStatement {
    Table::create()
        .table(product::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(product::Column::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(product::Column::Name)
                .string_len(40)
                .not_null()
                .unique_key()
                .check(Expr::cust("LENGTH(name) >= 2")),
        )
        .col(ColumnDef::new(product::Column::Description).string_len(180))
        .col(ColumnDef::new(product::Column::Sellable).boolean().not_null())
        .to_owned()
}

fn trades_table() -> TableCreateStatement {
    Table::create()
        .table(trade::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(trade::Column::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(trade::Column::BuyerId).big_integer())
        .col(ColumnDef::new(trade::Column::SellerId).big_integer())
        .col(ColumnDef::new(trade::Column::ProductId).big_integer())
        .col(
            ColumnDef::new(trade::Column::Quantity)
                .integer()
                .not_null()
                .check(Expr::col(trade::Column::Quantity).gte(1)),
        )
        .col(
            ColumnDef::new(trade::Column::UnitPrice)
                .double()
                .not_null()
                .check(Expr::col(trade::Column::UnitPrice).gt(0)),
        )
        .col(ColumnDef::new(trade::Column::ListedSince).timestamp())
        .foreign_key(
            ForeignKey::create()
                .name("fk_trades_buyer")
                .from(trade::Entity, trade::Column::BuyerId)
                .to(farm::Entity, farm::Column::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_trades_seller")
                .from(trade::Entity, trade::Column::SellerId)
                .to(farm::Entity, farm::Column::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_trades_product")
                .from(trade::Entity, trade::Column::ProductId)
                .to(product::Entity, product::Column::Id),
        )
        .to_owned()
}

fn discounts_table() -> TableCreateStatement {
    Table::create()
        .table(discount::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(discount::Column::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(discount::Column::FarmId).big_integer())
        .col(ColumnDef::new(discount::Column::ProductId).big_integer())
        // Required, but no lower-bound check: the game allows zero and
        // negative discount quantities.
        .col(ColumnDef::new(discount::Column::Quantity).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_discounts_farm")
                .from(discount::Entity, discount::Column::FarmId)
                .to(farm::Entity, farm::Column::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_discounts_product")
                .from(discount::Entity, discount::Column::ProductId)
                .to(product::Entity, product::Column::Id),
        )
        .to_owned()
}

fn rankings_table() -> TableCreateStatement {
    Table::create()
        .table(ranking::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(ranking::Column::FarmId)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(ranking::Column::Score).double())
        .foreign_key(
            ForeignKey::create()
                .name("fk_rankings_farm")
                .from(ranking::Entity, ranking::Column::FarmId)
                .to(farm::Entity, farm::Column::Id),
        )
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        AccountModel, ChickenModel, CowModel, DiscountModel, FarmModel, HutchModel, ProductModel,
        RankingModel, TradeModel,
    };
    use crate::entities::{
        Account, Chicken, Cow, Discount, Farm, Hutch, Product, Ranking, Trade,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Every table should be queryable straight after creation
        let _: Vec<FarmModel> = Farm::find().limit(1).all(&db).await?;
        let _: Vec<AccountModel> = Account::find().limit(1).all(&db).await?;
        let _: Vec<ChickenModel> = Chicken::find().limit(1).all(&db).await?;
        let _: Vec<CowModel> = Cow::find().limit(1).all(&db).await?;
        let _: Vec<HutchModel> = Hutch::find().limit(1).all(&db).await?;
        let _: Vec<ProductModel> = Product::find().limit(1).all(&db).await?;
        let _: Vec<TradeModel> = Trade::find().limit(1).all(&db).await?;
        let _: Vec<DiscountModel> = Discount::find().limit(1).all(&db).await?;
        let _: Vec<RankingModel> = Ranking::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        // IF NOT EXISTS makes a second pass harmless
        create_tables(&db).await?;

        let _: Vec<FarmModel> = Farm::find().limit(1).all(&db).await?;
        Ok(())
    }
}
