//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod account;
pub mod chicken;
pub mod cow;
pub mod discount;
pub mod farm;
pub mod hutch;
pub mod product;
pub mod ranking;
pub mod trade;

// Re-export specific types to avoid conflicts
pub use account::{Column as AccountColumn, Entity as Account, Model as AccountModel};
pub use chicken::{Column as ChickenColumn, Entity as Chicken, Model as ChickenModel, Sex};
pub use cow::{Column as CowColumn, Entity as Cow, Model as CowModel};
pub use discount::{Column as DiscountColumn, Entity as Discount, Model as DiscountModel};
pub use farm::{Column as FarmColumn, Entity as Farm, Model as FarmModel};
pub use hutch::{Column as HutchColumn, Entity as Hutch, Model as HutchModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use ranking::{Column as RankingColumn, Entity as Ranking, Model as RankingModel};
pub use trade::{Column as TradeColumn, Entity as Trade, Model as TradeModel};
