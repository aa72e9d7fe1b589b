/// Player account operations
pub mod account;
/// Farm creation, lookup, and starter-farm seeding
pub mod farm;
/// Livestock operations - chickens, cows, and rabbit hutches
pub mod livestock;
/// Market operations - products, trades, and discounts
pub mod market;
/// Leaderboard score recording and reads
pub mod ranking;
