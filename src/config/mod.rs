/// Database connection management and schema creation
pub mod database;

/// Starter-farm seed configuration loading from config.toml
pub mod farms;
