//! Farmstead bootstrap binary.
//!
//! Initializes logging, loads configuration, opens the database, creates the
//! schema, and seeds the starter farms. The game itself runs elsewhere; this
//! binary only prepares the world.

use farmstead::config::{database, farms};
use farmstead::core::farm;
use farmstead::errors::Result;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// Single connection, sequential bootstrap - no need for the multi-thread
// runtime (which the "rt" feature alone does not provide).
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the starter-farm configuration
    let config = farms::load_default_config()
        .inspect_err(|e| error!("Failed to load starter-farm configuration: {e}"))?;
    info!("Loaded {} starter farm(s) from config.toml.", config.farms.len());

    // 4. Initialize database (DATABASE_URL or the local default)
    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database tables ensured."))
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 5. Seed starter farms
    let ids = farm::seed_starter_farms(&db, &config)
        .await
        .inspect_err(|e| error!("Failed to seed starter farms: {e}"))?;
    info!("World ready with {} starter farm(s).", ids.len());

    Ok(())
}
