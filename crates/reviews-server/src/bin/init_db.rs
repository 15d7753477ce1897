//! One-shot provisioning: create the reviews table if it is missing.
//! Safe to run repeatedly; the server also provisions on startup.

use tracing::{error, info};

use reviews_db::Database;
use reviews_server::{config, telemetry};

fn main() {
    let _ = dotenvy::dotenv();

    telemetry::init("reviews_init_db=info,reviews_db=info");

    let config = config::load_or_exit();

    info!("Initializing database...");
    match provision(&config.database_url) {
        Ok(count) => {
            info!("Database tables created successfully ({} reviews stored)", count);
        }
        Err(e) => {
            error!("Failed to initialize database: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn provision(url: &str) -> anyhow::Result<u64> {
    let db = Database::open(url)?;
    db.provision()?;
    Ok(db.count_reviews()?)
}
