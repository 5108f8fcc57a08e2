//! Demo Data Seeder
//!
//! Sets the demo countries to fixed totals; other rows are left alone.
//! Pass `--reset` to empty `country_bleps` first. Requires `DATABASE_URL`.

use api::config::AppConfig;
use api::database;
use api::seed::seed_demo_data;
use blep::PgCounterRepository;
use blep::store::CounterRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    api::init_tracing();

    let reset = std::env::args().skip(1).any(|arg| arg == "--reset");

    let config = AppConfig::from_env();
    let Some(database_url) = config.database_url.as_deref() else {
        anyhow::bail!("DATABASE_URL must be set to seed the database");
    };

    let pool = database::connect(database_url, config.database_max_connections).await?;
    let repo = PgCounterRepository::new(pool);

    if reset {
        tracing::warn!("--reset given; deleting every country_bleps row");
        repo.clear_all().await?;
    }

    let seeded = seed_demo_data(&repo).await?;

    tracing::info!(rows = seeded.len(), "Seed completed");

    Ok(())
}
