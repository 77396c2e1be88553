//! Load the demo catalog into a PostgreSQL database.
//!
//! Safe to rerun: categories and demo components are only inserted into an
//! empty catalog. `--navigation` appends the navigation pack on every run.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_db::seed::{self, NavigationReport, SeedReport};

#[derive(Debug, Parser)]
#[command(name = "catalog-seed", about = "Seed the snippet catalog database")]
struct Cli {
    /// PostgreSQL connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Also add the navigation component pack.
    #[arg(long)]
    navigation: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_db=info,catalog_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let store = catalog_db::store::connect_store(Some(&cli.database_url))
        .await
        .context("failed to connect to the catalog database")?;

    match seed::seed_if_empty(store.as_ref())
        .await
        .context("failed to seed default catalog")?
    {
        SeedReport::AlreadySeeded => tracing::info!("Database already seeded, skipping"),
        SeedReport::Seeded {
            categories,
            components,
        } => tracing::info!(categories, components, "Database seeding completed"),
    }

    if cli.navigation {
        match seed::add_navigation_components(store.as_ref())
            .await
            .context("failed to add navigation components")?
        {
            NavigationReport::CategoryMissing => {
                anyhow::bail!("no '{}' category to attach to", seed::NAVIGATION_CATEGORY)
            }
            NavigationReport::Added {
                category_id,
                components,
            } => tracing::info!(category_id, components, "Navigation components added"),
        }
    }

    Ok(())
}
