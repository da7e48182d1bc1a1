use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storekeep::{config, db, seed, server};

#[tokio::main]
async fn main() {
    // Load .env before reading RUST_LOG or any other setting
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storekeep=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    let args: Vec<String> = std::env::args().collect();
    let migrate_only = args.iter().any(|arg| arg == "--migrate");
    let seed_only = args.iter().any(|arg| arg == "--seed");

    let db = match db::connect(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if migrate_only {
        match db::migrate(&db).await {
            Ok(applied) => tracing::info!("Applied {} migration(s)", applied.len()),
            Err(e) => {
                tracing::error!("Failed to apply migrations: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Serving and seeding never touch the schema; it must already be current
    match db::pending_versions(&db).await {
        Ok(pending) if pending.is_empty() => {}
        Ok(pending) => {
            tracing::error!(
                "Schema is out of date, pending migrations {:?}; run `storekeep --migrate` first",
                pending
            );
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Failed to read migration ledger: {}", e);
            std::process::exit(1);
        }
    }

    if config.seed_demo || seed_only {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_data(&db).await {
            tracing::error!("Failed to seed data: {}", e);
            std::process::exit(1);
        }
        tracing::info!("Demo data seeded successfully.");
    }
    if seed_only {
        return;
    }

    if let Err(e) = server::serve(&config, db).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
