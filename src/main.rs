//! Server: loads config from env (and `.env`), ensures the database and `pets` table exist, serves the API.

use pet_service::{app, ensure_database_exists, ensure_pets_table, AppState, Config, PgPetRepository};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pet_service=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    ensure_pets_table(&pool).await?;

    let state = AppState::new(PgPetRepository::new(pool));
    let router = app(state, config.max_body_bytes);

    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("Server is listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
