use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scholarpage::{router, AppConfig, AppState, ProfileData};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("scholarpage=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let profile = ProfileData::load(&config.profile_data).with_context(|| {
        format!("Failed to load profile data from {}", config.profile_data.display())
    })?;
    info!(
        publications = profile.publications.len(),
        years = profile.citations.len(),
        "Loaded profile data from {}",
        config.profile_data.display()
    );

    let app = router(AppState::new(profile, config.scholar));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    info!("Server is running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
