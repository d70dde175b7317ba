use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    skincare_core::init()?;

    let (config, validation) = skincare_core::Config::load_validated()?;
    tracing::debug!(
        "Configuration loaded with {} warning(s)",
        validation.warnings.len()
    );

    let state = skincare_web::AppState::from_config(&config)
        .inspect_err(|e| tracing::error!("{}", e.user_message()))?;

    tracing::info!("Skincare application started");
    skincare_web::run_server(&config.server, state)
        .await
        .inspect_err(|e| tracing::error!("{}", e.user_message()))?;

    Ok(())
}
