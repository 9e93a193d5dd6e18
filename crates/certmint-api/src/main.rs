use certmint_core::Config;

// Use mimalloc as the global allocator for lower fragmentation in containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (database, services, routes)
    let (_state, router) = certmint_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    certmint_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
