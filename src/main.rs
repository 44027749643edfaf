use almanac::server::{
    config::Config, model::app::AppState, router, startup, util::token::TokenVerifier,
};
use dioxus_logger::tracing::{self, Level};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(config).await {
        tracing::error!("Server exited with error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let db = startup::connect_to_database(&config).await?;
    let storage = startup::build_photo_storage(&config).await?;
    let token_verifier = TokenVerifier::new(&config.auth_jwt_secret);

    let app = router::routes().with_state(AppState {
        db,
        storage,
        token_verifier,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
