use std::net::SocketAddr;

use flight_search_api::{config, factory::FlightSearchFactory, router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "flight_search_api=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::read_config().expect("Failed to read configuration");

    let connection_pool = config.database.lazy_pool();
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to run database migrations");

    let factory = FlightSearchFactory::from_pool(connection_pool);
    let app_state = AppState::new(factory.create_service());
    let app = router::create(app_state, &config.application);

    let addr: SocketAddr = format!("{}:{}", config.application.host, config.application.port)
        .parse()
        .expect("Failed to parse listen address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
