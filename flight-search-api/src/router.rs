use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::ApplicationSettings, routes};

pub fn create(app_state: AppState, config: &ApplicationSettings) -> Router<()> {
    let base_app = Router::new().nest("/api/flights", routes::flights::router());

    let allowed_origin = match HeaderValue::from_str(&config.app_url) {
        Ok(origin) => AllowOrigin::exact(origin),
        Err(err) => {
            tracing::warn!("Ignoring invalid app_url '{}' for CORS: {}", config.app_url, err);
            AllowOrigin::list(Vec::<HeaderValue>::new())
        }
    };
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(allowed_origin);

    base_app
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
