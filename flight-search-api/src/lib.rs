pub mod adapters;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod factory;
pub mod repositories;
pub mod router;
mod routes;

pub use app_state::AppState;
