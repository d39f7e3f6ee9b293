pub mod extract;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod state;

use axum::Router;
use oxy_pulse_domain::ModelStore;

use crate::config::AppConfig;
use state::AppState;

/// Load the models named in `config` and create the application router
pub fn create_application(config: &AppConfig) -> Router {
    let store = ModelStore::new(config.models.clone());
    let state = AppState::from_store(&store, config.environment.clone());
    routes::create_app(state, &config.static_dir)
}
