pub mod api;
pub mod app;
pub mod chart;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod state;
pub mod ui;
pub mod view;

pub use api::ApiClient;
pub use app::router;
pub use config::Config;
pub use controller::Controller;
pub use state::AppState;
