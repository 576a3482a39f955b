//! HTTP API handlers for ballondor

pub mod buildinfo;
pub mod health;
pub mod prediction;
pub mod table;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use prediction::{get_prediction, get_winner_history};
pub use table::get_table_data;
pub use ui::{serve_app_js, serve_index};
