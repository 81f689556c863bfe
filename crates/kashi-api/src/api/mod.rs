//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_gojuon, health_check, post_convert, post_moras};
pub use routes::{create_router, run_server};
pub use state::AppState;
