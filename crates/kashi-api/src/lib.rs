//! kashi-api crate
//!
//! Web server providing lyrics romanization as HTTP API.
//!
//! ## Endpoints
//! - `POST /convert` - Lyrics to hiragana / romaji, line by line
//! - `POST /moras` - Kana reading to moras
//! - `GET /gojuon` - Gojuon chart
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5540/convert \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "君の名は\n夢を見る"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{ConvertRequest, ConvertResponse, GojuonResponse, MorasRequest, MorasResponse};
pub use service::{KashiApiService, KashiApiServiceFull};
