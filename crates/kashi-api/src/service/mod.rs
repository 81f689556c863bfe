//! Service module

mod kashi_api_service;

pub use kashi_api_service::{KashiApiService, KashiApiServiceFull, validate_text};
