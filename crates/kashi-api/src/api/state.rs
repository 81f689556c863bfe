//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::KashiApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Lyrics conversion service
  ///
  /// - Production: `Arc::new(KashiApiServiceFull::new(&kashi_config)?)`
  /// - Test: `Arc::new(StubKashiApiService)`
  pub service: Arc<dyn KashiApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn KashiApiService>) -> Self {
    Self { config, service }
  }
}
