use std::sync::Arc;

use kotoba_config::Config;
use kotoba_core::{EngineLoader, Session};
use kotoba_dictionary::DictionaryProvider;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub session: Arc<Session>,
}

impl AppState {
    pub fn new(
        config: Config,
        loader: Arc<dyn EngineLoader>,
        provider: Arc<dyn DictionaryProvider>,
    ) -> Self {
        let session = Arc::new(Session::new(&config.session, loader, provider));
        tracing::info!(session = %session.id(), "Session created");

        Self {
            config: Arc::new(RwLock::new(config)),
            session,
        }
    }
}
