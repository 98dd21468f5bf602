use std::sync::Arc;

use anyhow::Context;
use sb_actions::{
    Actions, FilePreferenceStorage, MemoryPreferenceStorage, Notifier, PreferenceStorage, Store,
    TracingNotifier,
};
use sb_client::ApiClient;
use sb_config::SbConfig;

use crate::ui::TerminalNotifier;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub actions: Actions<ApiClient>,
    pub config: SbConfig,
}

impl AppContext {
    /// Build the store, client, notifier, and preference storage, then load
    /// persisted graph visibility into the store.
    pub fn init(config: SbConfig, quiet: bool) -> anyhow::Result<Self> {
        let client =
            ApiClient::from_config(&config.api).context("failed to build backend HTTP client")?;

        let preferences: Arc<dyn PreferenceStorage> = match config.preferences.resolved_path() {
            Some(path) => Arc::new(FilePreferenceStorage::new(path)),
            None => {
                tracing::warn!("no config directory found; graph preferences will not persist");
                Arc::new(MemoryPreferenceStorage::new())
            }
        };

        // Quiet sessions keep notifications in the log stream only.
        let notifier: Arc<dyn Notifier> = if quiet {
            Arc::new(TracingNotifier)
        } else {
            Arc::new(TerminalNotifier)
        };

        let actions = Actions::new(client, Arc::new(Store::new()), notifier, preferences);

        if let Err(error) = actions.get_graph_visibility() {
            tracing::warn!(%error, "failed to load saved graph visibility; using defaults");
        }

        Ok(Self { actions, config })
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        self.actions.store()
    }
}
