//! Shared app state and service wiring.

use std::sync::Arc;

use dioxus::prelude::*;
use lingua_core::JsonFileStore;
use lingua_gemini::GeminiClient;

use crate::prefs;

/// Which page is on screen. Navigation is a signal, not a URL router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Main,
    Chat,
    History,
}

/// Concrete collaborators the pages talk to.
pub struct Services {
    pub store: Arc<JsonFileStore>,
    pub completion: Arc<GeminiClient>,
}

impl Services {
    /// Open the data file and build the completion client from the
    /// environment.
    pub fn init() -> Result<Arc<Self>, String> {
        let data_dir = prefs::default_data_dir();
        let store = JsonFileStore::open(data_dir.join("store.json"))
            .map_err(|e| format!("failed to open data file: {}", e))?;

        let completion = GeminiClient::from_env().unwrap_or_else(|| {
            tracing::warn!("GEMINI_API_KEY not set; chat replies will fall back to the error message");
            GeminiClient::new(String::new())
        });

        Ok(Arc::new(Self {
            store: Arc::new(store),
            completion: Arc::new(completion),
        }))
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

/// Shared app context provided at the root.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub user_name: Signal<String>,
    pub page: Signal<Page>,
    pub services: Signal<Arc<Services>>,
}
