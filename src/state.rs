use crate::config::Config;
use crate::media::MediaStore;
use crate::store::Store;

/// Shared handler state: the persistent store, the media collaborator and
/// the runtime configuration.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub media: MediaStore,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Store, media: MediaStore, config: Config) -> Self {
        Self {
            store,
            media,
            config,
        }
    }
}
