use board_store::BoardStore;

use std::sync::Arc;

/// Shared state handed to every handler. The store is picked once at
/// startup; handlers never re-decide the provider.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BoardStore>,
}
