use crate::{store::TransactionStore, view::templates::Templates};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// The store every request reads transactions from.
    /// Acquired once at startup and shared by all handlers.
    pub store: Arc<dyn TransactionStore>,

    /// Compiled dashboard templates.
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(store: Arc<dyn TransactionStore>, templates: Templates) -> Self {
        Self {
            store,
            templates: Arc::new(templates),
        }
    }
}
