//! Raíz de composición: la aplicación crea una única instancia del almacén y
//! la pasa por referencia (o como handle compartido) a sus consumidores.
use agent_core::{InMemoryWorkflowStore, SharedWorkflowStore};

use crate::config::AppConfig;

pub fn build_store(config: &AppConfig) -> InMemoryWorkflowStore {
    InMemoryWorkflowStore::new(config.store.clone())
}

pub fn build_shared_store(config: &AppConfig) -> SharedWorkflowStore {
    SharedWorkflowStore::new(build_store(config))
}
