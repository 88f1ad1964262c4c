//! Almacén de workflows: contrato (`WorkflowRepository`), implementación en
//! memoria y handle asíncrono compartido.
pub mod memory;
pub mod shared;
pub mod types;

pub use memory::InMemoryWorkflowStore;
pub use shared::SharedWorkflowStore;
pub use types::{StepIdScheme, StoreConfig, WorkflowRepository};
