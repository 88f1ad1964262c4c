//! agent-core: almacén en memoria de workflows y sus steps ordenados.
pub mod catalog;
pub mod constants;
pub mod errors;
pub mod model;
pub mod seed;
pub mod store;

pub use catalog::{StepCatalog, StepType};
pub use errors::StoreError;
pub use model::{NewStep, NewWorkflow, Step, StepConfig, StepPatch, Workflow, WorkflowPatch};
pub use store::{InMemoryWorkflowStore, SharedWorkflowStore, StepIdScheme, StoreConfig, WorkflowRepository};
