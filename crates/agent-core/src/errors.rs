//! Errores del almacén. Todos son locales y recuperables: una operación
//! fallida no modifica el estado.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum StoreError {
    #[error("workflow not found: {0}")]
    WorkflowNotFound(String),
    #[error("step {step_id} not found in workflow {workflow_id}")]
    StepNotFound { workflow_id: String, step_id: String },
    #[error("no step ids left in workflow {0}")]
    StepIdsExhausted(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::WorkflowNotFound(_) | Self::StepNotFound { .. })
    }
}
