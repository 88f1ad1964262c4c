//! Handle compartido con API asíncrona sobre un `WorkflowRepository`.
//!
//! Para llamadores que esperan resultados diferidos (mismo estilo que un
//! backend remoto). Cada operación toma el lock una sola vez y completa la
//! mutación antes de soltarlo: nunca se intercalan mutaciones parciales.
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::model::{NewStep, NewWorkflow, StepPatch, Workflow, WorkflowPatch};

use super::memory::InMemoryWorkflowStore;
use super::types::WorkflowRepository;

pub struct SharedWorkflowStore<R = InMemoryWorkflowStore> {
    inner: Arc<RwLock<R>>,
}

impl<R> Clone for SharedWorkflowStore<R> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<R: WorkflowRepository> SharedWorkflowStore<R> {
    pub fn new(repo: R) -> Self {
        Self { inner: Arc::new(RwLock::new(repo)) }
    }

    pub async fn list_workflows(&self) -> Vec<Workflow> {
        self.inner.read().await.list_workflows()
    }

    pub async fn get_workflow(&self, id: &str) -> Option<Workflow> {
        self.inner.read().await.get_workflow(id)
    }

    pub async fn add_workflow(&self, workflow: NewWorkflow) -> String {
        self.inner.write().await.add_workflow(workflow)
    }

    pub async fn update_workflow(&self, id: &str, patch: WorkflowPatch) -> Result<(), StoreError> {
        self.inner.write().await.update_workflow(id, patch)
    }

    pub async fn delete_workflow(&self, id: &str) -> Result<(), StoreError> {
        self.inner.write().await.delete_workflow(id)
    }

    pub async fn add_step(&self, workflow_id: &str, step: NewStep) -> Result<String, StoreError> {
        self.inner.write().await.add_step(workflow_id, step)
    }

    pub async fn update_step(&self, workflow_id: &str, step_id: &str, patch: StepPatch) -> Result<(), StoreError> {
        self.inner.write().await.update_step(workflow_id, step_id, patch)
    }

    pub async fn delete_step(&self, workflow_id: &str, step_id: &str) -> Result<(), StoreError> {
        self.inner.write().await.delete_step(workflow_id, step_id)
    }

    pub async fn move_step(&self, workflow_id: &str, step_id: &str, to_index: usize) -> Result<(), StoreError> {
        self.inner.write().await.move_step(workflow_id, step_id, to_index)
    }

    /// Ejecuta `f` con acceso exclusivo; útil para agrupar varias operaciones
    /// sin que otro llamador observe estados intermedios.
    pub async fn with_repo<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        let mut guard = self.inner.write().await;
        f(&mut *guard)
    }
}

impl Default for SharedWorkflowStore<InMemoryWorkflowStore> {
    fn default() -> Self {
        Self::new(InMemoryWorkflowStore::default())
    }
}
