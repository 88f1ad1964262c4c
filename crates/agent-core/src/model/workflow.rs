use serde::{Deserialize, Serialize};

use super::step::Step;

/// Colección nombrada y ordenada de steps. El orden de `steps` define el
/// orden de ejecución/visualización.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Workflow {
    pub fn step(&self, step_id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    pub fn step_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.id.as_str()).collect()
    }
}

/// Campos de un workflow nuevo. `steps` es vacío por defecto; un nombre vacío
/// es válido (no hay capa de validación en el almacén).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewWorkflow {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl NewWorkflow {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(),
               description: description.into(),
               steps: Vec::new() }
    }

    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }

    pub(crate) fn into_workflow(self, id: String) -> Workflow {
        Workflow { id,
                   name: self.name,
                   description: self.description,
                   steps: self.steps }
    }
}

/// Actualización parcial (merge superficial). Si `steps` está presente
/// reemplaza la secuencia completa.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

impl WorkflowPatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.steps.is_none()
    }

    pub(crate) fn apply(self, workflow: &mut Workflow) {
        if let Some(name) = self.name {
            workflow.name = name;
        }
        if let Some(description) = self.description {
            workflow.description = description;
        }
        if let Some(steps) = self.steps {
            workflow.steps = steps;
        }
    }
}
