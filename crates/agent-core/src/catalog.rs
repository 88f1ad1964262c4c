//! Catálogo de categorías de step que ofrece el constructor de workflows.
//!
//! El almacén no valida `Step::step_type` contra este catálogo: es
//! información para las pantallas (selector de tipo, descripción por
//! defecto), no una restricción del modelo.
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const BUILTIN_TYPES: &[StepType] = &[
    StepType { id: "inputs", name: "Inputs", description: "Input components for your workflow" },
    StepType { id: "outputs", name: "Outputs", description: "Output components for your workflow" },
    StepType { id: "prompts", name: "Prompts", description: "Prompt templates and configurations" },
    StepType { id: "data", name: "Data", description: "Data sources and management" },
    StepType { id: "processing", name: "Processing", description: "Data processing and transformation" },
    StepType { id: "models", name: "Models", description: "AI models and inference" },
    StepType { id: "vectorStores", name: "Vector Stores", description: "Vector database storage" },
    StepType { id: "embeddings", name: "Embeddings", description: "Text embedding generation" },
    StepType { id: "agents", name: "Agents", description: "Autonomous agent components" },
    StepType { id: "memories", name: "Memories", description: "Memory storage for conversations" },
    StepType { id: "tools", name: "Tools", description: "Utility tools for workflows" },
    StepType { id: "logic", name: "Logic", description: "Logical operations and flow control" },
    StepType { id: "helpers", name: "Helpers", description: "Helper utilities and functions" },
];

#[derive(Debug, Clone, Copy)]
pub struct StepCatalog {
    types: &'static [StepType],
}

impl StepCatalog {
    pub fn builtin() -> Self {
        Self { types: BUILTIN_TYPES }
    }

    /// Tipos en el orden en que se muestran.
    pub fn all(&self) -> &'static [StepType] {
        self.types
    }

    pub fn get(&self, id: &str) -> Option<&'static StepType> {
        self.types.iter().find(|t| t.id == id)
    }

    /// Si `description` está vacía y el tipo existe en el
    /// catálogo, devuelve la descripción del catálogo; si no, la original.
    pub fn description_or_default(&self, type_id: &str, description: &str) -> String {
        if description.is_empty() {
            if let Some(t) = self.get(type_id) {
                return t.description.to_string();
            }
        }
        description.to_string()
    }
}

impl Default for StepCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
