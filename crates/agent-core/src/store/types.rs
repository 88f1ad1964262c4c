//! Contrato del almacén y su configuración.
//!
//! Todas las operaciones son síncronas y completas al retornar: una lectura
//! posterior a una escritura siempre la observa. Las lecturas devuelven copias
//! independientes (snapshots); mutarlas no afecta al almacén.
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FIRST_ID;
use crate::errors::StoreError;
use crate::model::{NewStep, NewWorkflow, StepPatch, Workflow, WorkflowPatch};

/// Cómo se generan los ids de step al agregar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepIdScheme {
    /// `"{workflow_id}-{cantidad_actual + 1}"`. Tras borrar un step intermedio
    /// el siguiente id puede repetir uno vivo; se conserva por compatibilidad
    /// con los ids ya emitidos y se registra un `warn!` cuando ocurre.
    #[default]
    Positional,
    /// `"{workflow_id}-{n}"` con `n` estrictamente creciente por workflow.
    /// Nunca reutiliza un id, ni siquiera uno ya borrado.
    Monotonic,
}

impl std::str::FromStr for StepIdScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positional" => Ok(Self::Positional),
            "monotonic" => Ok(Self::Monotonic),
            other => Err(format!("unknown step id scheme '{other}' (expected positional|monotonic)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Precarga los workflows de ejemplo (`seed::sample_workflows`).
    pub seed_samples: bool,
    /// Primer id numérico a emitir. Si hay datos precargados con ids
    /// numéricos mayores, el contador continúa después del mayor.
    pub first_id: u64,
    pub step_ids: StepIdScheme,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed_samples: true,
               first_id: DEFAULT_FIRST_ID,
               step_ids: StepIdScheme::default() }
    }
}

impl StoreConfig {
    /// Almacén vacío, sin datos de ejemplo.
    pub fn empty() -> Self {
        Self { seed_samples: false, ..Self::default() }
    }
}

/// Operaciones CRUD sobre workflows y sus steps anidados.
///
/// Un step sólo existe como miembro de la secuencia `steps` de exactamente un
/// workflow; borrar el workflow descarta todos sus steps.
pub trait WorkflowRepository {
    /// Snapshot de todos los workflows en orden de inserción.
    fn list_workflows(&self) -> Vec<Workflow>;

    fn get_workflow(&self, id: &str) -> Option<Workflow>;

    /// Siempre tiene éxito y devuelve el id asignado.
    fn add_workflow(&mut self, workflow: NewWorkflow) -> String;

    fn update_workflow(&mut self, id: &str, patch: WorkflowPatch) -> Result<(), StoreError>;

    fn delete_workflow(&mut self, id: &str) -> Result<(), StoreError>;

    /// Agrega el step al final del workflow y devuelve su id.
    fn add_step(&mut self, workflow_id: &str, step: NewStep) -> Result<String, StoreError>;

    fn update_step(&mut self, workflow_id: &str, step_id: &str, patch: StepPatch) -> Result<(), StoreError>;

    fn delete_step(&mut self, workflow_id: &str, step_id: &str) -> Result<(), StoreError>;

    /// Mueve un step a `to_index` (acotado a la última posición). Los ids no
    /// cambian.
    fn move_step(&mut self, workflow_id: &str, step_id: &str, to_index: usize) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scheme_names() {
        assert_eq!("Monotonic".parse::<StepIdScheme>(), Ok(StepIdScheme::Monotonic));
        assert_eq!(" positional ".parse::<StepIdScheme>(), Ok(StepIdScheme::Positional));
        assert!("global".parse::<StepIdScheme>().is_err());
    }
}
