use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuración abierta de un step. Sólo la interpretan los renderers/
/// ejecutores externos; el almacén la trata como opaca. Se conserva el orden
/// de inserción de las claves.
pub type StepConfig = IndexMap<String, Value>;

/// Unidad configurada dentro de un workflow.
///
/// `id` lo asigna el almacén y es único dentro del workflow dueño en el
/// momento de la creación. `step_type` es una etiqueta opaca (ej: "ai-step").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    #[serde(rename = "type")]
    pub step_type: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub config: StepConfig,
}

impl Step {
    pub fn new(id: impl Into<String>, step_type: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: id.into(),
               step_type: step_type.into(),
               name: name.into(),
               description: description.into(),
               config: StepConfig::new() }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }
}

/// Campos de un step nuevo (todo menos el id).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewStep {
    #[serde(rename = "type")]
    pub step_type: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub config: Option<StepConfig>,
}

impl NewStep {
    pub fn new(step_type: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { step_type: step_type.into(),
               name: name.into(),
               description: description.into(),
               config: None }
    }

    pub fn with_config(mut self, config: StepConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Agrega una clave a la configuración, creándola si no existía.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.get_or_insert_with(StepConfig::new).insert(key.into(), value.into());
        self
    }

    /// Materializa el step con el id asignado. Sin config => mapa vacío.
    pub(crate) fn into_step(self, id: String) -> Step {
        Step { id,
               step_type: self.step_type,
               name: self.name,
               description: self.description,
               config: self.config.unwrap_or_default() }
    }
}

/// Actualización parcial de un step. Sólo los campos presentes sobrescriben;
/// `config` se reemplaza completo (sin merge profundo).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub step_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<StepConfig>,
}

impl StepPatch {
    pub fn with_type(mut self, step_type: impl Into<String>) -> Self {
        self.step_type = Some(step_type.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_config(mut self, config: StepConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub(crate) fn apply(self, step: &mut Step) {
        if let Some(step_type) = self.step_type {
            step.step_type = step_type;
        }
        if let Some(name) = self.name {
            step.name = name;
        }
        if let Some(description) = self.description {
            step.description = description;
        }
        if let Some(config) = self.config {
            step.config = config;
        }
    }
}
