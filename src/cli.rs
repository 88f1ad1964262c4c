//! Comandos del binario `agentflow`.
//!
//! Uso:
//! - `agentflow list`
//! - `agentflow show --workflow <ID>`
//! - `agentflow types`
//! - `agentflow demo`
use agent_core::{NewStep, NewWorkflow, StepCatalog, StepPatch, WorkflowRepository};
use serde_json::json;

use crate::errors::CoreError;

pub const USAGE: &str = "Uso: agentflow <list | show --workflow <ID> | types | demo>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show { workflow: String },
    Types,
    Demo,
}

impl Command {
    /// `args` sin el nombre del programa.
    pub fn parse(args: &[String]) -> Result<Self, CoreError> {
        let Some(name) = args.first() else {
            return Err(CoreError::Usage(USAGE.into()));
        };
        match name.as_str() {
            "list" => Ok(Command::List),
            "types" => Ok(Command::Types),
            "demo" => Ok(Command::Demo),
            "show" => {
                let mut workflow: Option<String> = None;
                let mut i = 1;
                while i < args.len() {
                    match args[i].as_str() {
                        "--workflow" => {
                            i += 1;
                            if i < args.len() {
                                workflow = Some(args[i].clone());
                            }
                        }
                        other => return Err(CoreError::Usage(format!("argumento desconocido '{other}'. {USAGE}"))),
                    }
                    i += 1;
                }
                workflow.map(|workflow| Command::Show { workflow })
                        .ok_or_else(|| CoreError::Usage(format!("falta --workflow <ID>. {USAGE}")))
            }
            other => Err(CoreError::Usage(format!("comando desconocido '{other}'. {USAGE}"))),
        }
    }
}

/// Ejecuta el comando y devuelve la salida (JSON) a imprimir.
pub fn execute<R: WorkflowRepository>(command: &Command, store: &mut R) -> Result<String, CoreError> {
    match command {
        Command::List => Ok(serde_json::to_string_pretty(&store.list_workflows())?),
        Command::Show { workflow } => {
            let wf = store.get_workflow(workflow)
                          .ok_or_else(|| agent_core::StoreError::WorkflowNotFound(workflow.clone()))?;
            Ok(serde_json::to_string_pretty(&wf)?)
        }
        Command::Types => Ok(serde_json::to_string_pretty(StepCatalog::builtin().all())?),
        Command::Demo => run_demo(store),
    }
}

// Recorrido típico de las pantallas: crear, agregar step, editar, borrar.
fn run_demo<R: WorkflowRepository>(store: &mut R) -> Result<String, CoreError> {
    let catalog = StepCatalog::builtin();
    let workflow_id = store.add_workflow(NewWorkflow::new("Research", "desc"));
    let description = catalog.description_or_default("models", "");
    let step_id = store.add_step(&workflow_id, NewStep::new("models", "Step1", description).with_param("model", "default"))?;
    store.update_step(&workflow_id, &step_id, StepPatch::default().with_name("Renamed"))?;
    let created = store.get_workflow(&workflow_id)
                       .ok_or_else(|| CoreError::Internal(format!("workflow {workflow_id} desapareció")))?;
    store.delete_workflow(&workflow_id)?;
    let found_after_delete = store.get_workflow(&workflow_id).is_some();
    Ok(serde_json::to_string_pretty(&json!({
        "workflow_id": workflow_id,
        "step_id": step_id,
        "created": created,
        "deleted": true,
        "found_after_delete": found_after_delete,
    }))?)
}
