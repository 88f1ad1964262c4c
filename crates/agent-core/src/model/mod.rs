//! Modelo de datos: `Workflow` con su secuencia ordenada de `Step`, más las
//! entradas de creación (`New*`) y de actualización parcial (`*Patch`).
pub mod step;
pub mod workflow;

pub use step::{NewStep, Step, StepConfig, StepPatch};
pub use workflow::{NewWorkflow, Workflow, WorkflowPatch};
