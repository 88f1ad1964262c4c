//! Implementación en memoria del almacén de workflows.
//!
//! Los workflows viven en un `IndexMap` indexado por id: conserva el orden de
//! inserción para `list_workflows` y `shift_remove` mantiene el orden relativo
//! del resto al borrar.
use indexmap::IndexMap;
use log::{debug, info, warn};

use crate::constants::STEP_ID_SEPARATOR;
use crate::errors::StoreError;
use crate::model::{NewStep, NewWorkflow, Step, StepPatch, Workflow, WorkflowPatch};
use crate::seed::sample_workflows;

use super::types::{StepIdScheme, StoreConfig, WorkflowRepository};

struct Entry {
    workflow: Workflow,
    // mayor sufijo numérico emitido/visto en este workflow
    step_seq: u64,
}

impl Entry {
    fn new(workflow: Workflow) -> Self {
        let step_seq = max_step_suffix(&workflow.id, &workflow.steps);
        Self { workflow, step_seq }
    }
}

pub struct InMemoryWorkflowStore {
    workflows: IndexMap<String, Entry>,
    next_id: u64,
    step_ids: StepIdScheme,
}

impl InMemoryWorkflowStore {
    pub fn new(config: StoreConfig) -> Self {
        let seed = if config.seed_samples { sample_workflows() } else { Vec::new() };
        Self::with_workflows(config, seed)
    }

    /// Construye el almacén con datos iniciales propios. Se ignora
    /// `config.seed_samples`.
    pub fn with_workflows(config: StoreConfig, initial: Vec<Workflow>) -> Self {
        let mut workflows = IndexMap::with_capacity(initial.len());
        for wf in initial {
            let id = wf.id.clone();
            if workflows.insert(id.clone(), Entry::new(wf)).is_some() {
                warn!("duplicate workflow id '{id}' in initial data, keeping the last one");
            }
        }
        let after_seed = workflows.keys()
                                  .filter_map(|k| k.parse::<u64>().ok())
                                  .max()
                                  .map_or(0, |m| m.saturating_add(1));
        let next_id = config.first_id.max(after_seed);
        info!("workflow store initialized: {} workflows, next id {next_id}, step ids {:?}",
              workflows.len(),
              config.step_ids);
        Self { workflows,
               next_id,
               step_ids: config.step_ids }
    }

    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }

    /// Id que recibirá el próximo `add_workflow`.
    pub fn peek_next_id(&self) -> String {
        self.next_free_id().to_string()
    }

    // Primer id libre desde el contador; agotado u64 se vuelve a buscar desde
    // 0. Siempre hay uno libre: hay menos workflows que valores de u64.
    fn next_free_id(&self) -> u64 {
        (self.next_id..=u64::MAX).chain(0..self.next_id)
                                 .find(|n| !self.workflows.contains_key(&n.to_string()))
                                 .unwrap_or(self.next_id)
    }

    fn entry_mut(&mut self, workflow_id: &str) -> Result<&mut Entry, StoreError> {
        self.workflows
            .get_mut(workflow_id)
            .ok_or_else(|| StoreError::WorkflowNotFound(workflow_id.to_string()))
    }
}

impl Default for InMemoryWorkflowStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl WorkflowRepository for InMemoryWorkflowStore {
    fn list_workflows(&self) -> Vec<Workflow> {
        self.workflows.values().map(|e| e.workflow.clone()).collect()
    }

    fn get_workflow(&self, id: &str) -> Option<Workflow> {
        self.workflows.get(id).map(|e| e.workflow.clone())
    }

    fn add_workflow(&mut self, workflow: NewWorkflow) -> String {
        let n = self.next_free_id();
        self.next_id = n.saturating_add(1);
        let id = n.to_string();
        let entry = Entry::new(workflow.into_workflow(id.clone()));
        debug!("add workflow {id} ({} steps)", entry.workflow.steps.len());
        self.workflows.insert(id.clone(), entry);
        id
    }

    fn update_workflow(&mut self, id: &str, patch: WorkflowPatch) -> Result<(), StoreError> {
        let entry = self.entry_mut(id)?;
        let replaces_steps = patch.steps.is_some();
        patch.apply(&mut entry.workflow);
        if replaces_steps {
            entry.step_seq = entry.step_seq.max(max_step_suffix(id, &entry.workflow.steps));
        }
        debug!("update workflow {id} (steps replaced: {replaces_steps})");
        Ok(())
    }

    fn delete_workflow(&mut self, id: &str) -> Result<(), StoreError> {
        let removed = self.workflows
                          .shift_remove(id)
                          .ok_or_else(|| StoreError::WorkflowNotFound(id.to_string()))?;
        debug!("delete workflow {id} with {} steps", removed.workflow.steps.len());
        Ok(())
    }

    fn add_step(&mut self, workflow_id: &str, step: NewStep) -> Result<String, StoreError> {
        let scheme = self.step_ids;
        let entry = self.entry_mut(workflow_id)?;
        let n = match scheme {
            StepIdScheme::Positional => (entry.workflow.steps.len() as u64).checked_add(1),
            StepIdScheme::Monotonic => entry.step_seq.checked_add(1),
        }.ok_or_else(|| StoreError::StepIdsExhausted(workflow_id.to_string()))?;
        let step_id = format_step_id(workflow_id, n);
        if entry.workflow.step(&step_id).is_some() {
            warn!("step id {step_id} already in use in workflow {workflow_id}");
        }
        entry.step_seq = entry.step_seq.max(n);
        entry.workflow.steps.push(step.into_step(step_id.clone()));
        debug!("add step {step_id} to workflow {workflow_id}");
        Ok(step_id)
    }

    fn update_step(&mut self, workflow_id: &str, step_id: &str, patch: StepPatch) -> Result<(), StoreError> {
        let entry = self.entry_mut(workflow_id)?;
        let step = entry.workflow
                        .steps
                        .iter_mut()
                        .find(|s| s.id == step_id)
                        .ok_or_else(|| step_not_found(workflow_id, step_id))?;
        patch.apply(step);
        debug!("update step {step_id} in workflow {workflow_id}");
        Ok(())
    }

    fn delete_step(&mut self, workflow_id: &str, step_id: &str) -> Result<(), StoreError> {
        let entry = self.entry_mut(workflow_id)?;
        let before = entry.workflow.steps.len();
        // elimina todas las coincidencias (ids posicionales repetidos incluidos)
        entry.workflow.steps.retain(|s| s.id != step_id);
        let removed = before - entry.workflow.steps.len();
        if removed == 0 {
            return Err(step_not_found(workflow_id, step_id));
        }
        debug!("delete step {step_id} from workflow {workflow_id} ({removed} removed)");
        Ok(())
    }

    fn move_step(&mut self, workflow_id: &str, step_id: &str, to_index: usize) -> Result<(), StoreError> {
        let entry = self.entry_mut(workflow_id)?;
        let steps = &mut entry.workflow.steps;
        let from = steps.iter()
                        .position(|s| s.id == step_id)
                        .ok_or_else(|| step_not_found(workflow_id, step_id))?;
        let step = steps.remove(from);
        let to = to_index.min(steps.len());
        steps.insert(to, step);
        debug!("move step {step_id} in workflow {workflow_id}: {from} -> {to}");
        Ok(())
    }
}

fn format_step_id(workflow_id: &str, n: u64) -> String {
    format!("{workflow_id}{STEP_ID_SEPARATOR}{n}")
}

fn step_not_found(workflow_id: &str, step_id: &str) -> StoreError {
    StoreError::StepNotFound { workflow_id: workflow_id.to_string(),
                               step_id: step_id.to_string() }
}

/// Mayor `n` entre los ids con forma `"{workflow_id}-{n}"`; 0 si no hay.
fn max_step_suffix(workflow_id: &str, steps: &[Step]) -> u64 {
    steps.iter()
         .filter_map(|s| s.id.strip_prefix(workflow_id))
         .filter_map(|rest| rest.strip_prefix(STEP_ID_SEPARATOR))
         .filter_map(|n| n.parse::<u64>().ok())
         .max()
         .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StepConfig;
    use serde_json::json;

    fn seeded() -> InMemoryWorkflowStore {
        InMemoryWorkflowStore::new(StoreConfig::default())
    }

    #[test]
    fn seeded_store_continues_after_samples() {
        let mut store = seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.peek_next_id(), "4");
        assert_eq!(store.add_workflow(NewWorkflow::new("Research", "desc")), "4");
        assert_eq!(store.add_workflow(NewWorkflow::new("", "")), "5");
    }

    #[test]
    fn first_id_is_respected_when_above_seed() {
        let cfg = StoreConfig { first_id: 100, ..StoreConfig::default() };
        let mut store = InMemoryWorkflowStore::new(cfg);
        assert_eq!(store.add_workflow(NewWorkflow::new("x", "")), "100");
    }

    #[test]
    fn first_id_below_seed_is_bumped() {
        let cfg = StoreConfig { first_id: 2, ..StoreConfig::default() };
        let mut store = InMemoryWorkflowStore::new(cfg);
        assert_eq!(store.add_workflow(NewWorkflow::new("x", "")), "4");
    }

    #[test]
    fn non_numeric_seed_ids_do_not_move_counter() {
        let wf = Workflow { id: "alpha".into(), name: "a".into(), description: String::new(), steps: vec![] };
        let mut store = InMemoryWorkflowStore::with_workflows(StoreConfig::empty(), vec![wf]);
        assert_eq!(store.add_workflow(NewWorkflow::new("x", "")), "1");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_step_scenario() {
        let mut store = seeded();
        let id = store.add_workflow(NewWorkflow::new("Research", "desc"));
        let step_id = store.add_step(&id, NewStep::new("ai-step", "Step1", "d").with_config(StepConfig::new()))
                           .unwrap();
        assert_eq!(step_id, "4-1");
        store.delete_workflow(&id).unwrap();
        assert!(store.get_workflow(&id).is_none());
        assert_eq!(store.add_step(&id, NewStep::default()), Err(StoreError::WorkflowNotFound("4".into())));
    }

    #[test]
    fn update_seeded_step_keeps_type_and_config() {
        let mut store = seeded();
        store.update_step("1", "1-1", StepPatch::default().with_name("Renamed")).unwrap();
        let wf = store.get_workflow("1").unwrap();
        let step = wf.step("1-1").unwrap();
        assert_eq!(step.name, "Renamed");
        assert_eq!(step.step_type, "ai-step");
        assert_eq!(step.config["model"], json!("default"));
    }

    #[test]
    fn positional_scheme_reissues_live_id_after_middle_delete() {
        let mut store = seeded();
        store.delete_step("1", "1-2").unwrap();
        let id = store.add_step("1", NewStep::new("ai-step", "again", "")).unwrap();
        assert_eq!(id, "1-3");
        let wf = store.get_workflow("1").unwrap();
        assert_eq!(wf.step_ids(), vec!["1-1", "1-3", "1-3"]);
        // el borrado elimina ambas coincidencias
        store.delete_step("1", "1-3").unwrap();
        assert_eq!(store.get_workflow("1").unwrap().step_ids(), vec!["1-1"]);
    }

    #[test]
    fn monotonic_scheme_never_reuses_ids() {
        let cfg = StoreConfig { step_ids: StepIdScheme::Monotonic, ..StoreConfig::default() };
        let mut store = InMemoryWorkflowStore::new(cfg);
        store.delete_step("1", "1-3").unwrap();
        assert_eq!(store.add_step("1", NewStep::new("x", "a", "")).unwrap(), "1-4");
        store.delete_step("1", "1-2").unwrap();
        assert_eq!(store.add_step("1", NewStep::new("x", "b", "")).unwrap(), "1-5");
    }

    #[test]
    fn monotonic_tracks_replaced_steps() {
        let cfg = StoreConfig { step_ids: StepIdScheme::Monotonic, ..StoreConfig::default() };
        let mut store = InMemoryWorkflowStore::new(cfg);
        let steps = vec![Step::new("2-9", "ai-step", "late", "")];
        store.update_workflow("2", WorkflowPatch::default().with_steps(steps)).unwrap();
        assert_eq!(store.add_step("2", NewStep::new("x", "n", "")).unwrap(), "2-10");
    }

    #[test]
    fn move_step_reorders_and_clamps() {
        let mut store = seeded();
        store.move_step("3", "3-3", 0).unwrap();
        assert_eq!(store.get_workflow("3").unwrap().step_ids(), vec!["3-3", "3-1", "3-2"]);
        store.move_step("3", "3-3", 99).unwrap();
        assert_eq!(store.get_workflow("3").unwrap().step_ids(), vec!["3-1", "3-2", "3-3"]);
        assert!(store.move_step("3", "3-9", 0).is_err());
    }

    #[test]
    fn failed_operations_leave_state_untouched() {
        let mut store = seeded();
        let before = store.list_workflows();
        assert!(store.update_workflow("42", WorkflowPatch::default().with_name("x")).is_err());
        assert!(store.delete_workflow("42").is_err());
        assert!(store.update_step("1", "2-1", StepPatch::default().with_name("x")).is_err());
        assert!(store.delete_step("1", "1-9").is_err());
        assert_eq!(store.list_workflows(), before);
    }

    #[test]
    fn delete_keeps_relative_order() {
        let mut store = seeded();
        store.delete_workflow("2").unwrap();
        let ids: Vec<_> = store.list_workflows().into_iter().map(|w| w.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn workflow_counter_saturates_at_u64_max() {
        let cfg = StoreConfig { first_id: u64::MAX, ..StoreConfig::empty() };
        let mut store = InMemoryWorkflowStore::new(cfg);
        assert_eq!(store.add_workflow(NewWorkflow::new("a", "")), u64::MAX.to_string());
        assert_eq!(store.add_workflow(NewWorkflow::new("b", "")), "0");
        assert_eq!(store.add_workflow(NewWorkflow::new("c", "")), "1");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn monotonic_step_counter_exhausted_is_error_and_noop() {
        let cfg = StoreConfig { step_ids: StepIdScheme::Monotonic, ..StoreConfig::default() };
        let mut store = InMemoryWorkflowStore::new(cfg);
        let last = Step::new(format!("1-{}", u64::MAX), "ai-step", "last", "");
        store.update_workflow("1", WorkflowPatch::default().with_steps(vec![last])).unwrap();
        let before = store.get_workflow("1");
        assert_eq!(store.add_step("1", NewStep::new("x", "n", "")), Err(StoreError::StepIdsExhausted("1".into())));
        assert_eq!(store.get_workflow("1"), before);
    }

    #[test]
    fn update_step_can_change_type() {
        let mut store = seeded();
        store.update_step("2", "2-1", StepPatch::default().with_type("inputs")).unwrap();
        let wf = store.get_workflow("2").unwrap();
        assert_eq!(wf.step("2-1").unwrap().step_type, "inputs");
        assert_eq!(wf.step("2-1").unwrap().config["required"], json!(true));
    }

    #[test]
    fn add_workflow_with_initial_steps() {
        let mut store = InMemoryWorkflowStore::new(StoreConfig::empty());
        let steps = vec![Step::new("1-1", "prompts", "p", "")];
        let id = store.add_workflow(NewWorkflow::new("w", "").with_steps(steps));
        assert_eq!(store.get_workflow(&id).unwrap().step_ids(), vec!["1-1"]);
        assert_eq!(store.add_step(&id, NewStep::new("x", "", "")).unwrap(), "1-2");
    }

    #[test]
    fn max_suffix_ignores_foreign_ids() {
        let steps = vec![Step::new("1-2", "t", "", ""), Step::new("10-7", "t", "", ""), Step::new("1-x", "t", "", "")];
        assert_eq!(max_step_suffix("1", &steps), 2);
    }
}
