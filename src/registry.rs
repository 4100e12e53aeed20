use crate::{context::ActionContext, errors::ActionError};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

pub type DynAction = Arc<dyn Action + Send + Sync + 'static>;

/// A named handler the orchestrator can dispatch a job step to.
#[async_trait]
pub trait Action {
    fn name(&self) -> &'static str;
    fn schema(&self) -> serde_json::Value;
    async fn call(&self, ctx: &ActionContext) -> Result<serde_json::Value, ActionError>;
}

/// Capability listing for one registered action.
#[derive(Debug, Serialize)]
pub struct ActionInfo {
    pub name: String,
    pub input_schema: serde_json::Value,
    pub output_schema: serde_json::Value,
}

#[derive(Clone)]
pub struct ActionRegistry {
    actions: Vec<(String, DynAction)>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        use crate::actions::fs_delete::FsDeleteAction;
        let mut actions: Vec<(String, DynAction)> =
            vec![("fs:delete".to_string(), Arc::new(FsDeleteAction))];
        actions.sort_by(|a, b| a.0.cmp(&b.0));
        Self { actions }
    }

    pub fn get(&self, name: &str) -> Option<DynAction> {
        self.actions.iter().find(|(n, _)| n == name).map(|(_, a)| a.clone())
    }

    pub fn list_names(&self) -> Vec<String> {
        self.actions.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn list(&self) -> Vec<ActionInfo> {
        self.actions
            .iter()
            .map(|(n, a)| {
                let schema = a.schema();
                ActionInfo {
                    name: n.clone(),
                    input_schema: schema.get("input").cloned().unwrap_or(serde_json::Value::Null),
                    output_schema: schema.get("output").cloned().unwrap_or(serde_json::Value::Null),
                }
            })
            .collect()
    }

    /// Dispatch a step by action name.
    pub async fn call(
        &self,
        name: &str,
        ctx: &ActionContext,
    ) -> Result<serde_json::Value, ActionError> {
        let action = self
            .get(name)
            .ok_or_else(|| ActionError::UnknownAction(name.to_string()))?;
        action.call(ctx).await
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
