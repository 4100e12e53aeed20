use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Per-invocation execution context handed to an action by the orchestrator.
///
/// Carries the step's JSON input and the workspace root the step runs against,
/// plus an output sink and a temp-dir factory for actions that need them. The
/// workspace root is fixed for the duration of one invocation.
pub struct ActionContext {
    input: Value,
    workspace_path: PathBuf,
    outputs: Mutex<serde_json::Map<String, Value>>,
}

impl ActionContext {
    pub fn new(workspace_path: impl Into<PathBuf>, input: Value) -> Self {
        Self {
            input,
            workspace_path: workspace_path.into(),
            outputs: Mutex::new(serde_json::Map::new()),
        }
    }

    pub fn input(&self) -> &Value {
        &self.input
    }

    pub fn workspace_path(&self) -> &Path {
        &self.workspace_path
    }

    /// Record a named output for the orchestrator to collect after the step.
    pub fn output(&self, key: &str, value: Value) {
        self.outputs.lock().expect("outputs mutex poisoned").insert(key.to_string(), value);
    }

    /// Drain the outputs recorded so far.
    pub fn take_outputs(&self) -> serde_json::Map<String, Value> {
        std::mem::take(&mut *self.outputs.lock().expect("outputs mutex poisoned"))
    }

    /// Scratch directory outside the workspace; removed when the handle drops.
    pub fn create_temporary_directory(&self) -> std::io::Result<TempDir> {
        tempfile::tempdir()
    }
}
