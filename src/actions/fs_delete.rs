use crate::{
    actions::resolve_workspace_child, context::ActionContext, errors::ActionError,
    registry::Action,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Deletes files and directories inside the job workspace.
pub struct FsDeleteAction;

impl FsDeleteAction {
    fn files(input: &Value) -> Result<Vec<String>, ActionError> {
        let invalid = || ActionError::InvalidInput("files must be an Array of strings".into());
        let entries = input.get("files").and_then(Value::as_array).ok_or_else(invalid)?;
        entries
            .iter()
            .map(|v| v.as_str().map(str::to_owned).ok_or_else(invalid))
            .collect()
    }
}

async fn remove_entry(path: &Path) -> Result<(), ActionError> {
    // symlink_metadata classifies the entry itself, so a symlinked directory is
    // unlinked rather than followed
    match tokio::fs::symlink_metadata(path).await {
        Ok(meta) if meta.is_dir() => Ok(tokio::fs::remove_dir_all(path).await?),
        Ok(_) => Ok(tokio::fs::remove_file(path).await?),
        // already gone; delete is idempotent
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[async_trait]
impl Action for FsDeleteAction {
    fn name(&self) -> &'static str {
        "fs:delete"
    }

    fn schema(&self) -> Value {
        json!({"input": {"type":"object","required":["files"],"properties": {"files": {"type":"array","items":{"type":"string"},"description":"A list of files and directories that will be deleted"}}}, "output": {"type":"null"}})
    }

    async fn call(&self, ctx: &ActionContext) -> Result<Value, ActionError> {
        let files = Self::files(ctx.input())?;

        // validate the whole batch before touching anything; one bad entry
        // means nothing gets deleted
        let targets: Vec<PathBuf> = files
            .iter()
            .map(|f| resolve_workspace_child(ctx.workspace_path(), Path::new(f)))
            .collect::<Result<_, _>>()?;

        for target in &targets {
            remove_entry(target).await?;
            debug!(path = %target.display(), "removed");
        }
        Ok(Value::Null)
    }
}
