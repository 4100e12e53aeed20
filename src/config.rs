use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::context::ActionContext;

/// Host-side configuration: where job workspaces live.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub workspace: Workspace,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Workspace {
    pub dir: PathBuf,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Ok(serde_json::from_str(&raw)?)
        } else {
            Ok(toml::from_str(&raw)?)
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.workspace.dir.is_dir() {
            anyhow::bail!(
                "workspace dir does not exist or is not a directory: {}",
                self.workspace.dir.display()
            );
        }
        Ok(())
    }

    /// Canonical absolute form of the configured workspace dir.
    pub fn canonical_workspace_dir(&self) -> anyhow::Result<PathBuf> {
        Ok(dunce::canonicalize(&self.workspace.dir)?)
    }

    /// Build the execution context for one job step rooted at the configured dir.
    pub fn job_context(&self, input: serde_json::Value) -> anyhow::Result<ActionContext> {
        Ok(ActionContext::new(self.canonical_workspace_dir()?, input))
    }
}
