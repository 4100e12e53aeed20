pub mod fs_delete;

use crate::errors::ActionError;
use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// Resolve a caller-supplied path against the workspace root, rejecting escapes.
///
/// Join then clean, lexically: `.`/`..` segments are resolved on the string form
/// without touching the filesystem, so targets that no longer exist can still be
/// validated and symlinks are never followed by the check. The workspace root
/// itself counts as contained.
pub fn resolve_workspace_child(root: &Path, candidate: &Path) -> Result<PathBuf, ActionError> {
    let joined = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        root.join(candidate)
    };
    let resolved = joined.clean();
    if resolved.starts_with(root.clean()) {
        Ok(resolved)
    } else {
        Err(ActionError::PathTraversal { path: candidate.display().to_string() })
    }
}
