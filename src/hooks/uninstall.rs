//! Hook removal — deletes the files we generated, nothing else.

use std::path::{Path, PathBuf};

use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::error::Result;
use crate::fsutil;
use crate::hooks::install::hook_file_path;
use crate::hooks::names::HookName;
use crate::hooks::script::is_generated;

/// Options for [`uninstall_git_hooks`].
#[derive(Debug, Clone)]
pub struct UninstallOptions {
    /// Root of the project (where `.git/` lives).
    pub project_dir: PathBuf,
}

impl UninstallOptions {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
        }
    }
}

/// What an uninstall run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UninstallReport {
    /// Managed hook files deleted.
    pub removed: usize,
    /// Files left in place because they weren't generated by us.
    pub kept: usize,
}

enum RemoveOutcome {
    Absent,
    Removed,
    Kept,
}

/// Remove every hook file carrying the generator marker.
///
/// User-authored hooks of the same names are left untouched. Like
/// installation this runs concurrently across hook names and propagates the
/// first unrecoverable error.
pub async fn uninstall_git_hooks(options: &UninstallOptions) -> Result<UninstallReport> {
    let mut set = JoinSet::new();
    for hook in HookName::ALL {
        let hook_path = hook_file_path(&options.project_dir, hook);
        set.spawn(async move { remove_hook_if_generated(hook, &hook_path).await });
    }

    let mut report = UninstallReport::default();
    while let Some(joined) = set.join_next().await {
        match joined?? {
            RemoveOutcome::Removed => report.removed += 1,
            RemoveOutcome::Kept => report.kept += 1,
            RemoveOutcome::Absent => {}
        }
    }
    Ok(report)
}

async fn remove_hook_if_generated(hook: HookName, hook_path: &Path) -> Result<RemoveOutcome> {
    let Some(content) = fsutil::read_to_string_opt(hook_path).await? else {
        debug!("no file for git {} hook", hook);
        return Ok(RemoveOutcome::Absent);
    };

    if is_generated(&content) {
        info!("remove git {} hook at {}", hook, hook_path.display());
        fsutil::remove_file_with_retry(hook_path).await?;
        Ok(RemoveOutcome::Removed)
    } else {
        debug!(
            "keep git {} hook at {}, not generated by us",
            hook,
            hook_path.display()
        );
        Ok(RemoveOutcome::Kept)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::install::{install_git_hooks, InstallOptions};
    use serde_json::json;
    use tempfile::TempDir;

    fn write_manifest(tmp: &TempDir, scripts: serde_json::Value) {
        std::fs::write(
            tmp.path().join("package.json"),
            serde_json::to_string(&json!({ "scripts": scripts })).unwrap(),
        )
        .unwrap();
    }

    #[tokio::test]
    async fn uninstall_removes_managed_hooks() {
        let tmp = TempDir::new().unwrap();
        write_manifest(
            &tmp,
            json!({ "git-hook-pre-commit": "a", "git-hook-pre-push": "b" }),
        );
        install_git_hooks(&InstallOptions::new(tmp.path())).await.unwrap();

        let report = uninstall_git_hooks(&UninstallOptions::new(tmp.path())).await.unwrap();

        assert_eq!(report.removed, 2);
        assert!(!tmp.path().join(".git/hooks/pre-commit").exists());
        assert!(!tmp.path().join(".git/hooks/pre-push").exists());
    }

    #[tokio::test]
    async fn uninstall_spares_user_authored_hooks() {
        let tmp = TempDir::new().unwrap();
        let hooks_dir = tmp.path().join(".git").join("hooks");
        std::fs::create_dir_all(&hooks_dir).unwrap();
        let path = hooks_dir.join("pre-commit");
        std::fs::write(&path, "#!/bin/sh\necho mine\n").unwrap();

        let report = uninstall_git_hooks(&UninstallOptions::new(tmp.path())).await.unwrap();

        assert_eq!(report.removed, 0);
        assert_eq!(report.kept, 1);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn uninstall_with_no_hooks_dir_is_a_noop() {
        let tmp = TempDir::new().unwrap();
        let report = uninstall_git_hooks(&UninstallOptions::new(tmp.path())).await.unwrap();
        assert_eq!(report, UninstallReport::default());
    }

    #[tokio::test]
    async fn uninstall_mixed_tree_removes_only_ours() {
        let tmp = TempDir::new().unwrap();
        write_manifest(&tmp, json!({ "git-hook-commit-msg": "check" }));
        install_git_hooks(&InstallOptions::new(tmp.path())).await.unwrap();

        let foreign = tmp.path().join(".git/hooks/pre-rebase");
        std::fs::write(&foreign, "#!/bin/sh\nexit 1\n").unwrap();

        let report = uninstall_git_hooks(&UninstallOptions::new(tmp.path())).await.unwrap();

        assert_eq!(report.removed, 1);
        assert_eq!(report.kept, 1);
        assert!(foreign.exists());
        assert!(!tmp.path().join(".git/hooks/commit-msg").exists());
    }
}
