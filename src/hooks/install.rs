//! Hook installation — reconciles `.git/hooks/` with the project manifest.
//!
//! For every hook git knows about, the installer compares the desired state
//! (a `git-hook-<name>` entry in the manifest, or its absence) with the file
//! on disk and converges:
//!
//! - no file, command declared → write the script and mark it executable
//! - file we generated, same command → keep (idempotent no-op)
//! - file we generated, different command → overwrite
//! - file we generated, command gone from manifest → remove the stale file
//! - file someone else wrote → never touched, whatever the manifest says
//!
//! Hooks reconcile concurrently; each targets a distinct path so no
//! coordination is needed, and the first unrecoverable error aborts the
//! batch.

use std::path::{Path, PathBuf};

use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::error::Result;
use crate::fsutil;
use crate::hooks::names::HookName;
use crate::hooks::script::{is_generated, render_hook_file};
use crate::manifest;

// ---------------------------------------------------------------------------
// Options and report
// ---------------------------------------------------------------------------

/// Options for [`install_git_hooks`].
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Root of the project (where `package.json` and `.git/` live).
    pub project_dir: PathBuf,

    /// When true the installation is skipped entirely. Callers decide what
    /// counts as CI; the environment probe lives in the config layer.
    pub ci: bool,

    /// Tag written files with the generator marker. Without the marker a
    /// file's ownership can't be proven, so foreign-file protection and
    /// stale removal are off and content comparison is the only guard.
    pub tagging: bool,
}

impl InstallOptions {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            ci: false,
            tagging: true,
        }
    }
}

/// What an installation run did, per category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InstallReport {
    /// Hook files written (new or overwritten).
    pub written: usize,
    /// Managed files already matching the manifest.
    pub kept: usize,
    /// Stale managed files removed.
    pub removed: usize,
    /// User-authored files left untouched despite a manifest entry.
    pub ignored: usize,
}

/// Per-hook reconciliation outcome, aggregated into an [`InstallReport`].
enum SyncOutcome {
    Absent,
    Written,
    Kept,
    Removed,
    Ignored,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Install the hooks declared in `package.json` into `.git/hooks/`.
///
/// Reads the manifest (fatal if missing or malformed), then reconciles all
/// twenty known hooks concurrently. Returns a count of what happened, or the
/// first error the batch hit.
pub async fn install_git_hooks(options: &InstallOptions) -> Result<InstallReport> {
    if options.ci {
        info!("CI environment, skipping git hook installation");
        return Ok(InstallReport::default());
    }

    let manifest = manifest::read_manifest(&options.project_dir)?;
    let commands = manifest.hook_commands();

    let mut set = JoinSet::new();
    for hook in HookName::ALL {
        let command = commands.get(&hook).cloned();
        let hook_path = hook_file_path(&options.project_dir, hook);
        let tagging = options.tagging;
        set.spawn(async move { sync_hook(hook, &hook_path, command.as_deref(), tagging).await });
    }

    let mut report = InstallReport::default();
    while let Some(joined) = set.join_next().await {
        match joined?? {
            SyncOutcome::Written => report.written += 1,
            SyncOutcome::Kept => report.kept += 1,
            SyncOutcome::Removed => report.removed += 1,
            SyncOutcome::Ignored => report.ignored += 1,
            SyncOutcome::Absent => {}
        }
    }
    Ok(report)
}

/// Where a hook's script lives relative to the project root.
pub(crate) fn hook_file_path(project_dir: &Path, hook: HookName) -> PathBuf {
    project_dir.join(".git").join("hooks").join(hook.as_str())
}

// ---------------------------------------------------------------------------
// Per-hook reconciliation
// ---------------------------------------------------------------------------

async fn sync_hook(
    hook: HookName,
    hook_path: &Path,
    command: Option<&str>,
    tagging: bool,
) -> Result<SyncOutcome> {
    let existing = fsutil::read_to_string_opt(hook_path).await?;

    match (existing.as_deref(), command) {
        (None, None) => Ok(SyncOutcome::Absent),

        (None, Some(command)) => {
            info!("write git {} hook at {}", hook, hook_path.display());
            write_hook(hook_path, &render_hook_file(command, tagging)).await?;
            Ok(SyncOutcome::Written)
        }

        (Some(existing), Some(command)) => {
            if tagging && !is_generated(existing) {
                info!(
                    "ignoring {} script: existing git {} hook was not generated by us",
                    hook.manifest_key(),
                    hook
                );
                return Ok(SyncOutcome::Ignored);
            }

            let desired = render_hook_file(command, tagging);
            if existing == desired {
                debug!("keep git {} hook, already up to date", hook);
                Ok(SyncOutcome::Kept)
            } else {
                info!("overwrite git {} hook at {}", hook, hook_path.display());
                write_hook(hook_path, &desired).await?;
                Ok(SyncOutcome::Written)
            }
        }

        (Some(existing), None) => {
            if is_generated(existing) {
                info!("remove stale git {} hook at {}", hook, hook_path.display());
                fsutil::remove_file_with_retry(hook_path).await?;
                Ok(SyncOutcome::Removed)
            } else {
                Ok(SyncOutcome::Absent)
            }
        }
    }
}

async fn write_hook(path: &Path, contents: &str) -> Result<()> {
    fsutil::write_file_ensuring_parents(path, contents).await?;
    fsutil::set_permissions(path, fsutil::FilePermissions::HOOK_FILE).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
