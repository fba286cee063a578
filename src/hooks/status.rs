//! Read-only view of how each hook stands relative to the manifest.

use std::path::Path;

use crate::error::Result;
use crate::fsutil;
use crate::hooks::install::hook_file_path;
use crate::hooks::names::HookName;
use crate::hooks::script::{is_generated, render_hook_file};
use crate::manifest;

/// How one hook's on-disk file relates to the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    /// Manifest declares the hook but no file exists yet.
    Pending,
    /// Managed file matches the manifest command.
    Installed,
    /// Managed file exists but its content differs from the manifest.
    Outdated,
    /// Managed file exists but the manifest no longer declares the hook.
    Stale,
    /// A file exists that we didn't generate.
    UserAuthored,
}

impl HookState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Installed => "installed",
            Self::Outdated => "outdated",
            Self::Stale => "stale",
            Self::UserAuthored => "user-authored",
        }
    }
}

/// One row of `hookctl status` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookStatus {
    pub hook: HookName,
    /// Command from the manifest, if declared.
    pub command: Option<String>,
    pub state: HookState,
}

/// Compute the state of every hook that is either declared in the manifest
/// or present on disk. Hooks with neither are omitted.
pub async fn hook_statuses(project_dir: &Path, tagging: bool) -> Result<Vec<HookStatus>> {
    let manifest = manifest::read_manifest(project_dir)?;
    let commands = manifest.hook_commands();

    let mut statuses = Vec::new();
    for hook in HookName::ALL {
        let command = commands.get(&hook);
        let content = fsutil::read_to_string_opt(&hook_file_path(project_dir, hook)).await?;

        let state = match (content.as_deref(), command) {
            (None, None) => continue,
            (None, Some(_)) => HookState::Pending,
            (Some(existing), Some(command)) => {
                if existing == render_hook_file(command, tagging) {
                    HookState::Installed
                } else if is_generated(existing) {
                    HookState::Outdated
                } else {
                    HookState::UserAuthored
                }
            }
            (Some(existing), None) => {
                if is_generated(existing) {
                    HookState::Stale
                } else {
                    HookState::UserAuthored
                }
            }
        };

        statuses.push(HookStatus {
            hook,
            command: command.cloned(),
            state,
        });
    }
    Ok(statuses)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
