//! Manifest reading — extracts hook commands from `package.json`.
//!
//! The manifest's `scripts` object may declare hooks through keys of the
//! form `git-hook-<name>` (e.g. `git-hook-pre-commit`). Keys naming a hook
//! git doesn't know are warned about and skipped; a missing or malformed
//! manifest file fails the whole operation.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::{HookError, Result};
use crate::hooks::names::{HookName, MANIFEST_KEY_PREFIX};

/// File name of the project manifest.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// The slice of the manifest this tool cares about.
///
/// Everything outside `scripts` is ignored on purpose — the manifest schema
/// beyond the `git-hook-` key prefix is not ours to interpret.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Manifest {
    /// Script definitions; absent in the file means empty.
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
}

impl Manifest {
    /// Extract the declared hook commands, keyed by validated hook name.
    ///
    /// Keys without the `git-hook-` prefix are ignored (they're ordinary
    /// scripts). Prefixed keys naming an unknown hook produce a warning and
    /// are skipped.
    pub fn hook_commands(&self) -> BTreeMap<HookName, String> {
        let mut commands = BTreeMap::new();
        for (key, command) in &self.scripts {
            let Some(name) = key.strip_prefix(MANIFEST_KEY_PREFIX) else {
                continue;
            };
            match HookName::from_str_loose(name) {
                Some(hook) => {
                    commands.insert(hook, command.clone());
                }
                None => warn!("unknown hook '{}' in manifest key '{}', skipping", name, key),
            }
        }
        commands
    }
}

/// Read and parse the manifest in `project_dir`.
///
/// A missing file maps to [`HookError::ManifestNotFound`]; malformed JSON
/// maps to [`HookError::ManifestParse`]. Both are fatal to the caller.
pub fn read_manifest(project_dir: &Path) -> Result<Manifest> {
    let path = project_dir.join(MANIFEST_FILE_NAME);
    let contents = fs::read_to_string(&path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            HookError::ManifestNotFound(path.clone())
        } else {
            HookError::Io(e)
        }
    })?;
    Ok(serde_json::from_str(&contents)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, value: serde_json::Value) {
        std::fs::write(
            dir.path().join(MANIFEST_FILE_NAME),
            serde_json::to_string_pretty(&value).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn hook_commands_extracts_prefixed_keys() {
        let manifest: Manifest = serde_json::from_value(json!({
            "scripts": {
                "git-hook-pre-commit": "node ./whatever.js",
                "git-hook-pre-push": "cargo test",
                "build": "tsc",
            }
        }))
        .unwrap();

        let commands = manifest.hook_commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands.get(&HookName::PreCommit).map(String::as_str),
            Some("node ./whatever.js")
        );
        assert_eq!(
            commands.get(&HookName::PrePush).map(String::as_str),
            Some("cargo test")
        );
    }

    #[test]
    fn hook_commands_skips_unknown_hook_names() {
        let manifest: Manifest = serde_json::from_value(json!({
            "scripts": {
                "git-hook-before-commit": "echo nope",
                "git-hook-pre-commit": "echo yes",
            }
        }))
        .unwrap();

        let commands = manifest.hook_commands();
        assert_eq!(commands.len(), 1);
        assert!(commands.contains_key(&HookName::PreCommit));
    }

    #[test]
    fn hook_commands_ignores_ordinary_scripts() {
        let manifest: Manifest = serde_json::from_value(json!({
            "scripts": { "test": "cargo test", "lint": "cargo clippy" }
        }))
        .unwrap();
        assert!(manifest.hook_commands().is_empty());
    }

    #[test]
    fn manifest_without_scripts_is_empty() {
        let manifest: Manifest = serde_json::from_value(json!({ "name": "demo" })).unwrap();
        assert!(manifest.scripts.is_empty());
        assert!(manifest.hook_commands().is_empty());
    }

    #[test]
    fn read_manifest_parses_file() {
        let tmp = TempDir::new().unwrap();
        write_manifest(
            &tmp,
            json!({ "scripts": { "git-hook-post-commit": "echo done" } }),
        );

        let manifest = read_manifest(tmp.path()).unwrap();
        assert_eq!(
            manifest.hook_commands().get(&HookName::PostCommit).map(String::as_str),
            Some("echo done")
        );
    }

    #[test]
    fn read_manifest_missing_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = read_manifest(tmp.path()).unwrap_err();
        assert!(matches!(err, HookError::ManifestNotFound(_)));
    }

    #[test]
    fn read_manifest_malformed_json_is_fatal() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(MANIFEST_FILE_NAME), "{not json").unwrap();
        let err = read_manifest(tmp.path()).unwrap_err();
        assert!(matches!(err, HookError::ManifestParse(_)));
    }
}
