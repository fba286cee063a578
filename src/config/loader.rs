//! Config loading with priority merging.
//!
//! Priority order (highest wins):
//!   CLI flags > Environment > Project config file > Defaults
//!
//! The only environment probe lives here: the `CI` variable. Core
//! operations receive an already-resolved boolean.

use std::ffi::OsStr;
use std::path::Path;

use super::schema::HookctlConfig;

/// Optional project config file, looked up in the project directory.
pub const PROJECT_CONFIG_FILE: &str = ".githooks.yaml";

/// Explicit overrides from the CLI, applied last.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigOverrides {
    pub ci: Option<bool>,
    pub tagging: Option<bool>,
}

/// Load configuration from all sources and merge them.
pub fn load_config(project_dir: &Path, overrides: ConfigOverrides) -> HookctlConfig {
    let mut config = HookctlConfig::default();

    // Layer 2: project config file
    if let Some(project) = load_project_config(project_dir) {
        config = merge_configs(config, project);
    }

    // Layer 3: environment
    if let Some(ci) = ci_from_env(std::env::var_os("CI").as_deref()) {
        config.ci = Some(ci);
    }

    // Layer 4: CLI flags (highest priority)
    if let Some(ci) = overrides.ci {
        config.ci = Some(ci);
    }
    if let Some(tagging) = overrides.tagging {
        config.tagging = tagging;
    }

    config
}

/// Load `.githooks.yaml` from the project directory.
///
/// Returns `None` if the file does not exist or is unparseable.
pub fn load_project_config(dir: &Path) -> Option<HookctlConfig> {
    let contents = std::fs::read_to_string(dir.join(PROJECT_CONFIG_FILE)).ok()?;
    serde_yaml::from_str(&contents).ok()
}

/// Interpret the `CI` environment variable.
///
/// Any non-empty value means CI — providers disagree on what they set
/// (`true`, `1`, a build id), so presence is the signal. Unset or empty
/// means "no opinion".
fn ci_from_env(value: Option<&OsStr>) -> Option<bool> {
    match value {
        Some(v) if !v.is_empty() => Some(true),
        _ => None,
    }
}

/// Merge two configs: `overlay` fields take priority over `base`.
fn merge_configs(base: HookctlConfig, overlay: HookctlConfig) -> HookctlConfig {
    HookctlConfig {
        tagging: overlay.tagging,
        ci: overlay.ci.or(base.ci),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
