//! Configuration data structures for hookctl.

use serde::{Deserialize, Serialize};

/// Tool configuration, merged from defaults, the optional project file,
/// the environment, and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookctlConfig {
    /// Tag written hook files with the generator marker. Turning this off
    /// yields bare `#!/bin/sh` + command files, at the cost of ownership
    /// tracking (uninstall and stale removal can no longer identify them).
    #[serde(default = "default_tagging")]
    pub tagging: bool,

    /// Treat the environment as CI and skip installation. `None` means
    /// "decide from the `CI` environment variable".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci: Option<bool>,
}

impl Default for HookctlConfig {
    fn default() -> Self {
        Self {
            tagging: default_tagging(),
            ci: None,
        }
    }
}

impl HookctlConfig {
    /// The resolved CI decision; unresolved means not CI.
    pub fn is_ci(&self) -> bool {
        self.ci.unwrap_or(false)
    }
}

fn default_tagging() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
