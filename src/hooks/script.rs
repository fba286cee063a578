//! Hook file rendering and ownership detection.

/// Marker comment embedded in generated hook files so we can find (and
/// remove) our files without disturbing user-written hooks.
pub const GENERATOR_MARKER: &str = "# Generated by hookctl";

/// Render the shell script body for a hook command.
///
/// With `tagging` enabled the marker line sits between the shebang and the
/// command; without it the file is just shebang plus command. No trailing
/// newline: the rendered bytes are exactly what the idempotence comparison
/// sees.
pub fn render_hook_file(command: &str, tagging: bool) -> String {
    if tagging {
        format!("#!/bin/sh\n{GENERATOR_MARKER}\n{command}")
    } else {
        format!("#!/bin/sh\n{command}")
    }
}

/// Whether a hook file's content identifies it as one of ours.
pub fn is_generated(content: &str) -> bool {
    content.contains(GENERATOR_MARKER)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
