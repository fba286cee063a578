//! Terminal output for the hookctl CLI.

use console::style;
use dialoguer::Confirm;

use crate::hooks::install::InstallReport;
use crate::hooks::status::{HookState, HookStatus};
use crate::hooks::uninstall::UninstallReport;

/// Ask for confirmation (returns true if `--yes` was passed or the user
/// confirms).
pub fn confirm(message: &str, non_interactive: bool) -> bool {
    if non_interactive {
        return true;
    }
    Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()
        .unwrap_or(false)
}

/// Print the post-install summary.
pub fn print_install_summary(report: &InstallReport) {
    if report.written > 0 {
        println!("  {} {} hook file(s) written", style("✓").green(), report.written);
    }
    if report.kept > 0 {
        println!(
            "  {} {} hook(s) already up to date",
            style("✓").green(),
            report.kept
        );
    }
    if report.removed > 0 {
        println!(
            "  {} {} stale hook(s) removed",
            style("✓").green(),
            report.removed
        );
    }
    if report.ignored > 0 {
        println!(
            "  {} {} user-authored hook(s) left untouched",
            style("!").yellow(),
            report.ignored
        );
    }
    if *report == InstallReport::default() {
        println!("  {} nothing to do", style("·").dim());
    }
}

/// Print the post-uninstall summary.
pub fn print_uninstall_summary(report: &UninstallReport) {
    if report.removed > 0 {
        println!("  {} {} hook(s) removed", style("✓").green(), report.removed);
    }
    if report.kept > 0 {
        println!(
            "  {} {} user-authored hook(s) left untouched",
            style("!").yellow(),
            report.kept
        );
    }
    if *report == UninstallReport::default() {
        println!("  {} no managed hooks found", style("·").dim());
    }
}

/// Print one line per hook: name, state, and the manifest command if any.
pub fn print_status(statuses: &[HookStatus]) {
    if statuses.is_empty() {
        println!("  {} no git hooks configured", style("·").dim());
        return;
    }

    for status in statuses {
        let state = match status.state {
            HookState::Installed => style(status.state.as_str()).green(),
            HookState::Pending | HookState::Outdated => style(status.state.as_str()).yellow(),
            HookState::Stale => style(status.state.as_str()).red(),
            HookState::UserAuthored => style(status.state.as_str()).dim(),
        };
        match &status.command {
            Some(command) => {
                println!("  {:20} {:14} {}", status.hook.to_string(), state, command)
            }
            None => println!("  {:20} {}", status.hook.to_string(), state),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
