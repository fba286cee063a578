//! End-to-end lifecycle: declare hooks in a manifest, install, inspect,
//! change the manifest, reinstall, uninstall.

use serde_json::json;
use tempfile::TempDir;

use hookctl::hooks::install::{install_git_hooks, InstallOptions};
use hookctl::hooks::script::GENERATOR_MARKER;
use hookctl::hooks::status::{hook_statuses, HookState};
use hookctl::hooks::uninstall::{uninstall_git_hooks, UninstallOptions};

fn write_manifest(tmp: &TempDir, scripts: serde_json::Value) {
    std::fs::write(
        tmp.path().join("package.json"),
        serde_json::to_string_pretty(&json!({ "scripts": scripts })).unwrap(),
    )
    .unwrap();
}

#[tokio::test]
async fn full_lifecycle() {
    let tmp = TempDir::new().unwrap();
    write_manifest(
        &tmp,
        json!({
            "git-hook-pre-commit": "node ./whatever.js",
            "git-hook-pre-push": "cargo test",
            "build": "tsc",
        }),
    );

    // Install writes both hooks, executable, with the marker.
    let report = install_git_hooks(&InstallOptions::new(tmp.path())).await.unwrap();
    assert_eq!(report.written, 2);

    let pre_commit = tmp.path().join(".git/hooks/pre-commit");
    let content = std::fs::read_to_string(&pre_commit).unwrap();
    assert_eq!(
        content,
        format!("#!/bin/sh\n{GENERATOR_MARKER}\nnode ./whatever.js")
    );

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&pre_commit).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    // Status sees both as installed.
    let statuses = hook_statuses(tmp.path(), true).await.unwrap();
    assert_eq!(statuses.len(), 2);
    assert!(statuses.iter().all(|s| s.state == HookState::Installed));

    // Reinstall is a byte-identical no-op.
    let rerun = install_git_hooks(&InstallOptions::new(tmp.path())).await.unwrap();
    assert_eq!(rerun.written, 0);
    assert_eq!(rerun.kept, 2);

    // Dropping one manifest entry removes only that hook's file.
    write_manifest(&tmp, json!({ "git-hook-pre-commit": "node ./whatever.js" }));
    let pruned = install_git_hooks(&InstallOptions::new(tmp.path())).await.unwrap();
    assert_eq!(pruned.removed, 1);
    assert!(pre_commit.exists());
    assert!(!tmp.path().join(".git/hooks/pre-push").exists());

    // Uninstall removes what's left of ours and nothing else.
    let foreign = tmp.path().join(".git/hooks/commit-msg");
    std::fs::write(&foreign, "#!/bin/sh\necho user hook\n").unwrap();

    let removed = uninstall_git_hooks(&UninstallOptions::new(tmp.path())).await.unwrap();
    assert_eq!(removed.removed, 1);
    assert_eq!(removed.kept, 1);
    assert!(!pre_commit.exists());
    assert!(foreign.exists());
}

#[tokio::test]
async fn ci_environment_installs_nothing() {
    let tmp = TempDir::new().unwrap();
    write_manifest(&tmp, json!({ "git-hook-pre-commit": "node ./whatever.js" }));

    let mut options = InstallOptions::new(tmp.path());
    options.ci = true;
    install_git_hooks(&options).await.unwrap();

    assert!(!tmp.path().join(".git").exists());
}
