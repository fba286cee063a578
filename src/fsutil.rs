//! Low-level filesystem helpers shared by the hook operations.
//!
//! Three concerns live here: stat-as-option (not-found is a normal answer,
//! not an error), writes that create missing parent directories, and deletes
//! that retry transient OS conditions (busy file, file-handle exhaustion)
//! with bounded backoff. Permission bits are computed from explicit
//! owner/group/others triples rather than a bare mode literal.

use std::future::Future;
use std::io;
use std::path::Path;
use std::time::Duration;

use tokio::fs;

/// How many times a transient delete failure is retried.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Base delay between retries; attempt N sleeps N times this.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(100);

// ---------------------------------------------------------------------------
// Bounded retry
// ---------------------------------------------------------------------------

/// Run `op`, retrying up to `max_retries` times when `is_transient` says the
/// failure may clear on its own. Sleeps `base_delay * attempt` between tries
/// (linear backoff). The final error is returned unchanged.
pub async fn retry_with_backoff<T, E, F, Fut>(
    max_retries: u32,
    base_delay: Duration,
    is_transient: impl Fn(&E) -> bool,
    mut op: F,
) -> std::result::Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    let mut attempt = 0u32;
    loop {
        match op().await {
            Err(err) if attempt < max_retries && is_transient(&err) => {
                attempt += 1;
                tokio::time::sleep(base_delay * attempt).await;
            }
            outcome => return outcome,
        }
    }
}

// EBUSY / EMFILE / ENFILE share these values on Linux and macOS.
#[cfg(unix)]
const EBUSY: i32 = 16;
#[cfg(unix)]
const ENFILE: i32 = 23;
#[cfg(unix)]
const EMFILE: i32 = 24;

/// Transient conditions worth retrying: a busy file or exhausted file
/// handles on unix; on other platforms a permission error sometimes means a
/// still-open handle, so retry that.
pub fn is_transient_fs_error(err: &io::Error) -> bool {
    #[cfg(unix)]
    {
        matches!(
            err.raw_os_error(),
            Some(EBUSY) | Some(ENFILE) | Some(EMFILE)
        )
    }
    #[cfg(not(unix))]
    {
        err.kind() == io::ErrorKind::PermissionDenied
    }
}

// ---------------------------------------------------------------------------
// Stat / read / write / remove
// ---------------------------------------------------------------------------

/// Stat a path, mapping not-found to `None`. Other errors propagate.
pub async fn stat_opt(path: &Path) -> io::Result<Option<std::fs::Metadata>> {
    match fs::metadata(path).await {
        Ok(meta) => Ok(Some(meta)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Read a file to a string, mapping not-found to `None`.
pub async fn read_to_string_opt(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write `contents` to `path`, creating missing parent directories.
///
/// The happy path is a plain write; only when that fails with not-found do
/// we create the parents and try once more.
pub async fn write_file_ensuring_parents(path: &Path, contents: &str) -> io::Result<()> {
    match fs::write(path, contents).await {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::write(path, contents).await
        }
        outcome => outcome,
    }
}

/// Delete a file, retrying transient failures. Not-found counts as success
/// (the file is gone either way).
pub async fn remove_file_with_retry(path: &Path) -> io::Result<()> {
    let outcome = retry_with_backoff(
        DEFAULT_MAX_RETRIES,
        DEFAULT_RETRY_DELAY,
        is_transient_fs_error,
        || fs::remove_file(path),
    )
    .await;

    match outcome {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        outcome => outcome,
    }
}

// ---------------------------------------------------------------------------
// Permissions
// ---------------------------------------------------------------------------

/// One subject's read/write/execute triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rwx {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

/// Owner/group/others permission triples with explicit mode-bit computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilePermissions {
    pub owner: Rwx,
    pub group: Rwx,
    pub others: Rwx,
}

impl FilePermissions {
    /// rwxr-xr-x — what git expects on an executable hook file. Write stays
    /// reserved to the owner.
    pub const HOOK_FILE: FilePermissions = FilePermissions {
        owner: Rwx {
            read: true,
            write: true,
            execute: true,
        },
        group: Rwx {
            read: true,
            write: false,
            execute: true,
        },
        others: Rwx {
            read: true,
            write: false,
            execute: true,
        },
    };

    /// Compose the POSIX mode bits (S_IRUSR through S_IXOTH).
    pub fn mode(&self) -> u32 {
        let mut mode = 0;
        if self.owner.read {
            mode |= 0o400;
        }
        if self.owner.write {
            mode |= 0o200;
        }
        if self.owner.execute {
            mode |= 0o100;
        }
        if self.group.read {
            mode |= 0o040;
        }
        if self.group.write {
            mode |= 0o020;
        }
        if self.group.execute {
            mode |= 0o010;
        }
        if self.others.read {
            mode |= 0o004;
        }
        if self.others.write {
            mode |= 0o002;
        }
        if self.others.execute {
            mode |= 0o001;
        }
        mode
    }
}

/// Apply permissions on POSIX. On Windows the execute bit doesn't exist and
/// git runs hooks regardless, so this is a no-op there.
pub async fn set_permissions(path: &Path, perms: FilePermissions) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, std::fs::Permissions::from_mode(perms.mode())).await?;
    }
    #[cfg(not(unix))]
    {
        let _ = (path, perms);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
