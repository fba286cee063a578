//! The fixed set of hook identifiers git knows about.

use std::fmt;

/// Prefix a manifest script key must carry to declare a git hook.
pub const MANIFEST_KEY_PREFIX: &str = "git-hook-";

/// One of the hook points git invokes during its lifecycle.
///
/// The set is closed: git only ever looks for these file names under
/// `.git/hooks/`, so a manifest entry naming anything else is a mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HookName {
    ApplypatchMsg,
    PreApplypatch,
    PostApplypatch,
    PreCommit,
    PreMergeCommit,
    PrepareCommitMsg,
    CommitMsg,
    PostCommit,
    PreRebase,
    PostCheckout,
    PostMerge,
    PrePush,
    PreReceive,
    Update,
    PostReceive,
    PostUpdate,
    PushToCheckout,
    PreAutoGc,
    PostRewrite,
    SendemailValidate,
}

impl HookName {
    /// Every known hook, in the order git's documentation lists them.
    pub const ALL: [HookName; 20] = [
        Self::ApplypatchMsg,
        Self::PreApplypatch,
        Self::PostApplypatch,
        Self::PreCommit,
        Self::PreMergeCommit,
        Self::PrepareCommitMsg,
        Self::CommitMsg,
        Self::PostCommit,
        Self::PreRebase,
        Self::PostCheckout,
        Self::PostMerge,
        Self::PrePush,
        Self::PreReceive,
        Self::Update,
        Self::PostReceive,
        Self::PostUpdate,
        Self::PushToCheckout,
        Self::PreAutoGc,
        Self::PostRewrite,
        Self::SendemailValidate,
    ];

    /// The file name git expects under `.git/hooks/`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApplypatchMsg => "applypatch-msg",
            Self::PreApplypatch => "pre-applypatch",
            Self::PostApplypatch => "post-applypatch",
            Self::PreCommit => "pre-commit",
            Self::PreMergeCommit => "pre-merge-commit",
            Self::PrepareCommitMsg => "prepare-commit-msg",
            Self::CommitMsg => "commit-msg",
            Self::PostCommit => "post-commit",
            Self::PreRebase => "pre-rebase",
            Self::PostCheckout => "post-checkout",
            Self::PostMerge => "post-merge",
            Self::PrePush => "pre-push",
            Self::PreReceive => "pre-receive",
            Self::Update => "update",
            Self::PostReceive => "post-receive",
            Self::PostUpdate => "post-update",
            Self::PushToCheckout => "push-to-checkout",
            Self::PreAutoGc => "pre-auto-gc",
            Self::PostRewrite => "post-rewrite",
            Self::SendemailValidate => "sendemail-validate",
        }
    }

    /// Parse a hook name as it appears in file names and manifest keys.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim() {
            "applypatch-msg" => Some(Self::ApplypatchMsg),
            "pre-applypatch" => Some(Self::PreApplypatch),
            "post-applypatch" => Some(Self::PostApplypatch),
            "pre-commit" => Some(Self::PreCommit),
            "pre-merge-commit" => Some(Self::PreMergeCommit),
            "prepare-commit-msg" => Some(Self::PrepareCommitMsg),
            "commit-msg" => Some(Self::CommitMsg),
            "post-commit" => Some(Self::PostCommit),
            "pre-rebase" => Some(Self::PreRebase),
            "post-checkout" => Some(Self::PostCheckout),
            "post-merge" => Some(Self::PostMerge),
            "pre-push" => Some(Self::PrePush),
            "pre-receive" => Some(Self::PreReceive),
            "update" => Some(Self::Update),
            "post-receive" => Some(Self::PostReceive),
            "post-update" => Some(Self::PostUpdate),
            "push-to-checkout" => Some(Self::PushToCheckout),
            "pre-auto-gc" => Some(Self::PreAutoGc),
            "post-rewrite" => Some(Self::PostRewrite),
            "sendemail-validate" => Some(Self::SendemailValidate),
            _ => None,
        }
    }

    /// The manifest script key declaring this hook (`git-hook-<name>`).
    pub fn manifest_key(&self) -> String {
        format!("{}{}", MANIFEST_KEY_PREFIX, self.as_str())
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
