//! Rename executor: applies a [`Plan`] one entry at a time.
//!
//! Each entry goes through a small state machine:
//!
//! ```text
//! vcs move ──ok──────────────────────────────▶ Moved
//!    │
//!    └─fail─▶ raw rename ──ok─▶ stage/unstage ▶ Reconciled
//!                  │
//!                  └─fail─────────────────────▶ Failed
//! ```
//!
//! Entries run strictly in plan order. Failures are recorded and the batch
//! carries on; nothing is rolled back.

use crate::error::Result;
use crate::plan::{Plan, PlanIssue, RenamePlanEntry};
use serde::Serialize;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// The version-control operations the executor needs.
pub trait Vcs {
    /// Top of the working tree. Fails when not inside one.
    fn repository_root(&self) -> Result<PathBuf>;
    /// Whether the index has an entry for `path`.
    fn is_tracked(&self, path: &str) -> bool;
    /// Tracked rename of `source` to `target`.
    fn move_path(&self, source: &str, target: &str) -> Result<()>;
    fn stage(&self, path: &str) -> Result<()>;
    fn unstage(&self, path: &str) -> Result<()>;
}

/// A rename that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveFailure {
    pub source: String,
    pub target: String,
    /// Filesystem error from the fallback rename, if it was anything other
    /// than a missing source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl fmt::Display for MoveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to move '{}' -> '{}'", self.source, self.target)?;
        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

/// How a single plan entry ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Source and target were equal; nothing to do.
    Skipped,
    /// The version-control move succeeded.
    Moved,
    /// Moved on the filesystem, then the index was fixed up by hand.
    Reconciled,
    Failed(MoveFailure),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExecutionResult {
    /// Renames that took effect, in the order they ran.
    pub changed: Vec<RenamePlanEntry>,
    pub failed: Vec<MoveFailure>,
    /// Structural issues carried over from planning.
    pub issues: Vec<PlanIssue>,
}

impl ExecutionResult {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty() || !self.issues.is_empty()
    }
}

/// Apply every entry of `plan`, resolving paths against `workdir`.
pub fn apply_plan<V: Vcs + ?Sized>(plan: Plan, vcs: &V, workdir: &Path) -> ExecutionResult {
    let mut result = ExecutionResult {
        issues: plan.issues,
        ..Default::default()
    };

    for entry in plan.entries {
        match apply_entry(&entry, vcs, workdir) {
            EntryOutcome::Skipped => {}
            EntryOutcome::Moved | EntryOutcome::Reconciled => {
                crate::log_status!("rename", "'{}' -> '{}'", entry.source, entry.target);
                result.changed.push(entry);
            }
            EntryOutcome::Failed(failure) => result.failed.push(failure),
        }
    }

    result
}

/// Run one entry through the move-with-fallback state machine.
pub fn apply_entry<V: Vcs + ?Sized>(
    entry: &RenamePlanEntry,
    vcs: &V,
    workdir: &Path,
) -> EntryOutcome {
    if entry.source == entry.target {
        return EntryOutcome::Skipped;
    }

    let destination = workdir.join(&entry.target);
    if let Some(parent) = destination.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::warn!("Could not create '{}': {}", parent.display(), e);
        }
    }

    match vcs.move_path(&entry.source, &entry.target) {
        Ok(()) => EntryOutcome::Moved,
        Err(e) => {
            log::debug!(
                "vcs move '{}' -> '{}' failed ({}), falling back to rename",
                entry.source,
                entry.target,
                e
            );
            raw_move(entry, vcs, workdir, &destination)
        }
    }
}

fn raw_move<V: Vcs + ?Sized>(
    entry: &RenamePlanEntry,
    vcs: &V,
    workdir: &Path,
    destination: &Path,
) -> EntryOutcome {
    let was_tracked = vcs.is_tracked(&entry.source);

    let source = workdir.join(&entry.source);
    if let Err(e) = std::fs::rename(&source, destination) {
        // A vanished source is reported bare; anything else keeps its cause.
        let source_missing =
            e.kind() == ErrorKind::NotFound && source.symlink_metadata().is_err();
        let cause = if source_missing {
            None
        } else {
            log::warn!(
                "Failed to move '{}' -> '{}': {}",
                entry.source,
                entry.target,
                e
            );
            Some(e.to_string())
        };
        return EntryOutcome::Failed(MoveFailure {
            source: entry.source.clone(),
            target: entry.target.clone(),
            cause,
        });
    }

    if let Err(e) = vcs.stage(&entry.target) {
        log::warn!("Could not stage '{}': {}", entry.target, e);
    }
    if was_tracked {
        if let Err(e) = vcs.unstage(&entry.source) {
            log::warn!("Could not drop '{}' from the index: {}", entry.source, e);
        }
    }

    EntryOutcome::Reconciled
}
