//! Plan builder: turns the candidate path list into an ordered, conflict-free
//! list of renames.
//!
//! Building a plan never touches the filesystem. Problems with individual
//! paths are collected as [`PlanIssue`]s so one bad path never hides the rest.

use crate::normalize::{normalize_path, EmptyComponent, WhitespaceStyle};
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::path::{Component, Path};

// ============================================================================
// Types
// ============================================================================

/// A single planned rename. `source` and `target` always differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePlanEntry {
    pub source: String,
    pub target: String,
}

impl RenamePlanEntry {
    /// Number of `/` separators in the source path.
    pub fn depth(&self) -> usize {
        self.source.matches('/').count()
    }
}

/// A structural problem found while planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanIssue {
    /// A component of `path` normalizes to nothing.
    EmptyComponent { path: String, error: EmptyComponent },
    /// `second` normalizes to the same `target` that `first` already claimed.
    Conflict {
        first: String,
        second: String,
        target: String,
    },
}

impl fmt::Display for PlanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanIssue::EmptyComponent { path, error } => write!(f, "'{}': {}", path, error),
            PlanIssue::Conflict {
                first,
                second,
                target,
            } => write!(
                f,
                "Conflict: both '{}' and '{}' would become '{}'",
                first, second, target
            ),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Plan {
    /// Renames, deepest source first.
    pub entries: Vec<RenamePlanEntry>,
    pub issues: Vec<PlanIssue>,
    /// Inputs that were already normalized.
    pub unchanged: usize,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

// ============================================================================
// Separator handling
// ============================================================================

/// Render `input` with forward slashes only.
///
/// Repeated separators, `.` components and a trailing separator are dropped;
/// component text (including its spaces) is kept exactly. An input with no
/// components at all becomes `.`.
pub fn to_posix(input: &str) -> String {
    let mut out = String::new();

    for component in Path::new(input).components() {
        match component {
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::RootDir => out.push('/'),
            Component::CurDir => {}
            Component::ParentDir => push_segment(&mut out, ".."),
            Component::Normal(name) => push_segment(&mut out, &name.to_string_lossy()),
        }
    }

    if out.is_empty() {
        ".".to_string()
    } else {
        out
    }
}

fn push_segment(out: &mut String, segment: &str) {
    if !out.is_empty() && !out.ends_with('/') {
        out.push('/');
    }
    out.push_str(segment);
}

// ============================================================================
// Planning
// ============================================================================

/// Build the rename plan for `inputs`, processed in the order given.
///
/// When several sources map onto one target, the first one keeps it and every
/// later source is reported as a conflict against that first claimant.
pub fn build_plan<S: AsRef<str>>(inputs: &[S], style: WhitespaceStyle) -> Plan {
    let mut plan = Plan::default();
    // target -> source that claimed it first
    let mut claimed: HashMap<String, String> = HashMap::new();

    for input in inputs {
        let source = to_posix(input.as_ref());

        let target = match normalize_path(&source, style) {
            Ok(target) => target,
            Err(error) => {
                plan.issues.push(PlanIssue::EmptyComponent {
                    path: source,
                    error,
                });
                continue;
            }
        };

        if target == source {
            plan.unchanged += 1;
            continue;
        }

        match claimed.entry(target.clone()) {
            Entry::Occupied(owner) => {
                if owner.get() != &source {
                    plan.issues.push(PlanIssue::Conflict {
                        first: owner.get().clone(),
                        second: source,
                        target,
                    });
                } else {
                    log::debug!("ignoring duplicate input '{}'", source);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(source.clone());
                plan.entries.push(RenamePlanEntry { source, target });
            }
        }
    }

    // Deepest first so a parent directory never moves before its children.
    // sort_by is stable, so equal depths keep input order.
    plan.entries.sort_by(|a, b| b.depth().cmp(&a.depth()));

    plan
}

// ============================================================================
// Tests
// ============================================================================
