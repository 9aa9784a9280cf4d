//! Public output types for a trim run.
//!
//! A [`TrimReport`] is what the CLI prints, either as hook text or inside the
//! JSON envelope, and it decides the process exit code.

use serde::Serialize;

use crate::executor::ExecutionResult;
use crate::normalize::WhitespaceStyle;
use crate::plan::{Plan, RenamePlanEntry};

/// Nothing needed renaming.
pub const EXIT_CLEAN: i32 = 0;
/// At least one structural error, conflict or failed move.
pub const EXIT_FAILED: i32 = 1;
/// Configuration error; nothing was planned.
pub const EXIT_CONFIG: i32 = 2;
/// Paths were renamed and nothing failed.
pub const EXIT_CHANGED: i32 = 3;

const REMEDIATION_HINT: &str = "Please resolve conflicts or rename manually, then re-stage.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamedPair {
    pub from: String,
    pub to: String,
}

impl From<RenamePlanEntry> for RenamedPair {
    fn from(entry: RenamePlanEntry) -> Self {
        Self {
            from: entry.source,
            to: entry.target,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrimReport {
    pub internal_style: WhitespaceStyle,
    pub dry_run: bool,
    /// Renames that were applied (or, in a dry run, would be applied).
    pub renamed: Vec<RenamedPair>,
    pub errors: Vec<String>,
    pub unchanged: usize,
}

impl TrimReport {
    pub fn from_execution(
        style: WhitespaceStyle,
        unchanged: usize,
        result: ExecutionResult,
    ) -> Self {
        let mut errors: Vec<String> = result.issues.iter().map(ToString::to_string).collect();
        errors.extend(result.failed.iter().map(ToString::to_string));

        Self {
            internal_style: style,
            dry_run: false,
            renamed: result.changed.into_iter().map(RenamedPair::from).collect(),
            errors,
            unchanged,
        }
    }

    pub fn from_plan(style: WhitespaceStyle, plan: Plan) -> Self {
        Self {
            internal_style: style,
            dry_run: true,
            errors: plan.issues.iter().map(ToString::to_string).collect(),
            renamed: plan.entries.into_iter().map(RenamedPair::from).collect(),
            unchanged: plan.unchanged,
        }
    }

    pub fn exit_code(&self) -> i32 {
        if !self.errors.is_empty() {
            EXIT_FAILED
        } else if !self.renamed.is_empty() {
            EXIT_CHANGED
        } else {
            EXIT_CLEAN
        }
    }

    /// Hook text for stdout. Empty when nothing was renamed.
    pub fn render_stdout(&self) -> String {
        if self.renamed.is_empty() {
            return String::new();
        }

        let verb = if self.dry_run { "Would rename" } else { "Renamed" };
        let mut out = format!("🔧 {} (internal-style={}):\n", verb, self.internal_style);
        for pair in &self.renamed {
            out.push_str(&format!("  - '{}' -> '{}'\n", pair.from, pair.to));
        }
        out
    }

    /// Hook text for stderr. Empty when nothing failed.
    pub fn render_stderr(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut out = String::from("\n❌ Some paths could not be auto-fixed:\n");
        for error in &self.errors {
            out.push_str(&format!("  - {}\n", error));
        }
        out.push_str(&format!("\n{}\n", REMEDIATION_HINT));
        out
    }
}
