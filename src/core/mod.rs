// Public modules
pub mod error;
pub mod executor;
pub mod git;
pub mod normalize;
pub mod output;
pub mod plan;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use executor::{apply_plan, EntryOutcome, ExecutionResult, MoveFailure, Vcs};
pub use git::GitCli;
pub use normalize::{normalize_component, normalize_path, EmptyComponent, WhitespaceStyle};
pub use output::{RenamedPair, TrimReport};
pub use plan::{build_plan, to_posix, Plan, PlanIssue, RenamePlanEntry};
