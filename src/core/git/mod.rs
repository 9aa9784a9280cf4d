mod primitives;

pub use primitives::*;

use std::path::Path;
use std::process::Output;

use crate::error::Result;
use crate::utils::command;

fn execute_git(dir: &Path, args: &[&str]) -> Result<Output> {
    let context = format!("git {}", args.first().copied().unwrap_or_default());
    command::output_in(dir, "git", args, &context)
}
