use clap::Args;
use std::path::PathBuf;

use trim_spaces_in_paths::executor::{self, Vcs};
use trim_spaces_in_paths::log_status;
use trim_spaces_in_paths::{build_plan, Error, GitCli, TrimReport, WhitespaceStyle};

use super::{CmdResult, GlobalArgs};

#[derive(Args, Debug)]
pub struct TrimArgs {
    /// How to treat spaces inside a component: none, collapse, underscore, remove
    #[arg(
        long = "internal-style",
        value_name = "STYLE",
        default_value = "none",
        require_equals = true
    )]
    pub internal_style: String,

    /// Report the planned renames without touching the working tree or index
    #[arg(long)]
    pub dry_run: bool,

    /// Directory to run in (defaults to the current directory)
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Candidate paths, relative to the working directory
    #[arg(num_args = 0.., allow_hyphen_values = true)]
    pub paths: Vec<String>,
}

pub fn run(args: TrimArgs, _global: &GlobalArgs) -> CmdResult<TrimReport> {
    let style: WhitespaceStyle = args.internal_style.parse()?;

    let workdir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(|e| {
            Error::internal_io(e.to_string(), Some("resolve current directory".to_string()))
        })?,
    };

    let git = GitCli::new(&workdir);
    let root = git.repository_root()?;
    log::debug!("repository root: {}", root.display());

    let plan = build_plan(&args.paths, style);
    log_status!(
        "plan",
        "{} rename(s), {} unchanged, {} issue(s)",
        plan.len(),
        plan.unchanged,
        plan.issues.len()
    );

    let report = if args.dry_run {
        TrimReport::from_plan(style, plan)
    } else {
        let unchanged = plan.unchanged;
        let result = executor::apply_plan(plan, &git, &workdir);
        TrimReport::from_execution(style, unchanged, result)
    };

    let exit_code = report.exit_code();
    Ok((report, exit_code))
}
