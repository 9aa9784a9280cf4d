use std::path::PathBuf;

use super::execute_git;
use crate::error::{Error, Result};
use crate::executor::Vcs;
use crate::utils::command;

/// Git collaborator backed by the `git` executable.
///
/// Every call runs in `workdir`, and every path argument is relative to it.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

impl Vcs for GitCli {
    fn repository_root(&self) -> Result<PathBuf> {
        let dir = self.workdir.to_string_lossy().to_string();
        let output = execute_git(&self.workdir, &["rev-parse", "--show-toplevel"])
            .map_err(|e| Error::git_not_a_repository(dir.clone(), e.to_string()))?;

        if !output.status.success() {
            return Err(Error::git_not_a_repository(dir, command::error_text(&output)));
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if root.is_empty() {
            return Err(Error::git_not_a_repository(dir, ""));
        }
        Ok(PathBuf::from(root))
    }

    fn is_tracked(&self, path: &str) -> bool {
        command::succeeded_in(
            &self.workdir,
            "git",
            &["ls-files", "--error-unmatch", "--", path],
        )
    }

    /// `git mv -f -k`. With `-k` git exits 0 even when it skipped the move,
    /// so success also requires the target to exist afterwards.
    fn move_path(&self, source: &str, target: &str) -> Result<()> {
        let output = execute_git(&self.workdir, &["mv", "-f", "-k", "--", source, target])?;

        if !output.status.success() {
            return Err(Error::git_command_failed(format!(
                "git mv failed: {}",
                command::error_text(&output)
            )));
        }

        if self.workdir.join(target).symlink_metadata().is_err() {
            return Err(Error::git_command_failed(format!(
                "git mv skipped '{}'",
                source
            )));
        }

        Ok(())
    }

    fn stage(&self, path: &str) -> Result<()> {
        command::run_in(&self.workdir, "git", &["add", "--", path], "git add")
            .map_err(|e| Error::git_command_failed(e.to_string()))?;
        Ok(())
    }

    /// Drop `path` from the index only. `-r` lets this work for directories.
    fn unstage(&self, path: &str) -> Result<()> {
        command::run_in(
            &self.workdir,
            "git",
            &["rm", "-r", "--cached", "--quiet", "--force", "--", path],
            "git rm --cached",
        )
        .map_err(|e| Error::git_command_failed(e.to_string()))?;
        Ok(())
    }
}
