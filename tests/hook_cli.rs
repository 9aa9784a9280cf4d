use std::path::Path;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_trim-spaces-in-paths");

fn git(dir: &Path, args: &[&str]) -> Output {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git should be installed");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn init_repo() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    git(dir.path(), &["init", "-q"]);
    git(dir.path(), &["config", "user.email", "hook@example.com"]);
    git(dir.path(), &["config", "user.name", "Hook Test"]);
    dir
}

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn tracked_files(root: &Path) -> Vec<String> {
    let output = git(root, &["ls-files", "-z"]);
    String::from_utf8_lossy(&output.stdout)
        .split('\0')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn run_hook(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(BIN)
        .args(args)
        .current_dir(dir)
        .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap_or(dir))
        .output()
        .unwrap();
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn collapse_renames_nested_tracked_file() {
    let repo = init_repo();
    write_file(repo.path(), " dir/ my  file .txt", "hello");
    git(repo.path(), &["add", "--", " dir/ my  file .txt"]);

    let (code, stdout, _stderr) = run_hook(
        repo.path(),
        &["--internal-style=collapse", " dir/ my  file .txt"],
    );

    assert_eq!(code, 3);
    assert!(stdout.contains("internal-style=collapse"));
    assert!(stdout.contains("' dir/ my  file .txt' -> 'dir/my file .txt'"));
    assert!(repo.path().join("dir/my file .txt").exists());

    let tracked = tracked_files(repo.path());
    assert!(tracked.contains(&"dir/my file .txt".to_string()));
    assert!(!tracked.contains(&" dir/ my  file .txt".to_string()));
}

#[test]
fn conflicting_targets_exit_one() {
    let repo = init_repo();
    write_file(repo.path(), "dir/A  file.txt", "1");
    write_file(repo.path(), "dir/A   file.txt", "2");
    git(repo.path(), &["add", "--", "dir/A  file.txt", "dir/A   file.txt"]);

    let (code, stdout, stderr) = run_hook(
        repo.path(),
        &["--internal-style=collapse", "dir/A  file.txt", "dir/A   file.txt"],
    );

    assert_eq!(code, 1);
    assert!(stderr.contains("Conflict:"));
    assert!(stderr.contains("Please resolve conflicts or rename manually, then re-stage."));
    // The first claimant is still renamed.
    assert!(stdout.contains("'dir/A  file.txt' -> 'dir/A file.txt'"));
    assert!(repo.path().join("dir/A   file.txt").exists());
}

#[test]
fn normalized_paths_are_left_alone() {
    let repo = init_repo();
    write_file(repo.path(), "already_normal.txt", "x");
    git(repo.path(), &["add", "--", "already_normal.txt"]);

    let (code, stdout, stderr) = run_hook(repo.path(), &["already_normal.txt"]);

    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());
}

#[test]
fn no_paths_is_a_clean_run() {
    let repo = init_repo();
    let (code, stdout, _) = run_hook(repo.path(), &["--internal-style=none"]);
    assert_eq!(code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn unknown_style_is_a_configuration_error() {
    let repo = init_repo();
    write_file(repo.path(), " a.txt", "x");

    let (code, stdout, stderr) = run_hook(repo.path(), &["--internal-style=squash", " a.txt"]);

    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid --internal-style option: squash"));
    assert!(repo.path().join(" a.txt").exists());
}

#[test]
fn outside_a_repository_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), " a.txt", "x");

    let (code, _, stderr) = run_hook(dir.path(), &[" a.txt"]);

    assert_eq!(code, 2);
    assert!(!stderr.is_empty());
    assert!(dir.path().join(" a.txt").exists());
}

#[test]
fn blank_component_is_reported() {
    let repo = init_repo();

    let (code, _, stderr) = run_hook(repo.path(), &["dir/   /file.txt"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("would become empty after normalization"));
}

#[test]
fn untracked_file_falls_back_to_plain_rename() {
    let repo = init_repo();
    write_file(repo.path(), " loose  name.txt", "x");

    let (code, stdout, _) = run_hook(
        repo.path(),
        &["--internal-style=underscore", " loose  name.txt"],
    );

    assert_eq!(code, 3);
    assert!(stdout.contains("'loose__name.txt'"));
    assert!(repo.path().join("loose__name.txt").exists());
    assert!(!repo.path().join(" loose  name.txt").exists());
    assert!(tracked_files(repo.path()).contains(&"loose__name.txt".to_string()));
}

#[test]
fn missing_source_is_a_failed_move() {
    let repo = init_repo();

    let (code, stdout, stderr) = run_hook(repo.path(), &[" ghost.txt"]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Failed to move ' ghost.txt' -> 'ghost.txt'"));
}

#[test]
fn dry_run_changes_nothing() {
    let repo = init_repo();
    write_file(repo.path(), "my  notes.md", "x");
    git(repo.path(), &["add", "--", "my  notes.md"]);

    let (code, stdout, _) = run_hook(
        repo.path(),
        &["--dry-run", "--internal-style=remove", "my  notes.md"],
    );

    assert_eq!(code, 3);
    assert!(stdout.contains("Would rename (internal-style=remove)"));
    assert!(repo.path().join("my  notes.md").exists());
    assert!(!repo.path().join("mynotes.md").exists());
}

#[test]
fn json_output_wraps_the_report() {
    let repo = init_repo();
    write_file(repo.path(), "report .txt", "x");
    git(repo.path(), &["add", "--", "report .txt"]);

    let (code, stdout, _) = run_hook(repo.path(), &["--json", "report .txt"]);

    assert_eq!(code, 3);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["internal_style"], "none");
    assert_eq!(value["data"]["renamed"][0]["from"], "report .txt");
    assert_eq!(value["data"]["renamed"][0]["to"], "report.txt");
}

#[test]
fn json_output_reports_configuration_errors() {
    let repo = init_repo();

    let (code, stdout, _) = run_hook(repo.path(), &["--json", "--internal-style=wide"]);

    assert_eq!(code, 2);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["error"]["code"], "validation.invalid_argument");
}

#[test]
fn dir_flag_selects_the_working_tree() {
    let repo = init_repo();
    write_file(repo.path(), " elsewhere.txt", "x");
    git(repo.path(), &["add", "--", " elsewhere.txt"]);
    let outside = tempfile::tempdir().unwrap();

    let repo_dir = repo.path().to_string_lossy().to_string();
    let (code, _, _) = run_hook(outside.path(), &["-C", &repo_dir, " elsewhere.txt"]);

    assert_eq!(code, 3);
    assert!(repo.path().join("elsewhere.txt").exists());
}

#[test]
fn hyphenated_filename_is_renamed_not_parsed() {
    let repo = init_repo();
    write_file(repo.path(), "-notes .txt", "x");
    git(repo.path(), &["add", "--", "-notes .txt"]);

    let (code, stdout, stderr) =
        run_hook(repo.path(), &["--internal-style=remove", "-notes .txt"]);

    assert_eq!(code, 3, "stderr: {}", stderr);
    assert!(stdout.contains("'-notes .txt' -> '-notes.txt'"));
    assert!(repo.path().join("-notes.txt").exists());
    assert!(tracked_files(repo.path()).contains(&"-notes.txt".to_string()));
}

#[test]
fn unknown_long_token_is_a_path() {
    let repo = init_repo();

    let (code, stdout, stderr) = run_hook(repo.path(), &["--verbose"]);

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.is_empty());
}

#[test]
fn style_may_follow_the_filenames() {
    let repo = init_repo();
    write_file(repo.path(), "late  style.txt", "x");
    git(repo.path(), &["add", "--", "late  style.txt"]);

    let (code, stdout, _) = run_hook(
        repo.path(),
        &["late  style.txt", "--internal-style=underscore"],
    );

    assert_eq!(code, 3);
    assert!(stdout.contains("internal-style=underscore"));
    assert!(repo.path().join("late__style.txt").exists());
}

#[test]
fn last_style_wins() {
    let repo = init_repo();
    write_file(repo.path(), "two  styles.txt", "x");
    git(repo.path(), &["add", "--", "two  styles.txt"]);

    let (code, stdout, stderr) = run_hook(
        repo.path(),
        &[
            "--internal-style=none",
            "--internal-style=collapse",
            "two  styles.txt",
        ],
    );

    assert_eq!(code, 3, "stderr: {}", stderr);
    assert!(stdout.contains("internal-style=collapse"));
    assert!(repo.path().join("two styles.txt").exists());
}
