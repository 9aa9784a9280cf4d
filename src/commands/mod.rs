use std::ffi::OsString;

pub type CmdResult<T> = trim_spaces_in_paths::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    pub json: bool,
}

pub mod trim;

/// Tokens read as options on their own.
const FLAGS: &[&str] = &["--json", "--dry-run", "-h", "--help", "-V", "--version"];

/// Options that take the following token as their value.
const VALUE_OPTIONS: &[&str] = &["-C", "--dir"];

/// Options written as `--name=value`.
const INLINE_OPTIONS: &[&str] = &["--internal-style=", "--dir="];

/// Reorder raw argv for clap: option tokens first, then `--`, then every
/// other token as a path.
///
/// pre-commit appends staged filenames without a `--` separator, so a file
/// named `-notes .txt` or `--verbose` must still reach the planner as a path.
/// Options may appear anywhere, including after the filenames.
pub(crate) fn hook_argv<I>(raw: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut raw = raw.into_iter();
    let mut options: Vec<OsString> = raw.next().into_iter().collect();
    let mut paths = Vec::new();

    while let Some(token) = raw.next() {
        let Some(text) = token.to_str() else {
            paths.push(token);
            continue;
        };

        if text == "--" {
            paths.extend(raw.by_ref());
            break;
        }

        if FLAGS.contains(&text) || INLINE_OPTIONS.iter().any(|p| text.starts_with(p)) {
            options.push(token);
        } else if VALUE_OPTIONS.contains(&text) {
            options.push(token);
            options.extend(raw.next());
        } else {
            paths.push(token);
        }
    }

    options.push(OsString::from("--"));
    options.extend(paths);
    options
}
