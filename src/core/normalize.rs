//! Path normalizer: trims edge spaces from every path component and applies
//! the selected internal-whitespace style.
//!
//! Everything here is pure. Only ASCII space (`' '`) is considered; tabs and
//! other Unicode whitespace pass through untouched.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Types
// ============================================================================

/// How spaces strictly inside a component are treated once the edges are trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WhitespaceStyle {
    /// Leave internal spacing alone.
    #[default]
    None,
    /// Replace every run of internal spaces with a single space.
    Collapse,
    /// Replace every internal space with `_`, one for one.
    Underscore,
    /// Delete internal spaces.
    Remove,
}

impl WhitespaceStyle {
    pub const ALL: [WhitespaceStyle; 4] = [
        WhitespaceStyle::None,
        WhitespaceStyle::Collapse,
        WhitespaceStyle::Underscore,
        WhitespaceStyle::Remove,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WhitespaceStyle::None => "none",
            WhitespaceStyle::Collapse => "collapse",
            WhitespaceStyle::Underscore => "underscore",
            WhitespaceStyle::Remove => "remove",
        }
    }
}

impl fmt::Display for WhitespaceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WhitespaceStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        WhitespaceStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| {
                Error::validation_invalid_argument(
                    "internal-style",
                    format!("Invalid --internal-style option: {}", s),
                    Some(s.to_string()),
                    Some(
                        WhitespaceStyle::ALL
                            .iter()
                            .map(|style| style.as_str().to_string())
                            .collect(),
                    ),
                )
            })
    }
}

/// A component that would be left empty by normalization (e.g. `a/   /b`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyComponent {
    /// The component as it appeared in the input.
    pub component: String,
    /// Zero-based index of the component in the `/`-split path.
    pub position: usize,
}

impl fmt::Display for EmptyComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "component '{}' would become empty after normalization",
            self.component
        )
    }
}

impl std::error::Error for EmptyComponent {}

// ============================================================================
// Normalization
// ============================================================================

/// Normalize a single path component.
///
/// Leading and trailing spaces are always stripped; the style only decides
/// what happens to the spaces that remain inside.
pub fn normalize_component(component: &str, style: WhitespaceStyle) -> String {
    let trimmed = component.trim_matches(' ');

    match style {
        WhitespaceStyle::None => trimmed.to_string(),
        WhitespaceStyle::Collapse => {
            let mut out = String::with_capacity(trimmed.len());
            let mut prev_space = false;
            for ch in trimmed.chars() {
                if ch == ' ' {
                    if !prev_space {
                        out.push(' ');
                    }
                    prev_space = true;
                } else {
                    out.push(ch);
                    prev_space = false;
                }
            }
            out
        }
        WhitespaceStyle::Underscore => trimmed.replace(' ', "_"),
        WhitespaceStyle::Remove => trimmed.replace(' ', ""),
    }
}

/// Normalize every `/`-separated component of `path`.
///
/// Splitting is purely syntactic: a leading or trailing `/` produces an empty
/// component, which is rejected like any other component that ends up empty.
pub fn normalize_path(
    path: &str,
    style: WhitespaceStyle,
) -> std::result::Result<String, EmptyComponent> {
    let mut parts = Vec::new();

    for (position, component) in path.split('/').enumerate() {
        let normalized = normalize_component(component, style);
        if normalized.is_empty() {
            return Err(EmptyComponent {
                component: component.to_string(),
                position,
            });
        }
        parts.push(normalized);
    }

    Ok(parts.join("/"))
}

// ============================================================================
// Tests
// ============================================================================
