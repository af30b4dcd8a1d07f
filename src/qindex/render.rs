//! Renders an [`Index`] into the markdown fragment placed between the README markers.
//!
//! ```text
//! ## Questions
//!
//! ### Arrays
//!
//! - [1. Two Sum](questions/arrays/1.-two-sum.md)
//! - [2. Add Two Numbers](questions/arrays/2.-add-two-numbers.md)
//!
//! ### Trees
//! ...
//! ```
//!
//! Output is a pure function of the index, so re-rendering an unchanged tree yields
//! identical bytes.

use crate::model::Index;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

pub const DEFAULT_HEADING: &str = "Questions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Top-level `##` heading. `None` omits it.
    pub heading: Option<String>,
    /// Stripped from document paths when it is a prefix of them.
    pub link_base: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading: Some(DEFAULT_HEADING.to_string()),
            link_base: None,
        }
    }
}

pub fn render_index(index: &Index, options: &RenderOptions) -> String {
    let mut lines = Vec::new();

    if let Some(heading) = &options.heading {
        lines.push(format!("## {}\n", heading));
    }

    for (category, docs) in index.categories() {
        lines.push(format!("### {}\n", category));
        for doc in docs {
            let target = link_target(&doc.path, options.link_base.as_deref());
            lines.push(format!("- [{}]({})", doc.title, target));
        }
        lines.push(String::new());
    }

    let mut out = lines.join("\n").trim_end().to_string();
    out.push('\n');
    out
}

/// Forward-slash relative reference for `path`. `.` components are dropped, so
/// `./questions` and `questions` produce the same links.
pub fn link_target(path: &Path, base: Option<&Path>) -> String {
    let path = without_cur_dir(path);
    let base = base.map(without_cur_dir);
    let rel = base
        .as_deref()
        .and_then(|base| path.strip_prefix(base).ok())
        .unwrap_or(&path);
    rel.to_string_lossy().replace(MAIN_SEPARATOR, "/")
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| *c != Component::CurDir)
        .collect()
}
