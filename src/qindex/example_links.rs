//! Code example links appended to question files.
//!
//! A question at `questions/<level>/<name>.md` is paired with the example
//! directory `<code root>/<level>/<name>/`. The link is written relative to the
//! question file so it resolves when browsing the repository:
//!
//! ```text
//! ## 🧪 Code example
//! - [`../../code/level-1/3-struct-and-class`](../../code/level-1/3-struct-and-class)
//! ```

use std::io;
use std::path::{self, Component, Path, PathBuf, MAIN_SEPARATOR};

pub const SECTION_TITLE: &str = "## 🧪 Code example";

/// The markdown list line linking `md_path` to its code example directory.
pub fn example_link(md_path: &Path, code_root: &Path) -> String {
    let level = md_path
        .parent()
        .and_then(Path::file_name)
        .unwrap_or_default();
    let name = md_path.file_stem().unwrap_or_default();
    let target = code_root.join(level).join(name);
    let from = md_path.parent().unwrap_or(Path::new(""));

    let rel = relative_path(&target, from)
        .to_string_lossy()
        .replace(MAIN_SEPARATOR, "/");
    format!("- [`{rel}`]({rel})\n")
}

/// Appends the example section to `text`, or `None` when it is already present.
pub fn append_example_link(text: &str, link: &str) -> Option<String> {
    if text.contains(SECTION_TITLE) {
        return None;
    }

    let mut out = text.trim_end().to_string();
    out.push_str("\n\n");
    out.push_str(SECTION_TITLE);
    out.push('\n');
    out.push_str(link);
    Some(out)
}

/// Absolute form of `path` with `.` and `..` resolved lexically. Symlinks are not
/// followed and the path need not exist.
pub fn normalize_path(path: &Path) -> io::Result<PathBuf> {
    let mut out = PathBuf::new();
    for component in path::absolute(path)?.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    Ok(out)
}

/// `target` expressed relative to the directory `base`. Both must be normalized
/// the same way; see [`normalize_path`].
pub fn relative_path(target: &Path, base: &Path) -> PathBuf {
    let target: Vec<Component> = target
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();
    let base: Vec<Component> = base
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();

    let common = target
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base.len() {
        rel.push("..");
    }
    for component in &target[common..] {
        rel.push(component.as_os_str());
    }
    rel
}
