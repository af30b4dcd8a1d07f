//! # Scanner
//!
//! Walks the questions root and builds an [`Index`].
//!
//! Conventions a question file must follow:
//!
//! - Extension is exactly `md`. Files named `index.md` (any case) are skipped.
//! - The title is the first line starting with `# `, anywhere in the file.
//! - A title may start with a number followed by a period (`12. Some question`).
//!   That number drives ordering; titles without one sort last in their category.
//! - The category is the name of the directory directly containing the file,
//!   with dashes turned into spaces and each word title-cased (`level-1` becomes
//!   `Level 1`).
//!
//! Scanning is read-only and fails fast: the first file without a title aborts the
//! whole scan.

use crate::error::{QindexError, Result};
use crate::model::{Document, Index};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

const MARKDOWN_EXT: &str = "md";
const INDEX_FILE: &str = "index.md";
const TITLE_PREFIX: &str = "# ";

static QUESTION_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([0-9]+)\s*\.").expect("question number pattern is valid"));

/// Scans `root` recursively and returns the sorted index.
pub fn scan(root: &Path) -> Result<Index> {
    let mut index = Index::new();

    for path in question_files(root)? {
        let category = category_for(&path);
        let title = read_title(&path)?;
        let number = question_number(&title);
        debug!(path = %path.display(), %category, %title, ?number, "scanned question");
        index.insert(Document::new(path, category, title, number));
    }

    index.sort();
    info!(
        root = %root.display(),
        documents = index.document_count(),
        categories = index.category_count(),
        "built question index"
    );
    Ok(index)
}

/// All question files under `root`, sorted by path.
pub fn question_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(QindexError::MissingDirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_question_file(path) {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

pub fn is_question_file(path: &Path) -> bool {
    let is_markdown = path.extension().is_some_and(|ext| ext == MARKDOWN_EXT);
    let is_index = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().to_lowercase() == INDEX_FILE);
    is_markdown && !is_index
}

pub fn read_title(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(QindexError::read(path))?;
    extract_title(&text).ok_or_else(|| QindexError::MissingTitle(path.to_path_buf()))
}

/// Text of the first `# ` line, trimmed.
pub fn extract_title(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
}

/// Leading `N.` number of a title, ASCII digits only. Other scripts' digits and
/// numbers too large for `u64` count as absent.
pub fn question_number(title: &str) -> Option<u64> {
    QUESTION_NUMBER
        .captures(title)
        .and_then(|caps| caps[1].parse().ok())
}

fn category_for(path: &Path) -> String {
    let dir_name = path
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    category_name(&dir_name)
}

pub fn category_name(dir_name: &str) -> String {
    title_case(&dir_name.replace('-', " "))
}

/// Upper-cases a letter unless it follows another letter, lower-cases the rest.
/// Digits and punctuation start a new word: `1st` becomes `1St`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn titles(index: &Index, category: &str) -> Vec<String> {
        index
            .get(category)
            .unwrap()
            .iter()
            .map(|d| d.title.clone())
            .collect()
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("level 1"), "Level 1");
        assert_eq!(title_case("ARRAYS and strings"), "Arrays And Strings");
        assert_eq!(title_case("1st try"), "1St Try");
        assert_eq!(title_case("o'neil"), "O'Neil");
    }

    #[test]
    fn test_category_name_replaces_dashes() {
        assert_eq!(category_name("dynamic-programming"), "Dynamic Programming");
        assert_eq!(category_name("level-4"), "Level 4");
    }

    #[test]
    fn test_extract_title_first_heading_line() {
        let text = "<!-- meta -->\n\n# 3. Const  \n\n# Another\n";
        assert_eq!(extract_title(text).as_deref(), Some("3. Const"));
    }

    #[test]
    fn test_extract_title_ignores_subheadings() {
        assert_eq!(extract_title("## Not a title\n#NoSpace\n"), None);
    }

    #[test]
    fn test_extract_title_handles_crlf() {
        assert_eq!(
            extract_title("# 7. Windows\r\nbody\r\n").as_deref(),
            Some("7. Windows")
        );
    }

    #[test]
    fn test_question_number() {
        assert_eq!(question_number("10. Question text"), Some(10));
        assert_eq!(question_number("  4 . Spaced"), Some(4));
        assert_eq!(question_number("Intro"), None);
        assert_eq!(question_number("5 Missing period"), None);
        assert_eq!(question_number("Part 2. Later"), None);
        assert_eq!(question_number("99999999999999999999999. Huge"), None);
    }

    #[test]
    fn test_question_number_ascii_digits_only() {
        assert_eq!(question_number("١٢. Arabic"), None);
        assert_eq!(question_number("１. Fullwidth"), None);
        assert_eq!(question_number("12. Latin"), Some(12));
    }

    #[test]
    fn test_read_title_missing_file_names_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gone.md");
        let err = read_title(&path).unwrap_err();
        assert!(matches!(err, QindexError::Read { .. }));
        assert!(err.to_string().contains("gone.md"));
    }

    #[test]
    fn test_is_question_file() {
        assert!(is_question_file(Path::new("q/a/1-x.md")));
        assert!(!is_question_file(Path::new("q/a/index.md")));
        assert!(!is_question_file(Path::new("q/a/INDEX.MD")));
        assert!(!is_question_file(Path::new("q/a/Index.md")));
        assert!(!is_question_file(Path::new("q/a/notes.txt")));
        assert!(!is_question_file(Path::new("q/a/README.markdown")));
    }

    #[test]
    fn test_scan_groups_and_orders() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("questions");
        write(&root, "arrays/2.-add-two-numbers.md", "# 2. Add Two Numbers\n");
        write(&root, "arrays/1.-two-sum.md", "# 1. Two Sum\n");
        write(&root, "arrays/10.-ten.md", "# 10. Ten\n");
        write(&root, "arrays/overview.md", "# Overview\n");
        write(&root, "linked-lists/1-reverse.md", "# 1. Reverse\n");

        let index = scan(&root).unwrap();

        let names: Vec<_> = index.categories().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Arrays", "Linked Lists"]);
        assert_eq!(
            titles(&index, "Arrays"),
            vec!["1. Two Sum", "2. Add Two Numbers", "10. Ten", "Overview"]
        );
        let first = &index.get("Arrays").unwrap()[0];
        assert_eq!(first.path, root.join("arrays/1.-two-sum.md"));
        assert_eq!(first.number, Some(1));
    }

    #[test]
    fn test_scan_skips_index_files() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("questions");
        write(&root, "arrays/1.-two-sum.md", "# 1. Two Sum\n");
        write(&root, "arrays/index.md", "no title here\n");
        write(&root, "trees/INDEX.md", "# Index\n");

        let index = scan(&root).unwrap();
        assert_eq!(titles(&index, "Arrays"), vec!["1. Two Sum"]);
        assert!(index.get("Trees").is_none());
    }

    #[test]
    fn test_scan_nested_uses_immediate_parent() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("questions");
        write(&root, "level-1/basics/1-a.md", "# 1. A\n");
        write(&root, "top.md", "# 1. Top\n");

        let index = scan(&root).unwrap();
        assert_eq!(titles(&index, "Basics"), vec!["1. A"]);
        assert_eq!(titles(&index, "Questions"), vec!["1. Top"]);
        assert!(index.get("Level 1").is_none());
    }

    #[test]
    fn test_scan_missing_title_names_file() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("questions");
        let bad = write(&root, "arrays/broken.md", "no heading\n## sub\n");

        let err = scan(&root).unwrap_err();
        match err {
            QindexError::MissingTitle(path) => assert_eq!(path, bad),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_scan_missing_root() {
        let tmp = TempDir::new().unwrap();
        let err = scan(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, QindexError::MissingDirectory(_)));
    }

    #[test]
    fn test_scan_empty_root() {
        let tmp = TempDir::new().unwrap();
        let index = scan(tmp.path()).unwrap();
        assert!(index.is_empty());
    }
}
