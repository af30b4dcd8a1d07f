use crate::commands::{CmdMessage, CmdResult, QindexPaths};
use crate::error::{QindexError, Result};
use crate::example_links::{append_example_link, example_link, normalize_path};
use crate::scanner::question_files;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Appends a code example section to every question file that lacks one.
pub fn run(paths: &QindexPaths, dry_run: bool) -> Result<CmdResult> {
    let files = question_files(&paths.questions)?;

    // Links are computed between absolute, `..`-free paths.
    let code_root = normalize_path(&paths.code)?;

    let mut result = CmdResult::default();
    let mut modified: Vec<PathBuf> = Vec::new();

    for md in files {
        let md_anchored = normalize_path(&md)?;
        let text = fs::read_to_string(&md).map_err(QindexError::read(&md))?;
        let link = example_link(&md_anchored, &code_root);
        let Some(updated) = append_example_link(&text, &link) else {
            debug!(path = %md.display(), "example link already present");
            continue;
        };

        if !dry_run {
            fs::write(&md, updated).map_err(QindexError::write(&md))?;
        }
        result.add_message(CmdMessage::info(format!("Updated: {}", md.display())));
        modified.push(md);
    }

    info!(modified = modified.len(), dry_run, "linked code examples");

    if dry_run {
        result.add_message(CmdMessage::warning("Dry run: no files were written."));
    }
    result.add_message(CmdMessage::success(format!(
        "Done. Modified {} file(s).",
        modified.len()
    )));
    Ok(result.with_modified_files(modified))
}
