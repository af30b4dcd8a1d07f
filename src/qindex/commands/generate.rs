use crate::commands::{CmdMessage, CmdResult, QindexPaths};
use crate::error::{QindexError, Result};
use crate::render::{render_index, RenderOptions};
use crate::scanner;
use crate::splice::splice;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Top-level heading of the index; `None` omits it.
    pub heading: Option<String>,
    /// Compare only, never write.
    pub check: bool,
}

/// Scans the questions, renders the index and splices it into the README.
///
/// Nothing is written until scanning, rendering and splicing have all succeeded.
pub fn run(paths: &QindexPaths, options: &GenerateOptions) -> Result<CmdResult> {
    let index = scanner::scan(&paths.questions)?;

    let render_options = RenderOptions {
        heading: options.heading.clone(),
        link_base: paths.readme.parent().map(Path::to_path_buf),
    };
    let fragment = render_index(&index, &render_options);

    let current =
        fs::read_to_string(&paths.readme).map_err(QindexError::read(&paths.readme))?;
    let updated = splice(&current, &fragment)?;
    let changed = updated != current;

    let mut result =
        CmdResult::default().with_counts(index.document_count(), index.category_count());
    if changed {
        result = result.with_modified_files(vec![paths.readme.clone()]);
    }

    if options.check {
        if changed {
            return Err(QindexError::Stale(paths.readme.clone()));
        }
        result.add_message(CmdMessage::success(format!(
            "{} is up to date",
            paths.readme.display()
        )));
        return Ok(result);
    }

    fs::write(&paths.readme, &updated).map_err(QindexError::write(&paths.readme))?;
    info!(readme = %paths.readme.display(), changed, "wrote generated index");

    result.add_message(CmdMessage::info(format!(
        "Indexed {} question(s) in {} categor{}",
        index.document_count(),
        index.category_count(),
        if index.category_count() == 1 { "y" } else { "ies" }
    )));
    if changed {
        result.add_message(CmdMessage::success(format!(
            "Updated {}",
            paths.readme.display()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "{} already up to date",
            paths.readme.display()
        )));
    }
    Ok(result)
}
