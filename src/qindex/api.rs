//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! qindex operation. It resolves the run's paths and options once, then dispatches;
//! business logic lives in `commands/*.rs`, and nothing here prints or exits.

use crate::commands::{self, generate::GenerateOptions, QindexPaths};
use crate::config::QindexConfig;
use crate::error::Result;

pub struct QindexApi {
    paths: QindexPaths,
    heading: Option<String>,
}

impl QindexApi {
    pub fn new(paths: QindexPaths, heading: Option<String>) -> Self {
        Self { paths, heading }
    }

    pub fn from_config(config: &QindexConfig) -> Self {
        let paths = QindexPaths {
            questions: config.questions_dir.clone(),
            readme: config.readme.clone(),
            code: config.code_dir.clone(),
        };
        Self::new(paths, config.index_heading.clone())
    }

    /// Regenerates the README index. With `check`, only reports whether it is stale.
    pub fn generate(&self, check: bool) -> Result<commands::CmdResult> {
        let options = GenerateOptions {
            heading: self.heading.clone(),
            check,
        };
        commands::generate::run(&self.paths, &options)
    }

    pub fn link_examples(&self, dry_run: bool) -> Result<commands::CmdResult> {
        commands::link_examples::run(&self.paths, dry_run)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
