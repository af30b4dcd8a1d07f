//! # Command Layer
//!
//! Each command runs one batch transformation over the filesystem and reports what
//! it did through a [`CmdResult`]. Commands never print and never exit; the CLI
//! decides how to present messages and how to map errors to exit codes.

use std::path::PathBuf;

pub mod generate;
pub mod link_examples;

/// Locations a run operates on, already resolved from config and flags.
#[derive(Debug, Clone)]
pub struct QindexPaths {
    pub questions: PathBuf,
    pub readme: PathBuf,
    pub code: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Files rewritten by the run (or that would be, in dry-run/check modes).
    pub modified_files: Vec<PathBuf>,
    pub document_count: usize,
    pub category_count: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_modified_files(mut self, files: Vec<PathBuf>) -> Self {
        self.modified_files = files;
        self
    }

    pub fn with_counts(mut self, documents: usize, categories: usize) -> Self {
        self.document_count = documents;
        self.category_count = categories;
        self
    }
}
