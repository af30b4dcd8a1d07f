//! # Qindex Architecture
//!
//! Qindex keeps a README's table of questions in sync with a directory of markdown
//! question files. It is a small library with a CLI client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, loads config, prints messages          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One batch run each: generate, link-examples              │
//! │  - Reads and writes files, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (scanner, render, splice, example_links, model)       │
//! │  - Scan: directory tree → Index                             │
//! │  - Render: Index → markdown fragment                        │
//! │  - Splice: fragment → README between GENERATED markers      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//!
//! - Each subdirectory of the questions root is a category (`level-1` → `Level 1`).
//! - Each `.md` file other than `index.md` is a question; its title is the first
//!   `# ` line, and a leading `N.` in the title orders it within its category.
//!   Unnumbered titles sort last.
//! - The README must contain `<!-- GENERATED:START -->` and
//!   `<!-- GENERATED:END -->` exactly once each. Everything outside them is kept.
//!
//! Every run is fail-fast: the first missing title or marker aborts before anything
//! is written, so rerunning after fixing the input is always safe.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: `generate` and `link_examples`
//! - [`scanner`]: Directory walk, title and number extraction, categories
//! - [`render`]: Index → markdown
//! - [`splice`]: Marker-delimited replacement
//! - [`example_links`]: Code example sections for question files
//! - [`model`]: `Document` and `Index`
//! - [`config`]: `qindex.json` configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod example_links;
pub mod model;
pub mod render;
pub mod scanner;
pub mod splice;
