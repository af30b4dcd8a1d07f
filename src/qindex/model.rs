//! Core data types: [`Document`] and [`Index`].
//!
//! An [`Index`] is built from scratch on every run and never persisted. Categories
//! iterate in alphabetical order because the map is a `BTreeMap`; documents inside a
//! category keep whatever order the scanner sorted them into.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Sort key used for titles that carry no leading number.
pub const UNNUMBERED: u64 = u64::MAX;

/// One markdown question file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path as walked from the questions root.
    pub path: PathBuf,
    pub category: String,
    pub title: String,
    /// Leading `N.` prefix of the title, if any.
    pub number: Option<u64>,
}

impl Document {
    pub fn new(path: PathBuf, category: String, title: String, number: Option<u64>) -> Self {
        Self {
            path,
            category,
            title,
            number,
        }
    }

    /// Documents without a number sort after every numbered one.
    pub fn sort_number(&self) -> u64 {
        self.number.unwrap_or(UNNUMBERED)
    }

    /// Ordering by (number, case-insensitive title).
    pub fn cmp_for_index(&self, other: &Self) -> Ordering {
        self.sort_number()
            .cmp(&other.sort_number())
            .then_with(|| self.title.to_lowercase().cmp(&other.title.to_lowercase()))
    }
}

/// Category name to ordered documents.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Index {
    categories: BTreeMap<String, Vec<Document>>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, doc: Document) {
        self.categories
            .entry(doc.category.clone())
            .or_default()
            .push(doc);
    }

    /// Sorts every category's documents. The sort is stable, so documents that
    /// compare equal keep their insertion order.
    pub fn sort(&mut self) {
        for docs in self.categories.values_mut() {
            docs.sort_by(Document::cmp_for_index);
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[Document])> {
        self.categories
            .iter()
            .map(|(name, docs)| (name.as_str(), docs.as_slice()))
    }

    pub fn get(&self, category: &str) -> Option<&[Document]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn document_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
