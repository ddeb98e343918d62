//! Export entries and the managed-region parse/serialize pair.
//!
//! A managed region holds the re-exports a directory's `__init__.py` owns:
//! one `from .module import Symbol[ as Alias]` line per entry plus a derived
//! `__all__` list. The serialized text is a pure function of the entry
//! mapping — parsing discards everything that is not an import line and the
//! serializer regenerates the rest.

use std::collections::BTreeMap;
use std::fmt::Write as _;

/// One re-exported symbol inside a managed region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    /// Module name relative to the package (file stem, no leading dot).
    pub module: String,
    /// Symbol imported from the module.
    pub symbol: String,
    /// Optional alias; when present it becomes the entry key.
    pub alias: Option<String>,
}

impl ExportEntry {
    pub fn new(module: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbol: symbol.into(),
            alias: None,
        }
    }

    pub fn with_alias(
        module: impl Into<String>,
        symbol: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            symbol: symbol.into(),
            alias: Some(alias.into()),
        }
    }

    /// The key an entry is stored under: alias if present, else symbol.
    pub fn key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.symbol)
    }
}

/// The entry mapping of one managed region, ordered by key.
///
/// `BTreeMap<String, _>` compares keys byte-wise, which gives exactly the
/// ordinal (case-sensitive, uppercase-before-lowercase) ordering the
/// serialized region requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagedRegion {
    entries: BTreeMap<String, ExportEntry>,
}

impl ManagedRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the text between the section markers into an entry mapping.
    ///
    /// Only lines of the shape `from .<module> import <symbol>[ as <alias>]`
    /// become entries; blank lines, the `__all__` block, and anything
    /// malformed are dropped silently. Aggregator files get hand-edited
    /// between runs, so robustness beats strictness here.
    pub fn parse(segment: &str) -> Self {
        let mut region = Self::new();
        for raw_line in segment.lines() {
            if let Some(entry) = parse_import_line(raw_line) {
                region.upsert(entry);
            }
        }
        region
    }

    /// Insert or replace an entry by its key.
    pub fn upsert(&mut self, entry: ExportEntry) {
        self.entries.insert(entry.key().to_owned(), entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&ExportEntry> {
        self.entries.get(key)
    }

    /// Keys in serialization order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Serialize the mapping to region text (no trailing newline).
    ///
    /// Import lines in ascending key order, a blank line, then the `__all__`
    /// list with the same keys in the same order. An empty mapping collapses
    /// to a bare `__all__ = []`.
    pub fn serialize(&self) -> String {
        if self.entries.is_empty() {
            return "__all__ = []".to_owned();
        }

        let mut out = String::new();
        for entry in self.entries.values() {
            match &entry.alias {
                Some(alias) => {
                    let _ = writeln!(out, "from .{} import {} as {}", entry.module, entry.symbol, alias);
                }
                None => {
                    let _ = writeln!(out, "from .{} import {}", entry.module, entry.symbol);
                }
            }
        }
        out.push_str("\n__all__ = [\n");
        for key in self.entries.keys() {
            let _ = writeln!(out, "    \"{key}\",");
        }
        out.push(']');
        out
    }
}

/// Parse a single line; `None` for anything that is not an import.
fn parse_import_line(raw_line: &str) -> Option<ExportEntry> {
    let line = raw_line.trim();
    if !line.starts_with("from .") {
        return None;
    }

    // Commas count as whitespace so that a hand-edited trailing comma does
    // not lose the line.
    let cleaned = line.replace(',', " ");
    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    if parts.len() < 4 || parts[0] != "from" || parts[2] != "import" {
        return None;
    }

    let module = parts[1].strip_prefix('.')?;
    let symbol = parts[3];
    let alias = parts
        .iter()
        .position(|p| *p == "as")
        .and_then(|i| parts.get(i + 1))
        .map(|a| (*a).to_owned());

    Some(ExportEntry {
        module: module.to_owned(),
        symbol: symbol.to_owned(),
        alias,
    })
}
