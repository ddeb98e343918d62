//! Aggregator (`__init__.py`) classification and merging.
//!
//! The managed span of an aggregator file is delimited by two fixed marker
//! comments. Everything strictly before the start marker and strictly after
//! the end marker is opaque text the tool must preserve byte-for-byte. The
//! decision whether a file may be touched at all is a closed classification
//! ([`classify`]) so the "safe to manage" boundary is testable on its own,
//! separate from the merge itself.

use crate::domain::exports::{ExportEntry, ManagedRegion};

/// Start marker of the managed span.
pub const SECTION_START: &str = "# fastscaf: auto-managed imports (start)";
/// End marker of the managed span.
pub const SECTION_END: &str = "# fastscaf: auto-managed imports (end)";

/// Placeholder comment some editors drop into empty packages; safe to replace.
pub const INIT_PLACEHOLDER: &str = "# init file";

/// Fixed preamble line of the `database` package's aggregator.
pub const DATABASE_PREAMBLE: &str = "from .database import SessionLocal, engine, Base";

/// Aggregator file name inside every generated package.
pub const INDEX_FILE_NAME: &str = "__init__.py";

/// What an existing aggregator file's content looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// Zero-length or whitespace-only.
    Empty,
    /// Recognized boilerplate that is safe to replace with a managed region.
    KnownPlaceholder,
    /// Both markers present, start before end.
    Managed,
    /// Hand-written or unrecognized; must not be touched.
    Custom,
}

/// Classify aggregator content.
///
/// `fixed_preamble` is the expected preamble line for this directory, if it
/// has one (only the `database` package does). Content consisting of exactly
/// that line also counts as a placeholder: the preamble is kept and markers
/// are appended after it.
pub fn classify(content: &str, fixed_preamble: Option<&str>) -> IndexKind {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return IndexKind::Empty;
    }

    if let Some(start) = content.find(SECTION_START) {
        if content[start + SECTION_START.len()..].contains(SECTION_END) {
            return IndexKind::Managed;
        }
    }

    if trimmed == INIT_PLACEHOLDER {
        return IndexKind::KnownPlaceholder;
    }
    if let Some(preamble) = fixed_preamble {
        if trimmed == preamble.trim() {
            return IndexKind::KnownPlaceholder;
        }
    }

    IndexKind::Custom
}

/// Outcome of [`upsert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Region changed; the new full file content.
    Updated(String),
    /// Re-serializing produced byte-identical content; nothing to write.
    Unchanged,
    /// Content classified `Custom`; the file was left alone.
    SkippedCustom,
}

/// An aggregator file split around its managed region.
///
/// `preamble` and `epilogue` are carried verbatim; the region is the only
/// part [`render`](Self::render) regenerates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexFile {
    preamble: String,
    region: ManagedRegion,
    epilogue: String,
}

impl IndexFile {
    /// A freshly seeded file: optional preamble, then empty markers.
    ///
    /// This is the §"first provisioning" shape — a new directory's aggregator
    /// is already `Managed` before the first entry arrives.
    pub fn seeded(fixed_preamble: Option<&str>) -> Self {
        let preamble = match fixed_preamble {
            Some(p) => format!("{}\n\n", p.trim_end()),
            None => String::new(),
        };
        Self {
            preamble,
            region: ManagedRegion::new(),
            epilogue: "\n".to_owned(),
        }
    }

    /// Split existing content around the markers.
    ///
    /// Returns `None` for `Custom` content — the caller must not rewrite such
    /// a file. `Empty` and `KnownPlaceholder` content synthesizes a fresh
    /// seeded file (keeping the placeholder's preamble text when it had one).
    pub fn parse(content: &str, fixed_preamble: Option<&str>) -> Option<Self> {
        match classify(content, fixed_preamble) {
            IndexKind::Custom => None,
            IndexKind::Empty => Some(Self::seeded(None)),
            IndexKind::KnownPlaceholder => {
                if content.trim() == INIT_PLACEHOLDER {
                    // The bare placeholder comment is replaced outright.
                    Some(Self::seeded(None))
                } else {
                    // Preamble placeholder: keep the user's exact line(s).
                    Some(Self {
                        preamble: format!("{}\n\n", content.trim_end()),
                        region: ManagedRegion::new(),
                        epilogue: "\n".to_owned(),
                    })
                }
            }
            IndexKind::Managed => {
                let start = content.find(SECTION_START)?;
                let inner_from = start + SECTION_START.len();
                let end_rel = content[inner_from..].find(SECTION_END)?;
                let end = inner_from + end_rel;

                Some(Self {
                    preamble: content[..start].to_owned(),
                    region: ManagedRegion::parse(&content[inner_from..end]),
                    epilogue: content[end + SECTION_END.len()..].to_owned(),
                })
            }
        }
    }

    pub fn region(&self) -> &ManagedRegion {
        &self.region
    }

    pub fn region_mut(&mut self) -> &mut ManagedRegion {
        &mut self.region
    }

    /// Re-assemble the full file content.
    ///
    /// An empty region renders as bare markers with nothing between them; a
    /// trailing newline is appended only when the result lacks one.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            self.preamble.len() + self.epilogue.len() + 64 + 48 * self.region.len(),
        );
        out.push_str(&self.preamble);
        out.push_str(SECTION_START);
        out.push('\n');
        if !self.region.is_empty() {
            out.push_str(&self.region.serialize());
            out.push('\n');
        }
        out.push_str(SECTION_END);
        out.push_str(&self.epilogue);
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

/// Insert-or-replace `entry` in the aggregator content's managed region.
///
/// Implements the full merge: classify, synthesize a region for seedable
/// content, parse, upsert by key, re-serialize, splice. Returns
/// [`MergeOutcome::Unchanged`] when the result is byte-identical to the
/// input, which is what makes repeated runs idempotent and keeps file
/// timestamps quiet.
pub fn upsert(content: &str, fixed_preamble: Option<&str>, entry: ExportEntry) -> MergeOutcome {
    let Some(mut index) = IndexFile::parse(content, fixed_preamble) else {
        return MergeOutcome::SkippedCustom;
    };

    index.region_mut().upsert(entry);
    let rendered = index.render();
    if rendered == content {
        MergeOutcome::Unchanged
    } else {
        MergeOutcome::Updated(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn managed(body: &str) -> String {
        format!("{SECTION_START}\n{body}{SECTION_END}\n")
    }

    // ── classify ──────────────────────────────────────────────────────────

    #[test]
    fn classify_empty_and_whitespace() {
        assert_eq!(classify("", None), IndexKind::Empty);
        assert_eq!(classify("  \n\t\n", None), IndexKind::Empty);
    }

    #[test]
    fn classify_managed_needs_both_markers_in_order() {
        assert_eq!(classify(&managed(""), None), IndexKind::Managed);
        assert_eq!(
            classify(&format!("{SECTION_END}\n{SECTION_START}\n"), None),
            IndexKind::Custom
        );
        assert_eq!(
            classify(&format!("{SECTION_START}\n"), None),
            IndexKind::Custom
        );
    }

    #[test]
    fn classify_known_placeholders() {
        assert_eq!(classify("# init file", None), IndexKind::KnownPlaceholder);
        assert_eq!(classify("  # init file\n", None), IndexKind::KnownPlaceholder);
        assert_eq!(
            classify(DATABASE_PREAMBLE, Some(DATABASE_PREAMBLE)),
            IndexKind::KnownPlaceholder
        );
        // The preamble line is only a placeholder where it is expected.
        assert_eq!(classify(DATABASE_PREAMBLE, None), IndexKind::Custom);
        // Preamble plus anything else is hand-written.
        assert_eq!(
            classify(
                &format!("{DATABASE_PREAMBLE}\nimport os\n"),
                Some(DATABASE_PREAMBLE)
            ),
            IndexKind::Custom
        );
    }

    #[test]
    fn classify_custom_content() {
        assert_eq!(classify("import os\n", None), IndexKind::Custom);
        assert_eq!(classify("# my own init\n", None), IndexKind::Custom);
    }

    // ── seeding / rendering ───────────────────────────────────────────────

    #[test]
    fn seeded_file_is_already_managed() {
        let rendered = IndexFile::seeded(None).render();
        assert_eq!(rendered, managed(""));
        assert_eq!(classify(&rendered, None), IndexKind::Managed);
    }

    #[test]
    fn seeded_file_keeps_fixed_preamble_first() {
        let rendered = IndexFile::seeded(Some(DATABASE_PREAMBLE)).render();
        assert!(rendered.starts_with(&format!("{DATABASE_PREAMBLE}\n\n{SECTION_START}")));
        assert_eq!(classify(&rendered, Some(DATABASE_PREAMBLE)), IndexKind::Managed);
    }

    // ── upsert scenarios ──────────────────────────────────────────────────

    #[test]
    fn upsert_into_empty_content() {
        // Scenario A: empty aggregator gains one import and a one-key list.
        let outcome = upsert("", None, ExportEntry::new("user_model", "User"));
        let MergeOutcome::Updated(content) = outcome else {
            panic!("expected Updated, got {outcome:?}");
        };
        assert!(content.contains("from .user_model import User\n"));
        assert!(content.contains("__all__ = [\n    \"User\",\n]"));
        assert_eq!(classify(&content, None), IndexKind::Managed);
    }

    #[test]
    fn upsert_second_entry_orders_before_existing() {
        // Scenario B: Profile sorts before User ordinally.
        let MergeOutcome::Updated(first) = upsert("", None, ExportEntry::new("user_model", "User"))
        else {
            panic!("first upsert should update");
        };
        let MergeOutcome::Updated(second) =
            upsert(&first, None, ExportEntry::new("profile_model", "Profile"))
        else {
            panic!("second upsert should update");
        };

        let profile = second.find("from .profile_model import Profile").unwrap();
        let user = second.find("from .user_model import User").unwrap();
        assert!(profile < user);
        assert!(second.contains("__all__ = [\n    \"Profile\",\n    \"User\",\n]"));
    }

    #[test]
    fn upsert_custom_content_is_noop() {
        // Scenario C: hand-written file without markers stays untouched.
        let content = "from .secret import hand_rolled\nVALUE = 3\n";
        assert_eq!(
            upsert(content, None, ExportEntry::new("user_model", "User")),
            MergeOutcome::SkippedCustom
        );
    }

    #[test]
    fn upsert_twice_is_idempotent() {
        let entry = ExportEntry::new("user_model", "User");
        let MergeOutcome::Updated(once) = upsert("", None, entry.clone()) else {
            panic!("first upsert should update");
        };
        assert_eq!(upsert(&once, None, entry), MergeOutcome::Unchanged);
    }

    #[test]
    fn upsert_preserves_text_outside_markers() {
        let content = format!(
            "# hand-written header\nimport logging\n\n{}\n# trailing notes\nEXTRA = True\n",
            managed("from .user_model import User\n\n__all__ = [\n    \"User\",\n]\n")
                .trim_end_matches('\n')
        );
        let MergeOutcome::Updated(updated) =
            upsert(&content, None, ExportEntry::new("profile_model", "Profile"))
        else {
            panic!("expected Updated");
        };

        assert!(updated.starts_with("# hand-written header\nimport logging\n\n"));
        assert!(updated.ends_with("# trailing notes\nEXTRA = True\n"));
        assert!(updated.contains("from .profile_model import Profile"));
        assert!(updated.contains("from .user_model import User"));
    }

    #[test]
    fn upsert_replaces_entry_with_same_key() {
        let MergeOutcome::Updated(once) =
            upsert("", None, ExportEntry::new("user_model", "User"))
        else {
            panic!("expected Updated");
        };
        let MergeOutcome::Updated(twice) =
            upsert(&once, None, ExportEntry::new("account_model", "User"))
        else {
            panic!("expected Updated");
        };

        assert!(twice.contains("from .account_model import User"));
        assert!(!twice.contains("from .user_model import User"));
        assert!(twice.contains("__all__ = [\n    \"User\",\n]"));
    }

    #[test]
    fn upsert_regenerates_all_list_and_drops_malformed_lines() {
        let content = managed(
            "from .user_model import User\n\
             this line was mangled by hand\n\
             \n\
             __all__ = [\n    \"User\",\n    \"Ghost\",\n]\n",
        );
        let MergeOutcome::Updated(updated) =
            upsert(&content, None, ExportEntry::new("profile_model", "Profile"))
        else {
            panic!("expected Updated");
        };

        assert!(!updated.contains("mangled"));
        assert!(!updated.contains("Ghost"));
        assert!(updated.contains("__all__ = [\n    \"Profile\",\n    \"User\",\n]"));
    }

    #[test]
    fn upsert_seeds_placeholder_with_preamble() {
        let outcome = upsert(
            &format!("{DATABASE_PREAMBLE}\n"),
            Some(DATABASE_PREAMBLE),
            ExportEntry::new("user_factory", "UserFactory"),
        );
        let MergeOutcome::Updated(content) = outcome else {
            panic!("expected Updated, got {outcome:?}");
        };

        assert!(content.starts_with(&format!("{DATABASE_PREAMBLE}\n\n{SECTION_START}")));
        assert!(content.contains("from .user_factory import UserFactory"));
    }

    #[test]
    fn upsert_keeps_alias_as_key() {
        let MergeOutcome::Updated(content) = upsert(
            "",
            None,
            ExportEntry::with_alias("user_model", "User", "Account"),
        ) else {
            panic!("expected Updated");
        };

        assert!(content.contains("from .user_model import User as Account\n"));
        assert!(content.contains("__all__ = [\n    \"Account\",\n]"));
    }
}
