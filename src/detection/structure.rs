//! Keyword scan over root entry names
//!
//! A flag is set when any root entry name, lowercased, contains one of the
//! flag's keywords.

pub const TEST_KEYWORDS: &[&str] = &["test", "spec", "__tests__", "tests"];
pub const DOC_KEYWORDS: &[&str] = &["docs", "documentation", "doc"];
pub const LICENSE_KEYWORDS: &[&str] = &["license", "licence"];
pub const CONTRIBUTING_KEYWORDS: &[&str] = &["contributing", "contribute"];
pub const CHANGELOG_KEYWORDS: &[&str] = &["changelog", "history", "changes"];

/// Structural flags derived from the root listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructureFlags {
    pub has_tests: bool,
    pub has_docs: bool,
    pub has_license: bool,
    pub has_contributing: bool,
    pub has_changelog: bool,
}

impl StructureFlags {
    pub fn scan(entries: &[String]) -> Self {
        Self {
            has_tests: any_entry_matches(entries, TEST_KEYWORDS),
            has_docs: any_entry_matches(entries, DOC_KEYWORDS),
            has_license: any_entry_matches(entries, LICENSE_KEYWORDS),
            has_contributing: any_entry_matches(entries, CONTRIBUTING_KEYWORDS),
            has_changelog: any_entry_matches(entries, CHANGELOG_KEYWORDS),
        }
    }
}

pub fn matches_keyword(name: &str, keywords: &[&str]) -> bool {
    let name = name.to_lowercase();
    keywords
        .iter()
        .any(|keyword| name.contains(&keyword.to_lowercase()))
}

pub fn any_entry_matches(entries: &[String], keywords: &[&str]) -> bool {
    entries.iter().any(|entry| matches_keyword(entry, keywords))
}
