//! Prohibited-content scan
//!
//! Matching is plain substring containment over `title + " " + body`, not
//! word-boundary matching: a configured term "ass" matches "assassin". That
//! false-positive risk is accepted behaviour.

use feedgate_domain::constants::{FIELD_CONTENT, RULE_PROHIBITED_CONTENT};
use feedgate_domain::{Content, Finding};

/// Case handling for term matching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchCase {
    /// Lower-case both sides before comparing
    #[default]
    Insensitive,
    /// Compare as written
    Sensitive,
}

/// One finding per configured term found in the title or body
pub fn check_prohibited_terms<S: AsRef<str>>(
    content: &Content,
    terms: &[S],
    case: MatchCase,
) -> Vec<Finding> {
    let text = match case {
        MatchCase::Insensitive => content.searchable_text().to_lowercase(),
        MatchCase::Sensitive => content.searchable_text(),
    };

    terms
        .iter()
        .map(AsRef::as_ref)
        .filter(|term| !term.trim().is_empty())
        .filter(|term| match case {
            MatchCase::Insensitive => text.contains(&term.to_lowercase()),
            MatchCase::Sensitive => text.contains(*term),
        })
        .map(|term| {
            Finding::new(
                RULE_PROHIBITED_CONTENT,
                format!("Article contains prohibited topic: '{term}'"),
            )
            .with_field(FIELD_CONTENT)
            .with_value(term)
        })
        .collect()
}
