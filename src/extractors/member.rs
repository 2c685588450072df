// src/extractors/member.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

use crate::roster::models::{AgeBrackets, BracketedRoster, MemberRecord};
use crate::utils::error::ExtractError;

// --- Regex Patterns for Roster Layouts (Lazy Static) ---
// The roster was typeset in two layouts, both prefixed with a
// "<city>, <join year>" column. Every pattern runs over the full text and the
// union of matches contributes records: members in the same document may use
// different layouts. Overlapping captures are not deduplicated.
static MEMBER_LINE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Layout 1: name and age share the line, e.g. "Doe, 2018 John Smith 45"
        r"\n.*, \d{4} (?P<name>.*) (?P<age>\d{1,2})\n",
        // Layout 2: age ends the line, name wraps onto the next one
        r"\n.*, \d{4} (?P<age>\d{1,2})\n(?P<name>.*)\n",
    ]
    .iter()
    .filter_map(|pat| Regex::new(pat).ok())
    .collect()
});

/// Compiled layout patterns, exposed for debug span dumps.
pub fn layout_patterns() -> &'static [Regex] {
    &MEMBER_LINE_RES
}

// --- Main Extractor Structure ---
pub struct MemberExtractor;

impl MemberExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Runs every layout pattern over the full roster text and returns the
    /// matched members grouped by age bracket.
    ///
    /// Any malformed match aborts the whole extraction: no partial roster is
    /// ever returned.
    pub fn extract(
        &self,
        text: &str,
        brackets: &AgeBrackets,
    ) -> Result<BracketedRoster, ExtractError> {
        let mut roster = BracketedRoster::new(brackets);

        for (pattern_idx, re) in MEMBER_LINE_RES.iter().enumerate() {
            let mut matched = 0usize;
            for caps in re.captures_iter(text) {
                let record = record_from_captures(&caps, pattern_idx)?;
                tracing::trace!("Matched member '{}' (age {})", record.name, record.age);
                roster.push(brackets.index_for_age(record.age), record);
                matched += 1;
            }
            tracing::debug!("Layout pattern {} matched {} records", pattern_idx, matched);
        }

        tracing::info!("Extracted {} members from roster text", roster.total());
        Ok(roster)
    }
}

/// Validates one match. An empty name or non-positive age is a data-quality
/// error: the layout pattern fit text it should not have.
fn record_from_captures(
    caps: &regex::Captures<'_>,
    pattern_idx: usize,
) -> Result<MemberRecord, ExtractError> {
    let name = caps.name("name").map(|m| m.as_str()).unwrap_or_default();
    let raw_age = caps.name("age").map(|m| m.as_str()).unwrap_or_default();

    let age: u32 = raw_age.parse().map_err(|_| ExtractError::BadData {
        pattern: pattern_idx,
        detail: format!("age '{}' is not a number", raw_age),
    })?;

    if name.is_empty() {
        return Err(ExtractError::BadData {
            pattern: pattern_idx,
            detail: format!("empty member name next to age {}", age),
        });
    }
    if age == 0 {
        return Err(ExtractError::BadData {
            pattern: pattern_idx,
            detail: format!("member '{}' has age 0", name),
        });
    }

    Ok(MemberRecord {
        name: name.to_string(),
        age,
    })
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn brackets() -> AgeBrackets {
        AgeBrackets::new(vec![32, 47, 67]).expect("valid breakpoints")
    }

    #[test]
    fn test_inline_layout_yields_record() {
        let text = "\nDoe, 2018 John Smith 45\n";

        let roster = MemberExtractor::new()
            .extract(text, &brackets())
            .expect("extraction failed");

        let buckets = roster.into_buckets();
        assert_eq!(
            buckets[1],
            vec![MemberRecord {
                name: "John Smith".to_string(),
                age: 45,
            }]
        );
    }

    #[test]
    fn test_wrapped_layout_yields_record() {
        let text = "\nShelbyville, 2018 23\nJane Roe\n";

        let roster = MemberExtractor::new()
            .extract(text, &brackets())
            .expect("extraction failed");

        let buckets = roster.into_buckets();
        assert_eq!(
            buckets[0],
            vec![MemberRecord {
                name: "Jane Roe".to_string(),
                age: 23,
            }]
        );
    }

    #[test]
    fn test_union_of_layouts_in_one_document() {
        let text = "\nSpringfield, 2018 John Smith 45\n\nShelbyville, 2018 23\nJane Roe\n";

        let roster = MemberExtractor::new()
            .extract(text, &brackets())
            .expect("extraction failed");

        assert_eq!(roster.total(), 2);
        let buckets = roster.into_buckets();
        assert_eq!(buckets[0][0].name, "Jane Roe");
        assert_eq!(buckets[1][0].name, "John Smith");
    }

    #[test]
    fn test_unmatched_lines_are_ignored() {
        let text = "\nMember Roster 2018\npage 3 of 7\n";

        let roster = MemberExtractor::new()
            .extract(text, &brackets())
            .expect("extraction failed");
        assert_eq!(roster.total(), 0);
    }

    #[test]
    fn test_age_zero_is_bad_data() {
        let text = "\nDoe, 2018 John Smith 0\n";

        let result = MemberExtractor::new().extract(text, &brackets());
        assert!(matches!(result, Err(ExtractError::BadData { .. })));
    }

    #[test]
    fn test_empty_name_is_bad_data() {
        // Double space between year and age: the name capture comes out empty.
        let text = "\nDoe, 2018  45\n";

        let result = MemberExtractor::new().extract(text, &brackets());
        assert!(matches!(result, Err(ExtractError::BadData { .. })));
    }

    #[test]
    fn test_bad_data_emits_no_partial_roster() {
        // A valid record before the malformed one must not leak out.
        let text = "\nDoe, 2018 John Smith 45\n\nDoe, 2018 Jane Roe 0\n";

        let result = MemberExtractor::new().extract(text, &brackets());
        assert!(result.is_err());
    }
}
