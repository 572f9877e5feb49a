//! Listing filters - pure predicates over book records.
//!
//! The reading/finished filters arrive as raw query-string values and are
//! compared by numeric coercion, matching the behavior the wire protocol
//! has always had: both sides are coerced to a number and checked for
//! exact equality. A value that does not coerce ("true", garbage) never
//! matches anything.

use crate::Book;
use serde::Deserialize;

/// Optional listing criteria, as received from the query string.
///
/// At most one criterion is applied, in priority order
/// name > reading > finished. Supplying several at once silently drops
/// the lower-priority ones; this mirrors the protocol's documented
/// behavior and is deliberately not a conjunction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookFilter {
    /// Case-insensitive substring match against the book name
    pub name: Option<String>,
    /// Numeric-coerced equality against the `reading` flag
    pub reading: Option<String>,
    /// Numeric-coerced equality against the derived `finished` flag
    pub finished: Option<String>,
}

impl BookFilter {
    /// True when no criterion is provided.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.reading.is_none() && self.finished.is_none()
    }

    /// Apply the highest-priority provided criterion to a book.
    ///
    /// An empty filter matches everything.
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(pattern) = &self.name {
            return matches_name(book, pattern);
        }
        if let Some(value) = &self.reading {
            return matches_reading(book, value);
        }
        if let Some(value) = &self.finished {
            return matches_finished(book, value);
        }
        true
    }
}

/// Case-insensitive substring test against the book name.
pub fn matches_name(book: &Book, pattern: &str) -> bool {
    book.name.to_lowercase().contains(&pattern.to_lowercase())
}

/// Numeric-coerced equality against the `reading` flag.
pub fn matches_reading(book: &Book, value: &str) -> bool {
    numeric_value(value) == Some(flag_value(book.reading))
}

/// Numeric-coerced equality against the derived `finished` flag.
pub fn matches_finished(book: &Book, value: &str) -> bool {
    numeric_value(value) == Some(flag_value(book.finished))
}

fn flag_value(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// Coerce a raw query value to a number.
///
/// Rules: whitespace is trimmed, an empty value is 0, decimal numbers
/// parse as themselves, everything else is not-a-number. `None` stands
/// for not-a-number and compares unequal to every flag.
fn numeric_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BookDraft;
    use chrono::Utc;

    fn book(name: &str, reading: bool, page_count: u32, read_page: u32) -> Book {
        Book::new(
            "id-0000000000000",
            BookDraft {
                name: Some(name.to_string()),
                publisher: Some("Ace".to_string()),
                page_count: Some(page_count),
                read_page: Some(read_page),
                reading: Some(reading),
                ..BookDraft::default()
            },
            Utc::now(),
        )
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let b = book("Dune Messiah", false, 330, 0);
        assert!(matches_name(&b, "dun"));
        assert!(matches_name(&b, "MESSIAH"));
        assert!(matches_name(&b, "e m"));
        assert!(!matches_name(&b, "atreides"));
    }

    #[test]
    fn empty_pattern_matches_every_name() {
        let b = book("Dune", false, 1, 0);
        assert!(matches_name(&b, ""));
    }

    #[test]
    fn reading_filter_coerces_zero_and_one() {
        let b = book("Dune", true, 500, 120);
        assert!(matches_reading(&b, "1"));
        assert!(!matches_reading(&b, "0"));

        let b = book("Dune", false, 500, 120);
        assert!(matches_reading(&b, "0"));
        assert!(!matches_reading(&b, "1"));
    }

    #[test]
    fn non_numeric_filter_value_never_matches() {
        let b = book("Dune", true, 500, 120);
        assert!(!matches_reading(&b, "true"));
        assert!(!matches_reading(&b, "false"));
        assert!(!matches_reading(&b, "yes"));

        let b = book("Dune", false, 500, 120);
        assert!(!matches_reading(&b, "false"));
    }

    #[test]
    fn empty_filter_value_coerces_to_zero() {
        let b = book("Dune", false, 500, 120);
        assert!(matches_reading(&b, ""));
        assert!(matches_reading(&b, "  "));

        let b = book("Dune", true, 500, 120);
        assert!(!matches_reading(&b, ""));
    }

    #[test]
    fn finished_filter_tracks_derived_flag() {
        let done = book("Dune", false, 500, 500);
        assert!(matches_finished(&done, "1"));
        assert!(!matches_finished(&done, "0"));

        let in_progress = book("Dune", true, 500, 120);
        assert!(matches_finished(&in_progress, "0"));
        assert!(!matches_finished(&in_progress, "1"));
    }

    #[test]
    fn decimal_strings_coerce_numerically() {
        let b = book("Dune", true, 500, 120);
        assert!(matches_reading(&b, "1.0"));
        assert!(matches_reading(&b, " 1 "));
        assert!(!matches_reading(&b, "2"));
    }

    #[test]
    fn filter_priority_name_over_reading_over_finished() {
        let b = book("Dune", true, 500, 120);

        // name wins even when the reading criterion would reject
        let filter = BookFilter {
            name: Some("dun".to_string()),
            reading: Some("0".to_string()),
            finished: None,
        };
        assert!(filter.matches(&b));

        // reading wins over finished
        let filter = BookFilter {
            name: None,
            reading: Some("1".to_string()),
            finished: Some("1".to_string()),
        };
        assert!(filter.matches(&b));

        let filter = BookFilter {
            name: None,
            reading: Some("0".to_string()),
            finished: Some("0".to_string()),
        };
        assert!(!filter.matches(&b));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let b = book("Dune", false, 1, 0);
        assert!(BookFilter::default().is_empty());
        assert!(BookFilter::default().matches(&b));
    }
}
