//! Phonebook record model.
//!
//! A record is one line of the phonebook: an integer phone number followed
//! by a name that may itself contain spaces, e.g. `123 Fred Smith`.

use std::fmt;

/// A `(number, name)` pair parsed from one phonebook line.
///
/// Ordering between records is lexicographic by name using plain codepoint
/// comparison; the number never participates in ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub number: i64,
    pub name: String,
}

impl Record {
    /// Parse a raw phonebook line. Never fails: an unparsable or missing
    /// first token yields number 0, and a line with nothing after the
    /// number yields an empty name. Interior runs of whitespace collapse
    /// to single spaces in the name.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let number = tokens
            .next()
            .and_then(|t| t.parse().ok())
            .unwrap_or_default();
        let name = tokens.collect::<Vec<_>>().join(" ");
        Self { number, name }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let r = Record::parse("123 Fred Smith");
        assert_eq!(r.number, 123);
        assert_eq!(r.name, "Fred Smith");
    }

    #[test]
    fn test_parse_single_word_name() {
        let r = Record::parse("456 Jane");
        assert_eq!(r.number, 456);
        assert_eq!(r.name, "Jane");
    }

    #[test]
    fn test_parse_unparsable_number_defaults_to_zero() {
        let r = Record::parse("abc Fred Smith");
        assert_eq!(r.number, 0);
        // The first token is consumed as the number slot even when it
        // fails to parse, so it never leaks into the name.
        assert_eq!(r.name, "Fred Smith");
    }

    #[test]
    fn test_parse_number_only_yields_empty_name() {
        let r = Record::parse("789");
        assert_eq!(r.number, 789);
        assert_eq!(r.name, "");
    }

    #[test]
    fn test_parse_empty_line() {
        let r = Record::parse("");
        assert_eq!(r.number, 0);
        assert_eq!(r.name, "");
    }

    #[test]
    fn test_parse_collapses_interior_whitespace() {
        let r = Record::parse("12   Mary   Ann  Lee");
        assert_eq!(r.number, 12);
        assert_eq!(r.name, "Mary Ann Lee");
    }

    #[test]
    fn test_display_round_trips_clean_lines() {
        let r = Record::parse("123 Fred Smith");
        assert_eq!(r.to_string(), "123 Fred Smith");
    }
}
