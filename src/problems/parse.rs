//! # Problem Text Parsing
//!
//! The upstream site serves problems in two loosely-structured shapes:
//!
//! - a combined record line, `"id","title","description..."`, from the
//!   bulk listing (quoting is irregular in older entries);
//! - free text from the per-problem endpoint, where the first line is the
//!   title and everything after the first blank line is the body.
//!
//! Both shapes reduce to a [`Problem`] with HTML paragraph/line-break
//! markup rewritten to plain newlines. Parsing is best-effort and never
//! panics: stray quotes are stripped, missing fields come out empty.

use std::sync::LazyLock;

use regex::Regex;

use super::types::Problem;

static P_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<p>").expect("static pattern"));
static P_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</p>").expect("static pattern"));
static BR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("static pattern"));

/// Rewrite paragraph/line-break markup to newlines and trim the result.
///
/// `<p>` becomes a blank-line separator, `</p>` disappears, and `<br>` in
/// any of its spellings becomes a single newline.
pub fn normalize_markup(text: &str) -> String {
    let text = P_OPEN.replace_all(text, "\n\n");
    let text = P_CLOSE.replace_all(&text, "");
    let text = BR.replace_all(&text, "\n");
    text.trim().to_string()
}

/// Parse one combined record line from the bulk listing.
///
/// Fields are split on `","` and stray quote characters stripped, since
/// the listing's quoting is not consistent enough for a strict CSV read.
/// Everything past the title is rejoined with `,` — commas inside the
/// description are content, not separators. A non-numeric id field falls
/// back to `requested_id`: the record's position is authoritative.
pub fn parse_record(requested_id: u32, line: &str) -> Problem {
    let fields: Vec<String> = line
        .split("\",\"")
        .map(|field| field.replace('"', ""))
        .collect();

    let id = fields
        .first()
        .and_then(|field| field.trim().parse().ok())
        .unwrap_or(requested_id);
    let title = fields
        .get(1)
        .map(|field| field.trim().to_string())
        .unwrap_or_default();
    let body = if fields.len() > 2 {
        normalize_markup(&fields[2..].join(","))
    } else {
        String::new()
    };

    Problem { id, title, body }
}

/// Parse the free-text shape: line one is the title, the lines after the
/// first blank separator form the body.
pub fn parse_free_text(id: u32, raw: &str) -> Problem {
    let mut lines = raw.lines();
    let title = lines.next().unwrap_or("").trim().to_string();
    let rest: Vec<&str> = lines.skip_while(|line| line.trim().is_empty()).collect();

    Problem {
        id,
        title,
        body: normalize_markup(&rest.join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_combined() {
        let problem = parse_record(42, "\"42\",\"Title\",\"<p>Line1</p><p>Line2</p>\"");
        assert_eq!(problem.id, 42);
        assert_eq!(problem.title, "Title");
        assert_eq!(problem.body, "Line1\n\nLine2");
    }

    #[test]
    fn test_parse_record_commas_in_description() {
        let problem = parse_record(1, "\"1\",\"Multiples\",\"Find the sum of 3, 5 and 7.\"");
        assert_eq!(problem.body, "Find the sum of 3, 5 and 7.");
    }

    #[test]
    fn test_parse_record_irregular_quoting() {
        // Stray quotes inside fields get stripped, nothing panics.
        let problem = parse_record(7, "\"7\",\"A \"quoted\" title\",\"body\"");
        assert_eq!(problem.id, 7);
        assert_eq!(problem.title, "A quoted title");
        assert_eq!(problem.body, "body");
    }

    #[test]
    fn test_parse_record_non_numeric_id_falls_back() {
        let problem = parse_record(9, "\"??\",\"Title\",\"body\"");
        assert_eq!(problem.id, 9);
    }

    #[test]
    fn test_parse_record_missing_fields() {
        let problem = parse_record(3, "\"3\"");
        assert_eq!(problem.id, 3);
        assert_eq!(problem.title, "");
        assert_eq!(problem.body, "");
    }

    #[test]
    fn test_parse_free_text() {
        let problem = parse_free_text(5, "Title\n\nBody line 1\nBody line 2");
        assert_eq!(problem.title, "Title");
        assert_eq!(problem.body, "Body line 1\nBody line 2");
    }

    #[test]
    fn test_parse_free_text_no_body() {
        let problem = parse_free_text(5, "Just a title");
        assert_eq!(problem.title, "Just a title");
        assert_eq!(problem.body, "");
    }

    #[test]
    fn test_normalize_markup_br_variants() {
        assert_eq!(normalize_markup("a<br>b<br/>c<br />d"), "a\nb\nc\nd");
    }

    #[test]
    fn test_normalize_markup_case_insensitive() {
        assert_eq!(normalize_markup("<P>one</P><p>two</p>"), "one\n\ntwo");
    }

    #[test]
    fn test_normalize_markup_trims() {
        assert_eq!(normalize_markup("<p>padded</p>  "), "padded");
    }
}
