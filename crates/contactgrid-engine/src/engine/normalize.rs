//! Text cleanup applied before every extraction.
//!
//! [`normalize`] is the full pipeline for name/email cells: line breaks are
//! flattened, commas dropped, titles and degrees stripped, one middle initial
//! removed, and the result trimmed and lower-cased.
//!
//! [`normalize_company_name`] only flattens line breaks and trims. Company
//! names keep their case and punctuation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const LINE_SEPARATOR: char = '\u{2028}';
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Knobs for [`normalize_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Strip "phd"/"ph.d." in any letter case. Off by default, which only
    /// strips the spellings "Phd", "Ph.D." and "PhD" (so "PHD" survives).
    /// The dots in "Ph.D." match any character, so "Ph.D " goes too.
    pub case_insensitive_degrees: bool,
}

fn line_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\r\n|\n|\r").expect("line break regex must compile"))
}

fn degree_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Phd|Ph.D.|PhD").expect("degree regex must compile"))
}

fn degree_any_case_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)phd|ph.d.").expect("degree regex must compile"))
}

/// Whitespace, one ASCII word character, a period: " M.".
fn middle_initial_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s[0-9A-Za-z_]\.").expect("middle initial regex must compile"))
}

/// Whitespace for the final trims. A leading byte order mark counts too.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

fn flatten_lines(input: &str) -> String {
    line_break_re()
        .replace_all(input, " ")
        .replace(LINE_SEPARATOR, "")
}

/// Normalize a name/email cell with default options.
pub fn normalize(input: &str) -> String {
    normalize_with(input, &NormalizeOptions::default())
}

/// Normalize a name/email cell.
///
/// Only the first "Dr.", the first "MBA" and the first middle initial are
/// removed. Later occurrences are left in place.
pub fn normalize_with(input: &str, options: &NormalizeOptions) -> String {
    let text = flatten_lines(input).replace(',', "");
    let text = text.replacen("Dr.", "", 1).replacen("MBA", "", 1);

    let degrees = if options.case_insensitive_degrees {
        degree_any_case_re()
    } else {
        degree_re()
    };
    let text = degrees.replace_all(&text, "");
    let text = middle_initial_re().replace(&text, "");

    text.trim_start_matches(is_trimmable)
        .trim_end_matches(is_trimmable)
        .to_lowercase()
}

/// Light cleanup for company names: flatten line breaks and trim.
pub fn normalize_company_name(input: &str) -> String {
    flatten_lines(input)
        .trim_start_matches(is_trimmable)
        .trim_end_matches(is_trimmable)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_breaks_become_spaces() {
        assert_eq!(normalize("a\r\nb\nc\rd"), "a b c d");
    }

    #[test]
    fn test_crlf_is_a_single_space() {
        assert_eq!(normalize("ann\r\nlee"), "ann lee");
    }

    #[test]
    fn test_line_separator_removed() {
        assert_eq!(normalize("ann\u{2028} lee"), "ann lee");
    }

    #[test]
    fn test_commas_removed() {
        assert_eq!(normalize("Lee, Ann"), "lee ann");
    }

    #[test]
    fn test_only_first_dr_removed() {
        assert_eq!(normalize("Dr. Dr. Who"), "dr. who");
    }

    #[test]
    fn test_dr_is_case_sensitive() {
        assert_eq!(
            normalize("Ann Lee (dr.ann@clinic.org)"),
            "ann lee (dr.ann@clinic.org)"
        );
    }

    #[test]
    fn test_only_first_mba_removed() {
        assert_eq!(normalize("Ann MBA MBA"), "ann  mba");
    }

    #[test]
    fn test_all_degree_spellings_removed() {
        assert_eq!(normalize("Ann Phd PhD Ph.D."), "ann");
    }

    #[test]
    fn test_degree_dots_match_any_character() {
        assert_eq!(normalize("Ann Lee Ph.D (ann@lee.com)"), "ann lee (ann@lee.com)");
        assert_eq!(normalize("PhxDy"), "");
    }

    #[test]
    fn test_uppercase_phd_survives_by_default() {
        assert_eq!(normalize("Ann Lee PHD"), "ann lee phd");
    }

    #[test]
    fn test_case_insensitive_degrees_option() {
        let options = NormalizeOptions {
            case_insensitive_degrees: true,
        };
        assert_eq!(normalize_with("Ann Lee PHD", &options), "ann lee");
        assert_eq!(normalize_with("Ann Lee ph.d.", &options), "ann lee");
    }

    #[test]
    fn test_first_middle_initial_removed() {
        assert_eq!(normalize("Ann M. Lee"), "ann lee");
        assert_eq!(normalize("Ann m. Lee"), "ann lee");
        assert_eq!(normalize("Ann B. C. Lee"), "ann c. lee");
    }

    #[test]
    fn test_two_letter_initials_kept() {
        assert_eq!(normalize("Ann MI. Lee"), "ann mi. lee");
    }

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize("  \tAnn LEE \n"), "ann lee");
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        assert_eq!(normalize("\u{feff}Ann Lee"), "ann lee");
        assert_eq!(normalize_company_name("\u{feff}Acme "), "Acme");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \r\n "), "");
    }

    #[test]
    fn test_company_name_keeps_case_and_commas() {
        assert_eq!(normalize_company_name("Acme, Inc.\n"), "Acme, Inc.");
        assert_eq!(
            normalize_company_name("  Big\r\nCo\u{2028}, LLC "),
            "Big Co, LLC"
        );
    }

    #[test]
    fn test_company_name_keeps_titles() {
        assert_eq!(normalize_company_name("Dr. Pepper MBA"), "Dr. Pepper MBA");
    }
}
