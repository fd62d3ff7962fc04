//! Field extraction rules for contact cells.
//!
//! Every rule normalizes its input first and then matches one pattern.
//! Names are found by working inward: the first name from the start of the
//! cell, the last name backwards from the parenthesised email. Whatever sits
//! between them (nicknames, leftover initials) is never looked at.
//!
//! A cell in the best case looks like
//!
//! ```text
//! FirstName LastName (email@email.com)
//! ```
//!
//! but messier input such as
//!
//! ```text
//! Dr. FirstName (nickname) MI. LastName, MBA, PhD
//! (email1@email1.com / email2@email2.com
//! ```
//!
//! is handled as well.

use regex::Regex;
use std::sync::OnceLock;

use super::error::{ExtractError, Field, Result};
use super::normalize::{NormalizeOptions, normalize_company_name, normalize_with};

/// Leading token terminated by whitespace.
fn first_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([^\s]*?)\s").expect("first name regex must compile"))
}

/// Token directly before a "(" that is followed by an "@".
fn last_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s([^\s]+)\s+\(.*@.*").expect("last name regex must compile"))
}

/// "@"-bearing token right after a "(", up to whitespace or ")".
fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(([^\s]+@[^\s)]+)").expect("email regex must compile"))
}

fn capture(re: &Regex, text: &str, field: Field) -> Result<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(ExtractError::NoMatch(field))
}

/// Applies the extraction rules with a fixed set of normalization options.
///
/// The extractor holds no state besides its options; patterns are compiled
/// once per process and shared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactExtractor {
    options: NormalizeOptions,
}

impl ContactExtractor {
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    pub fn normalize(&self, input: &str) -> String {
        normalize_with(input, &self.options)
    }

    pub fn normalize_company_name(&self, input: &str) -> String {
        normalize_company_name(input)
    }

    pub fn first_name(&self, input: &str) -> Result<String> {
        capture(first_name_re(), &self.normalize(input), Field::FirstName)
    }

    pub fn last_name(&self, input: &str) -> Result<String> {
        capture(last_name_re(), &self.normalize(input), Field::LastName)
    }

    /// First email inside the first parenthesised group containing an "@".
    ///
    /// A second address joined with " / " is not part of the match.
    pub fn email(&self, input: &str) -> Result<String> {
        capture(email_re(), &self.normalize(input), Field::Email)
    }

    /// The email if it ends in ".com", otherwise an empty string.
    pub fn dotcom_email(&self, input: &str) -> Result<String> {
        let email = self.email(&self.normalize(input))?;
        if email.ends_with(".com") {
            Ok(email)
        } else {
            Ok(String::new())
        }
    }

    /// Everything after the first "@" of the email.
    pub fn email_domain(&self, input: &str) -> Result<String> {
        let email = self.email(&self.normalize(input))?;
        match email.split_once('@') {
            Some((_, domain)) if !domain.is_empty() => Ok(domain.to_string()),
            _ => Err(ExtractError::NoMatch(Field::EmailDomain)),
        }
    }
}

pub fn extract_first_name(input: &str) -> Result<String> {
    ContactExtractor::default().first_name(input)
}

pub fn extract_last_name(input: &str) -> Result<String> {
    ContactExtractor::default().last_name(input)
}

pub fn extract_email(input: &str) -> Result<String> {
    ContactExtractor::default().email(input)
}

pub fn extract_dotcom_email(input: &str) -> Result<String> {
    ContactExtractor::default().dotcom_email(input)
}

pub fn extract_email_domain(input: &str) -> Result<String> {
    ContactExtractor::default().email_domain(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "FirstName LastName (email@email.com)";
    const MESSY: &str =
        "Dr. FirstName (nickname) MI. LastName, MBA, PhD\n(email1@email1.com / email2@email2.com";

    #[test]
    fn test_first_name_simple() {
        assert_eq!(extract_first_name(SIMPLE).unwrap(), "firstname");
    }

    #[test]
    fn test_first_name_skips_title() {
        assert_eq!(extract_first_name(MESSY).unwrap(), "firstname");
    }

    #[test]
    fn test_first_name_needs_trailing_whitespace() {
        assert_eq!(
            extract_first_name("Cher"),
            Err(ExtractError::NoMatch(Field::FirstName))
        );
        assert_eq!(
            extract_first_name(""),
            Err(ExtractError::NoMatch(Field::FirstName))
        );
    }

    #[test]
    fn test_last_name_simple() {
        assert_eq!(extract_last_name(SIMPLE).unwrap(), "lastname");
    }

    #[test]
    fn test_last_name_skips_nickname_and_initials() {
        assert_eq!(extract_last_name(MESSY).unwrap(), "lastname");
    }

    #[test]
    fn test_last_name_after_undotted_degree() {
        assert_eq!(extract_last_name("Ann Lee Ph.D (ann@lee.com)").unwrap(), "lee");
    }

    #[test]
    fn test_first_name_after_byte_order_mark() {
        assert_eq!(
            extract_first_name("\u{feff}Ann Lee (ann@lee.com)").unwrap(),
            "ann"
        );
    }

    #[test]
    fn test_last_name_requires_email_group() {
        assert_eq!(
            extract_last_name("Ann Lee (no email here)"),
            Err(ExtractError::NoMatch(Field::LastName))
        );
        assert_eq!(
            extract_last_name("Ann Lee ann@lee.com"),
            Err(ExtractError::NoMatch(Field::LastName))
        );
    }

    #[test]
    fn test_last_name_needs_preceding_token() {
        assert_eq!(
            extract_last_name("Lee (ann@lee.com)"),
            Err(ExtractError::NoMatch(Field::LastName))
        );
    }

    #[test]
    fn test_email_simple() {
        assert_eq!(extract_email(SIMPLE).unwrap(), "email@email.com");
    }

    #[test]
    fn test_email_takes_first_of_slash_separated() {
        assert_eq!(extract_email(MESSY).unwrap(), "email1@email1.com");
    }

    #[test]
    fn test_email_without_spaces_around_slash() {
        assert_eq!(
            extract_email("Ann Lee (a@x.com/b@y.com)").unwrap(),
            "a@x.com/b@y.com"
        );
    }

    #[test]
    fn test_email_is_lowercased() {
        assert_eq!(extract_email("Ann Lee (Ann@Lee.COM)").unwrap(), "ann@lee.com");
    }

    #[test]
    fn test_email_requires_parenthesis() {
        assert_eq!(
            extract_email("Ann Lee ann@lee.com"),
            Err(ExtractError::NoMatch(Field::Email))
        );
        assert_eq!(
            extract_email("Ann Lee (ann at lee.com)"),
            Err(ExtractError::NoMatch(Field::Email))
        );
    }

    #[test]
    fn test_dotcom_email_keeps_dotcom() {
        assert_eq!(extract_dotcom_email(SIMPLE).unwrap(), "email@email.com");
    }

    #[test]
    fn test_dotcom_email_blanks_other_suffixes() {
        assert_eq!(extract_dotcom_email("Ann Lee (ann@lee.org)").unwrap(), "");
        assert_eq!(extract_dotcom_email("Ann Lee (ann@lee.co)").unwrap(), "");
        assert_eq!(extract_dotcom_email("Ann Lee (ann@lee.com.au)").unwrap(), "");
    }

    #[test]
    fn test_dotcom_email_propagates_no_match() {
        assert_eq!(
            extract_dotcom_email("Ann Lee"),
            Err(ExtractError::NoMatch(Field::Email))
        );
    }

    #[test]
    fn test_email_domain() {
        assert_eq!(extract_email_domain("(a@b.com)").unwrap(), "b.com");
        assert_eq!(extract_email_domain(MESSY).unwrap(), "email1.com");
    }

    #[test]
    fn test_email_domain_after_first_at() {
        assert_eq!(extract_email_domain("(a@b@c.com)").unwrap(), "b@c.com");
    }

    #[test]
    fn test_email_domain_propagates_no_match() {
        assert_eq!(
            extract_email_domain("Ann Lee"),
            Err(ExtractError::NoMatch(Field::Email))
        );
    }

    #[test]
    fn test_extractor_options_reach_extraction() {
        let strict = ContactExtractor::default();
        let loose = ContactExtractor::new(NormalizeOptions {
            case_insensitive_degrees: true,
        });
        let cell = "Ann Lee PHD (ann@lee.com)";
        assert_eq!(strict.last_name(cell).unwrap(), "phd");
        assert_eq!(loose.last_name(cell).unwrap(), "lee");
    }
}
