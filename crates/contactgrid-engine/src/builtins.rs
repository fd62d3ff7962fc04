//! Named contact functions and their metadata.
//!
//! Conventions:
//! - Sheet-facing names are ALL CAPS with underscores (e.g. `FIRST_NAME`).
//! - Lookup goes through `BUILTINS` only. If you add a function, add its
//!   entry there.

use crate::engine::{CellInput, CellOutput, CellResult, ContactExtractor, broadcast};

pub struct Builtin {
    pub sheet_name: &'static str,
    pub description: &'static str,
    op: fn(&ContactExtractor, &str) -> CellResult,
}

impl Builtin {
    /// Apply to a single text cell.
    pub fn call(&self, extractor: &ContactExtractor, input: &str) -> CellResult {
        (self.op)(extractor, input)
    }

    /// Apply to a cell or range, keeping the input's shape.
    pub fn apply(&self, extractor: &ContactExtractor, input: &CellInput) -> CellOutput {
        broadcast(input, |text| self.call(extractor, text))
    }
}

fn normalize_op(extractor: &ContactExtractor, input: &str) -> CellResult {
    Ok(extractor.normalize(input))
}

fn company_name_op(extractor: &ContactExtractor, input: &str) -> CellResult {
    Ok(extractor.normalize_company_name(input))
}

pub const BUILTINS: &[Builtin] = &[
    Builtin {
        sheet_name: "NORMALIZE",
        description: "Flatten, strip titles/degrees/one middle initial, lower-case",
        op: normalize_op,
    },
    Builtin {
        sheet_name: "COMPANY_NAME",
        description: "Flatten line breaks and trim, keeping case and commas",
        op: company_name_op,
    },
    Builtin {
        sheet_name: "FIRST_NAME",
        description: "First whitespace-delimited word",
        op: ContactExtractor::first_name,
    },
    Builtin {
        sheet_name: "LAST_NAME",
        description: "Word right before the parenthesised email",
        op: ContactExtractor::last_name,
    },
    Builtin {
        sheet_name: "EMAIL",
        description: "First email inside parentheses",
        op: ContactExtractor::email,
    },
    Builtin {
        sheet_name: "DOTCOM_EMAIL",
        description: "The email if it ends in .com, otherwise empty",
        op: ContactExtractor::dotcom_email,
    },
    Builtin {
        sheet_name: "EMAIL_DOMAIN",
        description: "Everything after the @ of the email",
        op: ContactExtractor::email_domain,
    },
];

/// Look up a built-in by sheet name (case-insensitive).
pub fn builtin(name: &str) -> Option<&'static Builtin> {
    let name = name.trim();
    BUILTINS
        .iter()
        .find(|b| b.sheet_name.eq_ignore_ascii_case(name))
}
