//! Bates number matching on extracted page text.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// Default Bates stamp: literal "DTB", one space, exactly four digits.
pub const DEFAULT_BATES_PATTERN: &str = r"DTB \d{4}";

lazy_static! {
    pub static ref BATES_PATTERN: Regex = Regex::new(DEFAULT_BATES_PATTERN).unwrap();
}

/// Beginning and ending Bates numbers found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatesRange {
    /// First match on the first page.
    pub first: Option<String>,
    /// Last match on the last page.
    pub last: Option<String>,
}

impl BatesRange {
    pub fn new(first: Option<String>, last: Option<String>) -> Self {
        Self { first, last }
    }

    /// True when neither side matched.
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.last.is_none()
    }
}

/// Finds Bates stamps in page text.
#[derive(Debug, Clone)]
pub struct BatesMatcher {
    pattern: Regex,
}

impl BatesMatcher {
    /// Create a matcher from a regular expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// All matches in reading order.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.pattern.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// The first match in reading order.
    pub fn first_in(&self, text: &str) -> Option<String> {
        self.pattern.find(text).map(|m| m.as_str().to_string())
    }

    /// The last match in reading order.
    pub fn last_in(&self, text: &str) -> Option<String> {
        self.pattern.find_iter(text).last().map(|m| m.as_str().to_string())
    }
}

impl Default for BatesMatcher {
    fn default() -> Self {
        Self {
            pattern: BATES_PATTERN.clone(),
        }
    }
}
