use std::collections::{HashMap, HashSet};

use http::StatusCode;

use crate::error::GeneratorError;
use crate::types::Result;

/// Source of human-readable HTTP reason phrases
pub trait ReasonPhrases: Send + Sync {
    fn reason_phrase(&self, code: u16) -> Option<String>;
}

/// The canonical IANA phrases shipped with the `http` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardReasonPhrases;

impl ReasonPhrases for StandardReasonPhrases {
    fn reason_phrase(&self, code: u16) -> Option<String> {
        StatusCode::from_u16(code)
            .ok()?
            .canonical_reason()
            .map(str::to_string)
    }
}

impl ReasonPhrases for HashMap<u16, String> {
    fn reason_phrase(&self, code: u16) -> Option<String> {
        self.get(&code).cloned()
    }
}

/// Resolves the phrase for a digit string taken from the error table.
pub fn lookup_phrase(phrases: &dyn ReasonPhrases, code: &str) -> Result<String> {
    code.parse::<u16>()
        .ok()
        .and_then(|numeric| phrases.reason_phrase(numeric))
        .ok_or_else(|| GeneratorError::MalformedStatusCode(code.to_string()))
}

/// Ascending numeric order for digit strings: shorter strings first, then
/// lexicographic. Three-digit codes keep plain string order.
pub fn sorted_status_codes(codes: &HashSet<String>) -> Vec<String> {
    let mut sorted: Vec<String> = codes.iter().cloned().collect();
    sorted.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    sorted
}
