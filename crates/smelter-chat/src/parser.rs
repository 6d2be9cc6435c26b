//! Lookup key extraction from raw question text.
//!
//! A question may name a batch by its six-digit id or by its production
//! timestamp. The id wins when both are present.

use regex::Regex;
use std::sync::LazyLock;

use smelter_core::types::LookupKey;

// ASCII word boundaries: a non-ASCII letter or digit next to the id still
// separates it.
static BATCH_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[0-9]{6}(?-u:\b)").expect("Invalid batch id regex")
});

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z")
        .expect("Invalid timestamp regex")
});

/// First run of exactly six ASCII digits bounded by ASCII word boundaries.
pub fn extract_batch_id(question: &str) -> Option<&str> {
    BATCH_ID_RE.find(question).map(|m| m.as_str())
}

/// First `YYYY-MM-DDTHH:MM:SSZ` substring.
pub fn extract_timestamp(question: &str) -> Option<&str> {
    TIMESTAMP_RE.find(question).map(|m| m.as_str())
}

/// The key a question resolves through: batch id first, then timestamp.
pub fn extract_key(question: &str) -> Option<LookupKey> {
    if let Some(id) = extract_batch_id(question) {
        return Some(LookupKey::BatchId(id.to_string()));
    }
    extract_timestamp(question).map(|ts| LookupKey::Timestamp(ts.to_string()))
}
