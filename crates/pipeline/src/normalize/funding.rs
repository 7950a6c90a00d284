//! Funding facts plus opportunistic valuation mining.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::trace;

use super::value::{get, items, string_list, string_or};

/// A dollar amount with a million/billion scale word, e.g. "$1.2 billion".
/// Compiled once; the pattern is a constant.
fn valuation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\$\d+(?:\.\d+)?\s*(?:million|billion)").expect("valid valuation pattern")
    })
}

#[derive(Debug, Clone, Default)]
pub struct FundingFacts {
    pub funding_stage: String,
    pub total_funding: String,
    pub valuation: Option<String>,
    pub investors: Vec<String>,
    pub notable_backers: Vec<String>,
}

pub fn extract(funding: Option<&Value>) -> FundingFacts {
    let details = funding.and_then(|f| get(f, &["funding_details", "details"]));

    let total_funding = match details.and_then(|d| d.get("total_funding")) {
        // The backend sometimes normalizes to a bare USD number instead.
        None => string_or(
            details.and_then(|d| d.get("total_funding_usd")),
            "N/A",
        ),
        some => string_or(some, "N/A"),
    };

    FundingFacts {
        funding_stage: string_or(details.and_then(|d| d.get("last_round")), "Unknown"),
        total_funding,
        valuation: mine_valuation(items(
            funding.and_then(|f| get(f, &["raw_data", "serpapi", "results"])),
        )),
        investors: string_list(details.and_then(|d| d.get("investors"))),
        notable_backers: string_list(details.and_then(|d| d.get("notable_backers"))),
    }
}

/// First valuation mention across the ordered search results.
///
/// Entries are either plain snippet strings or the backend's
/// `{title, link, snippet}` objects; both are scanned.
fn mine_valuation(results: &[Value]) -> Option<String> {
    let pattern = valuation_pattern();

    for result in results {
        let text = match result {
            Value::String(s) => s.as_str(),
            Value::Object(_) => result
                .get("snippet")
                .or_else(|| result.get("title"))
                .and_then(Value::as_str)
                .unwrap_or(""),
            _ => "",
        };

        if let Some(found) = pattern.find(text) {
            trace!(valuation = found.as_str(), "mined valuation mention");
            return Some(found.as_str().to_string());
        }
    }

    None
}
