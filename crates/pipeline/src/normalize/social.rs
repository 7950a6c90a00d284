//! Rollup of social-account signals.

use serde_json::Value;

use super::value::{bool_or_false, items, u64_or_zero};

/// Follower count above which a high-trust source is enough to call the
/// presence verified even without the platform's own flag.
const VERIFIED_FOLLOWER_FLOOR: u64 = 50_000;

/// Provenance tag of accounts fetched from the platform API directly, as
/// opposed to search-engine fallbacks.
const AUTHORITATIVE_SOURCE: &str = "twitter-api";

// No upstream signal carries engagement or posting cadence yet, so these are
// fixed placeholders rather than computed values.
const PLACEHOLDER_ENGAGEMENT: f64 = 3.5;
const PLACEHOLDER_TWEETS_PER_WEEK: u32 = 5;

#[derive(Debug, Clone, Default)]
pub struct SocialRollup {
    pub followers: u64,
    pub verified: bool,
    pub engagement: f64,
    pub tweets_per_week: u32,
    /// Usernames in listed order, duplicates preserved.
    pub handles: Vec<String>,
    /// One URL per account for the discovery fallback: explicit URL when the
    /// record carries one, else constructed from the username.
    pub profile_urls: Vec<String>,
}

pub fn aggregate(accounts: Option<&Value>) -> SocialRollup {
    let accounts = items(accounts);

    let mut rollup = SocialRollup {
        engagement: PLACEHOLDER_ENGAGEMENT,
        tweets_per_week: PLACEHOLDER_TWEETS_PER_WEEK,
        ..Default::default()
    };
    let mut flagged_verified = false;
    let mut authoritative_source = false;

    for account in accounts {
        rollup.followers += u64_or_zero(account.get("followers"));
        flagged_verified |= bool_or_false(account.get("verified"));
        authoritative_source |= account
            .get("source")
            .and_then(Value::as_str)
            .map(|s| s == AUTHORITATIVE_SOURCE)
            .unwrap_or(false);

        let username = account.get("username").and_then(Value::as_str);
        if let Some(username) = username {
            rollup.handles.push(username.to_string());
        }

        let url = account
            .get("url")
            .or_else(|| account.get("profile_url"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| username.map(|u| format!("https://x.com/{}", u)));
        if let Some(url) = url {
            rollup.profile_urls.push(url);
        }
    }

    // Either directly confirmed, or inferred from scale plus high-trust
    // provenance.
    rollup.verified = flagged_verified
        || (rollup.followers > VERIFIED_FOLLOWER_FLOOR && authoritative_source);

    rollup
}
