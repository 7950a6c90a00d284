//! Repository-level rollups from the GitHub aggregation region.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use tracing::trace;

use super::value::{get, items, string_list, u64_or_zero};

const TOP_LANGUAGE_COUNT: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct GithubRollup {
    pub repo_count: usize,
    pub total_stars: u64,
    pub total_commits: u64,
    pub forks: u64,
    pub contributors: u64,
    /// The original timestamp string of the most recent parseable commit
    /// date, or `"Unknown"` when no repo yields one.
    pub last_commit_date: String,
    /// Top languages by summed byte count, most dominant first.
    pub dominant_languages: Vec<String>,
    /// Duplicate-free union of per-repo infrastructure tags.
    pub infrastructure: Vec<String>,
    /// Per-repo URLs, for the discovery fallback.
    pub repo_urls: Vec<String>,
}

pub fn aggregate(github: Option<&Value>) -> GithubRollup {
    let repos = items(github.and_then(|g| g.get("repos")));

    let mut rollup = GithubRollup {
        repo_count: repos.len(),
        total_stars: u64_or_zero(github.and_then(|g| g.get("total_stars"))),
        total_commits: u64_or_zero(github.and_then(|g| g.get("total_commits"))),
        last_commit_date: "Unknown".to_string(),
        ..Default::default()
    };

    // Ordered accumulator: first-encountered order is the tie-breaker for the
    // language ranking, so a HashMap won't do. Encounter order is document
    // order, which needs serde_json's preserve_order feature.
    let mut language_bytes: Vec<(String, u64)> = Vec::new();
    let mut latest: Option<(DateTime<Utc>, String)> = None;

    for repo in repos {
        rollup.forks += u64_or_zero(repo.get("forks"));
        rollup.contributors += u64_or_zero(get(repo, &["activity", "contributors"]));

        if let Some(languages) = repo.get("languages").and_then(Value::as_object) {
            for (language, bytes) in languages {
                let bytes = u64_or_zero(Some(bytes));
                match language_bytes.iter_mut().find(|(name, _)| name == language) {
                    Some((_, total)) => *total += bytes,
                    None => language_bytes.push((language.clone(), bytes)),
                }
            }
        }

        if let Some(date) = get(repo, &["activity", "last_commit", "date"]).and_then(Value::as_str)
        {
            match parse_instant(date) {
                Some(instant) => {
                    if latest.as_ref().map_or(true, |(best, _)| instant > *best) {
                        latest = Some((instant, date.to_string()));
                    }
                }
                None => trace!(date, "discarding unparseable last-commit date"),
            }
        }

        for tag in string_list(repo.get("infrastructure")) {
            if !rollup.infrastructure.contains(&tag) {
                rollup.infrastructure.push(tag);
            }
        }

        if let Some(url) = repo.get("url").and_then(Value::as_str) {
            rollup.repo_urls.push(url.to_string());
        }
    }

    if let Some((_, raw)) = latest {
        rollup.last_commit_date = raw;
    }

    // Stable sort keeps first-encountered order for equal byte totals.
    language_bytes.sort_by(|a, b| b.1.cmp(&a.1));
    rollup.dominant_languages = language_bytes
        .into_iter()
        .take(TOP_LANGUAGE_COUNT)
        .map(|(name, _)| name)
        .collect();

    rollup
}

/// Parse the "ISO-like" timestamps the providers emit: RFC 3339, a naive
/// datetime, or a bare date.
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_region_yields_empty_rollup() {
        let rollup = aggregate(None);
        assert_eq!(rollup.repo_count, 0);
        assert_eq!(rollup.total_stars, 0);
        assert_eq!(rollup.forks, 0);
        assert_eq!(rollup.last_commit_date, "Unknown");
        assert!(rollup.dominant_languages.is_empty());
    }

    #[test]
    fn test_totals_read_from_region() {
        let github = json!({ "total_stars": 1200, "total_commits": 5400, "repos": [] });
        let rollup = aggregate(Some(&github));
        assert_eq!(rollup.total_stars, 1200);
        assert_eq!(rollup.total_commits, 5400);
    }

    #[test]
    fn test_fork_summation_ignores_holes() {
        let github = json!({ "repos": [
            { "forks": 3, "languages": { "Go": 10 } },
            {},
            { "forks": 5 }
        ]});
        let rollup = aggregate(Some(&github));
        assert_eq!(rollup.forks, 8);
        assert_eq!(rollup.repo_count, 3);
        // The hole-y middle repo did not abort language accumulation.
        assert_eq!(rollup.dominant_languages, vec!["Go"]);
    }

    #[test]
    fn test_contributor_summation_across_repos() {
        let github = json!({ "repos": [
            { "activity": { "contributors": 12 } },
            { "activity": {} },
            { "activity": { "contributors": 8 } }
        ]});
        let rollup = aggregate(Some(&github));
        assert_eq!(rollup.contributors, 20);
    }

    #[test]
    fn test_language_ranking_sums_across_repos() {
        let github = json!({ "repos": [
            { "languages": { "TS": 100, "Go": 50 } },
            { "languages": { "Go": 80 } }
        ]});
        let rollup = aggregate(Some(&github));
        assert_eq!(rollup.dominant_languages, vec!["Go", "TS"]);
    }

    #[test]
    fn test_language_ranking_tie_keeps_first_encountered() {
        let github = json!({ "repos": [
            { "languages": { "Rust": 70, "Zig": 70 } }
        ]});
        let rollup = aggregate(Some(&github));
        assert_eq!(rollup.dominant_languages, vec!["Rust", "Zig"]);
    }

    #[test]
    fn test_language_ranking_tie_follows_document_order() {
        // Document order disagrees with alphabetical order here, so a sorted
        // map would flip the result.
        let github: Value =
            serde_json::from_str(r#"{ "repos": [ { "languages": { "Zig": 70, "Ada": 70 } } ] }"#)
                .expect("valid JSON");
        let rollup = aggregate(Some(&github));
        assert_eq!(rollup.dominant_languages, vec!["Zig", "Ada"]);
    }

    #[test]
    fn test_language_ranking_caps_at_five() {
        let github = json!({ "repos": [
            { "languages": { "A": 7, "B": 6, "C": 5, "D": 4, "E": 3, "F": 2, "G": 1 } }
        ]});
        let rollup = aggregate(Some(&github));
        assert_eq!(rollup.dominant_languages.len(), 5);
        assert_eq!(rollup.dominant_languages, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_last_commit_selection_discards_unparseable() {
        let github = json!({ "repos": [
            { "activity": { "last_commit": { "date": "2024-01-01" } } },
            { "activity": { "last_commit": { "date": "not-a-date" } } },
            { "activity": { "last_commit": { "date": "2024-06-01" } } }
        ]});
        let rollup = aggregate(Some(&github));
        assert_eq!(rollup.last_commit_date, "2024-06-01");
    }

    #[test]
    fn test_last_commit_unknown_when_none_parse() {
        let github = json!({ "repos": [
            { "activity": { "last_commit": { "date": "yesterday" } } },
            {}
        ]});
        let rollup = aggregate(Some(&github));
        assert_eq!(rollup.last_commit_date, "Unknown");
    }

    #[test]
    fn test_last_commit_handles_rfc3339_and_naive() {
        let github = json!({ "repos": [
            { "activity": { "last_commit": { "date": "2024-03-01T10:00:00+00:00" } } },
            { "activity": { "last_commit": { "date": "2024-05-01T09:30:00" } } }
        ]});
        let rollup = aggregate(Some(&github));
        assert_eq!(rollup.last_commit_date, "2024-05-01T09:30:00");
    }

    #[test]
    fn test_infrastructure_union_is_duplicate_free() {
        let github = json!({ "repos": [
            { "infrastructure": ["Docker", "Kubernetes"] },
            { "infrastructure": ["Docker", "Terraform"] }
        ]});
        let rollup = aggregate(Some(&github));
        assert_eq!(rollup.infrastructure, vec!["Docker", "Kubernetes", "Terraform"]);
    }

    #[test]
    fn test_repo_urls_skip_missing() {
        let github = json!({ "repos": [
            { "url": "https://github.com/a/b" },
            {},
            { "url": "https://github.com/c/d" }
        ]});
        let rollup = aggregate(Some(&github));
        assert_eq!(
            rollup.repo_urls,
            vec!["https://github.com/a/b", "https://github.com/c/d"]
        );
    }
}
