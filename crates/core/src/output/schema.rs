use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The UI-ready intelligence card for one project.
///
/// Every field is total: upstream absence becomes an explicit sentinel
/// (`"Unknown"`, `"N/A"`, `0`, or an empty list), never a missing key.
/// `crunchbase.valuation` is the single exception — there is no meaningful
/// default for "no valuation mention found", so it is omitted instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    pub project_name: String,
    /// Candidate official websites; the presenter surfaces at most three.
    pub url: Vec<String>,
    pub tech_stack: TechStack,
    pub team_insight: TeamInsight,
    pub github_stats: GithubStats,
    pub crunchbase: Crunchbase,
    pub twitter_activity: TwitterActivity,
    pub discovery: Discovery,
    pub activity_score: ActivityScore,
    pub ai_insight: String,
    /// Stamped at normalization time, never sourced from upstream.
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub blockchain: Vec<String>,
    pub infrastructure: Vec<String>,
    pub dominant_languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInsight {
    /// Repo count stands in for team size; no upstream region reports one.
    pub team_size: u64,
    /// Mirrors the GitHub activity score.
    pub activity_score: f64,
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubStats {
    pub stars: u64,
    pub forks: u64,
    pub commits: u64,
    pub contributors: u64,
    pub last_updated: String,
    pub repo_count: usize,
    pub top_languages: Vec<String>,
    pub last_commit_date: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crunchbase {
    pub funding_stage: String,
    pub total_funding: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valuation: Option<String>,
    pub investors: Vec<String>,
    pub notable_backers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterActivity {
    pub followers: u64,
    pub engagement: f64,
    pub tweets_per_week: u32,
    pub verified: bool,
    pub handles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discovery {
    pub websites: Vec<String>,
    pub githubs: Vec<String>,
    pub twitters: Vec<String>,
    pub fundings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityScore {
    pub overall: f64,
    pub github: f64,
    pub twitter: f64,
    pub community: f64,
}

impl ProjectAnalysis {
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize ProjectAnalysis to YAML")
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize ProjectAnalysis to JSON")
    }
}

impl fmt::Display for ProjectAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_yaml() {
            Ok(yaml) => write!(f, "{}", yaml),
            Err(e) => write!(f, "Error formatting ProjectAnalysis: {}", e),
        }
    }
}
