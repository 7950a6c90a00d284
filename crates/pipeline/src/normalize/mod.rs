//! Response normalization: one pure pass from the backend's heterogeneous
//! aggregation payload to the fixed-shape intelligence card.
//!
//! The pass is total by construction — each region aggregator degrades absent
//! or weird input to explicit defaults — with two structural preconditions:
//! a recognizable envelope and a present `activity_metrics` region. Those are
//! the only paths that return an error, and a failed pass never leaks a
//! partial record.

pub mod discovery;
pub mod envelope;
pub mod funding;
pub mod github;
pub mod scores;
pub mod social;
pub mod value;

use buildintel_core::output::schema::{
    Crunchbase, Discovery, GithubStats, ProjectAnalysis, TeamInsight, TechStack, TwitterActivity,
};
use buildintel_core::{Clock, NormalizeError};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::stack;

use self::value::{get, string_or};

#[instrument(skip_all, fields(project))]
pub fn normalize_response(
    raw: &Value,
    clock: &dyn Clock,
) -> Result<ProjectAnalysis, NormalizeError> {
    let content = envelope::unwrap_content(raw)?;

    let project_name = string_or(content.get("project"), "Unknown");
    tracing::Span::current().record("project", project_name.as_str());

    // Scores first: their absence rejects the payload before any assembly.
    let activity_score = scores::passthrough(content.get("activity_metrics"))?;

    let github = github::aggregate(get(content, &["aggregation", "github"]));
    let funding = funding::extract(get(content, &["aggregation", "funding"]));
    let social = social::aggregate(get(content, &["aggregation", "twitter"]));
    let links = discovery::collect(
        content.get("discovery"),
        &github.repo_urls,
        &social.profile_urls,
    );
    let hints = stack::infer_stack(&github.dominant_languages);

    debug!(
        repos = github.repo_count,
        languages = github.dominant_languages.len(),
        followers = social.followers,
        "normalized aggregation payload"
    );

    Ok(ProjectAnalysis {
        project_name,
        url: links.websites.clone(),
        tech_stack: TechStack {
            frontend: hints.frontend,
            backend: hints.backend,
            blockchain: hints.blockchain,
            infrastructure: github.infrastructure,
            dominant_languages: github.dominant_languages.clone(),
        },
        team_insight: TeamInsight {
            // Proxies: repo count for team size, the GitHub score for team
            // activity. No upstream region reports either directly.
            team_size: github.repo_count as u64,
            activity_score: activity_score.github,
            locations: vec!["Unknown".to_string()],
        },
        github_stats: GithubStats {
            stars: github.total_stars,
            forks: github.forks,
            commits: github.total_commits,
            contributors: github.contributors,
            last_updated: github.last_commit_date.clone(),
            repo_count: github.repo_count,
            top_languages: github.dominant_languages,
            last_commit_date: github.last_commit_date,
        },
        crunchbase: Crunchbase {
            funding_stage: funding.funding_stage,
            total_funding: funding.total_funding,
            valuation: funding.valuation,
            investors: funding.investors,
            notable_backers: funding.notable_backers,
        },
        twitter_activity: TwitterActivity {
            followers: social.followers,
            engagement: social.engagement,
            tweets_per_week: social.tweets_per_week,
            verified: social.verified,
            handles: social.handles,
        },
        discovery: Discovery {
            websites: links.websites,
            githubs: links.githubs,
            twitters: links.twitters,
            fundings: links.fundings,
        },
        activity_score,
        ai_insight: string_or(content.get("insight"), ""),
        analyzed_at: clock.now(),
    })
}
