//! Crawled candidate links, with fallbacks synthesized from data already
//! extracted by the other aggregators when the discovery region is thin.

use serde_json::Value;

use super::value::string_list;

#[derive(Debug, Clone, Default)]
pub struct DiscoveryLinks {
    pub websites: Vec<String>,
    pub githubs: Vec<String>,
    pub twitters: Vec<String>,
    pub fundings: Vec<String>,
}

pub fn collect(
    discovery: Option<&Value>,
    repo_urls: &[String],
    profile_urls: &[String],
) -> DiscoveryLinks {
    let githubs = string_list(discovery.and_then(|d| d.get("githubs")));
    let twitters = string_list(discovery.and_then(|d| d.get("twitters")));

    DiscoveryLinks {
        websites: string_list(discovery.and_then(|d| d.get("websites"))),
        githubs: if githubs.is_empty() {
            repo_urls.to_vec()
        } else {
            githubs
        },
        twitters: if twitters.is_empty() {
            profile_urls.to_vec()
        } else {
            twitters
        },
        fundings: string_list(discovery.and_then(|d| d.get("fundings"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_passthrough_when_region_populated() {
        let discovery = json!({
            "websites": ["https://proj.org"],
            "githubs": ["https://github.com/proj/proj"],
            "twitters": ["https://x.com/proj"],
            "fundings": ["https://crunchbase.com/org/proj"]
        });
        let links = collect(Some(&discovery), &[], &[]);
        assert_eq!(links.websites, vec!["https://proj.org"]);
        assert_eq!(links.githubs, vec!["https://github.com/proj/proj"]);
        assert_eq!(links.twitters, vec!["https://x.com/proj"]);
        assert_eq!(links.fundings, vec!["https://crunchbase.com/org/proj"]);
    }

    #[test]
    fn test_empty_githubs_synthesized_from_repos() {
        let discovery = json!({ "githubs": [] });
        let repo_urls = vec!["https://github.com/a/b".to_string()];
        let links = collect(Some(&discovery), &repo_urls, &[]);
        assert_eq!(links.githubs, repo_urls);
    }

    #[test]
    fn test_empty_twitters_synthesized_from_accounts() {
        let profile_urls = vec!["https://x.com/a".to_string()];
        let links = collect(None, &[], &profile_urls);
        assert_eq!(links.twitters, profile_urls);
    }

    #[test]
    fn test_absent_region_defaults_to_empty_lists() {
        let links = collect(None, &[], &[]);
        assert!(links.websites.is_empty());
        assert!(links.githubs.is_empty());
        assert!(links.twitters.is_empty());
        assert!(links.fundings.is_empty());
    }
}
