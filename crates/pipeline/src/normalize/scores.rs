//! Verbatim copy of the composite activity scores.
//!
//! Unlike every other region, `activity_metrics` has no meaningful synthetic
//! substitute: a card without scores is not a degraded card, it is an unusable
//! one. A well-formed backend payload always carries it, so its absence is a
//! structural defect rather than a soft-default case.

use buildintel_core::output::schema::ActivityScore;
use buildintel_core::NormalizeError;
use serde_json::Value;

use super::value::f64_or_zero;

pub fn passthrough(metrics: Option<&Value>) -> Result<ActivityScore, NormalizeError> {
    let metrics = match metrics {
        Some(m) if m.is_object() => m,
        _ => {
            return Err(NormalizeError::malformed(
                "activity_metrics region missing from payload",
            ))
        }
    };

    Ok(ActivityScore {
        overall: f64_or_zero(metrics.get("overall_score")),
        github: f64_or_zero(metrics.get("github_score")),
        twitter: f64_or_zero(metrics.get("twitter_score")),
        community: f64_or_zero(metrics.get("community_score")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scores_copied_verbatim() {
        let metrics = json!({
            "overall_score": 79,
            "github_score": 82,
            "twitter_score": 75,
            "community_score": 80
        });
        let scores = passthrough(Some(&metrics)).unwrap();
        assert_eq!(scores.overall, 79.0);
        assert_eq!(scores.github, 82.0);
        assert_eq!(scores.twitter, 75.0);
        assert_eq!(scores.community, 80.0);
    }

    #[test]
    fn test_missing_region_is_structural_defect() {
        assert!(matches!(
            passthrough(None),
            Err(NormalizeError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_non_object_region_is_structural_defect() {
        assert!(passthrough(Some(&json!("82"))).is_err());
    }

    #[test]
    fn test_individual_missing_fields_default_to_zero() {
        let metrics = json!({ "github_score": 40 });
        let scores = passthrough(Some(&metrics)).unwrap();
        assert_eq!(scores.github, 40.0);
        assert_eq!(scores.overall, 0.0);
        assert_eq!(scores.twitter, 0.0);
        assert_eq!(scores.community, 0.0);
    }
}
