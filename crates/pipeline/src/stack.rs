//! Tech-stack inference from the dominant-language ranking.
//!
//! Deliberately shallow: the categories are keyed off language names alone,
//! with no other signal. The rules ARE the contract — correctness is defined
//! by them, not by ground truth about the project's real stack. Keeping this
//! behind a pure function makes the heuristic independently replaceable
//! without touching aggregation code.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackHints {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub blockchain: Vec<String>,
}

pub fn infer_stack(dominant_languages: &[String]) -> StackHints {
    let has = |name: &str| dominant_languages.iter().any(|l| l == name);

    let frontend = if has("JavaScript") || has("TypeScript") {
        vec![
            "React".to_string(),
            "Next.js".to_string(),
            "TypeScript".to_string(),
        ]
    } else {
        Vec::new()
    };

    let backend = if has("Go") {
        vec!["Go".to_string(), "Node.js".to_string()]
    } else {
        vec!["Node.js".to_string(), "Python".to_string()]
    };

    let blockchain = if has("Solidity") {
        vec!["Ethereum".to_string(), "Solidity".to_string()]
    } else {
        Vec::new()
    };

    StackHints {
        frontend,
        backend,
        blockchain,
    }
}
