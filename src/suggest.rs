use crate::profiles::ProfileStore;
use serde::Serialize;

pub const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// A positive score never maps to `Low`; that tier only comes from the
    /// no-match fallback.
    pub fn from_score(score: usize) -> Self {
        if score >= 3 {
            Confidence::High
        } else if score >= 1 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub modality: String,
    pub display_name: String,
    pub confidence: Confidence,
    pub reason: String,
    #[serde(skip)]
    pub score: usize,
}

/// Ranks modalities by how many of their trigger keywords occur in
/// `description`. Ties keep definition order.
pub fn suggest(store: &ProfileStore, description: &str) -> Vec<Suggestion> {
    let description = description.to_lowercase();

    let mut scored: Vec<Suggestion> = store
        .keyword_table()
        .map(|(profile, keywords)| {
            let matched: Vec<&str> = keywords
                .iter()
                .filter(|keyword| description.contains(keyword.as_str()))
                .map(String::as_str)
                .collect();
            let score = matched.len();
            Suggestion {
                modality: profile.id.clone(),
                display_name: profile.display_name.clone(),
                confidence: Confidence::from_score(score),
                reason: format!(
                    "Matched {score} aesthetic keywords: {}",
                    matched.join(", ")
                ),
                score,
            }
        })
        .collect();

    // stable: equal scores stay in definition order
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let suggestions: Vec<Suggestion> = scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .filter(|suggestion| suggestion.score > 0)
        .collect();

    if !suggestions.is_empty() {
        return suggestions;
    }

    let fallback = store.default_profile();
    log::debug!("no keyword matches; falling back to {}", fallback.id);
    vec![Suggestion {
        modality: fallback.id.clone(),
        display_name: fallback.display_name.clone(),
        confidence: Confidence::Low,
        reason: format!(
            "No strong matches; {} recommended as versatile default",
            fallback.display_name.to_lowercase()
        ),
        score: 0,
    }]
}
