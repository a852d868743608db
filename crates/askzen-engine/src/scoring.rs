use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::knowledge::TopicEntry;

/// Lowercased alphanumeric words of `text`; `_` and punctuation separate words
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Relevance of a topic to a query, in `[0, 1]`
pub trait Scorer: Send + Sync {
    fn score(&self, query: &str, topic: &TopicEntry) -> f64;
}

/// Bag-of-words overlap between the query and the topic key:
/// matched key words divided by the larger of the two word counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordOverlapScorer;

impl Scorer for WordOverlapScorer {
    fn score(&self, query: &str, topic: &TopicEntry) -> f64 {
        let query_words = words(query);
        let key_words = topic.key_words();
        if query_words.is_empty() || key_words.is_empty() {
            return 0.0;
        }

        let query_set: HashSet<&str> = query_words.iter().map(String::as_str).collect();
        let matched = key_words
            .iter()
            .filter(|w| query_set.contains(w.as_str()))
            .count();
        matched as f64 / query_words.len().max(key_words.len()) as f64
    }
}

/// 1.0 when any of the topic's keywords occurs in the lowered query
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer;

impl Scorer for KeywordScorer {
    fn score(&self, query: &str, topic: &TopicEntry) -> f64 {
        let lower = query.to_lowercase();
        let hit = topic
            .keywords
            .iter()
            .any(|k| !k.is_empty() && lower.contains(&k.to_lowercase()));
        if hit {
            1.0
        } else {
            0.0
        }
    }
}

/// Highest score among several scorers
#[derive(Clone, Default)]
pub struct MaxScorer {
    scorers: Vec<Arc<dyn Scorer>>,
}

impl MaxScorer {
    pub fn new(scorers: Vec<Arc<dyn Scorer>>) -> Self {
        Self { scorers }
    }
}

impl Scorer for MaxScorer {
    fn score(&self, query: &str, topic: &TopicEntry) -> f64 {
        self.scorers
            .iter()
            .map(|s| s.score(query, topic))
            .fold(0.0, f64::max)
    }
}

/// Which built-in scorer the router uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    #[default]
    WordOverlap,
    Keywords,
    Combined,
}

impl ScoringStrategy {
    pub fn scorer(self) -> Arc<dyn Scorer> {
        match self {
            Self::WordOverlap => Arc::new(WordOverlapScorer),
            Self::Keywords => Arc::new(KeywordScorer),
            Self::Combined => Arc::new(MaxScorer::new(vec![
                Arc::new(WordOverlapScorer),
                Arc::new(KeywordScorer),
            ])),
        }
    }
}
