use std::collections::VecDeque;
use std::sync::Arc;

use askzen_types::Subject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeBase;
use crate::scoring::{Scorer, WordOverlapScorer};
use crate::templates;

pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.3;
pub const DEFAULT_CONTEXT_WINDOW: usize = 5;

/// How the router arrived at an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    /// A topic in the subject's table scored above the threshold
    Topic,
    /// No topic matched; subject boilerplate was used
    SubjectFallback,
    /// Neither topic nor subject boilerplate applied
    GenericFallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub content: String,
    pub kind: SelectionKind,
    pub topic: Option<String>,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextEntry {
    pub question: String,
    pub answer: String,
    pub timestamp: DateTime<Utc>,
}

/// Fixed-size window of the most recent exchanges
#[derive(Debug, Clone)]
pub struct ConversationContext {
    entries: VecDeque<ContextEntry>,
    capacity: usize,
}

impl ConversationContext {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ContextEntry {
            question: question.into(),
            answer: answer.into(),
            timestamp: Utc::now(),
        });
    }

    /// Oldest first
    pub fn entries(&self) -> impl Iterator<Item = &ContextEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Picks a canned Markdown answer for a query by scoring the subject's topics
pub struct QuestionRouter {
    knowledge: KnowledgeBase,
    scorer: Arc<dyn Scorer>,
    threshold: f64,
    context: ConversationContext,
}

impl QuestionRouter {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self {
            knowledge,
            scorer: Arc::new(WordOverlapScorer),
            threshold: DEFAULT_MATCH_THRESHOLD,
            context: ConversationContext::new(DEFAULT_CONTEXT_WINDOW),
        }
    }

    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_context_window(mut self, window: usize) -> Self {
        self.context = ConversationContext::new(window);
        self
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn knowledge_mut(&mut self) -> &mut KnowledgeBase {
        &mut self.knowledge
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ConversationContext {
        &mut self.context
    }

    pub fn clear_context(&mut self) {
        self.context.clear();
    }

    /// Choose an answer and remember the exchange in the context window.
    ///
    /// Never fails: the worst case is the generic "please clarify" template.
    pub fn select_answer(&mut self, query: &str, subject: &Subject) -> Selection {
        let selection = self.select(query, subject);
        tracing::debug!(
            subject = %subject,
            kind = ?selection.kind,
            topic = selection.topic.as_deref().unwrap_or("-"),
            score = selection.score,
            "routed question"
        );
        self.context.push(query, selection.content.clone());
        selection
    }

    fn select(&self, query: &str, subject: &Subject) -> Selection {
        let query = query.to_lowercase();

        let mut best: Option<(usize, f64)> = None;
        for (idx, topic) in self.knowledge.topics(subject).iter().enumerate() {
            let score = self.scorer.score(&query, topic);
            // strict `>` keeps the first topic on ties
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((idx, score));
            }
        }

        if let Some((idx, score)) = best {
            if score > self.threshold {
                let topic = &self.knowledge.topics(subject)[idx];
                return Selection {
                    content: topic.content.clone(),
                    kind: SelectionKind::Topic,
                    topic: Some(topic.key.clone()),
                    score,
                };
            }
        }

        let score = best.map_or(0.0, |(_, s)| s);
        match subject_generic(subject) {
            Some(content) => Selection {
                content,
                kind: SelectionKind::SubjectFallback,
                topic: None,
                score,
            },
            None => Selection {
                content: templates::GENERAL_GENERIC.to_string(),
                kind: SelectionKind::GenericFallback,
                topic: None,
                score,
            },
        }
    }
}

fn subject_generic(subject: &Subject) -> Option<String> {
    let content = match subject {
        Subject::Math => templates::MATH_GENERIC.to_string(),
        Subject::Science => templates::SCIENCE_GENERIC.to_string(),
        Subject::SciencePhysics => templates::science_subject_generic(
            "Physics",
            "- **Mechanics:** motion, forces, energy\n\
             - **Thermodynamics:** heat and temperature\n\
             - **Electromagnetism:** electricity and magnetism\n\
             - **Optics:** light and vision\n\
             - **Modern physics:** quantum mechanics, relativity",
        ),
        Subject::ScienceChemistry => templates::science_subject_generic(
            "Chemistry",
            "- **Atomic structure:** atoms and molecules\n\
             - **Bonding:** how elements combine\n\
             - **Reactions:** reactants to products\n\
             - **Organic chemistry:** carbon compounds\n\
             - **Analytical chemistry:** measuring composition",
        ),
        Subject::ScienceBiology => templates::science_subject_generic(
            "Biology",
            "- **Cell biology:** the basic unit of life\n\
             - **Genetics:** heredity and variation\n\
             - **Ecology:** organisms and environment\n\
             - **Physiology:** life processes\n\
             - **Evolution:** how species develop",
        ),
        Subject::English => templates::ENGLISH_GENERIC.to_string(),
        Subject::Reasoning => templates::REASONING_GENERIC.to_string(),
        _ => return None,
    };
    Some(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::TopicEntry;
    use crate::scoring::KeywordScorer;
    use askzen_types::Difficulty;

    fn router() -> QuestionRouter {
        QuestionRouter::new(KnowledgeBase::builtin())
    }

    #[test]
    fn test_quadratic_formula_routes_to_algebra() {
        let selection = router().select_answer("quadratic formula", &Subject::Math);
        assert_eq!(selection.kind, SelectionKind::Topic);
        assert_eq!(selection.topic.as_deref(), Some("quadratic_formula"));
        assert!(selection.content.contains("Algebra"));
    }

    #[test]
    fn test_below_threshold_falls_back_to_subject() {
        let selection = router().select_answer("help me with my homework please", &Subject::Math);
        assert_eq!(selection.kind, SelectionKind::SubjectFallback);
        assert!(selection.content.contains("Mathematics"));
    }

    #[test]
    fn test_score_must_exceed_threshold() {
        // one of four words matches "physics_basics" -> 0.25
        let selection = router().select_answer("tell me about physics", &Subject::Science);
        assert_eq!(selection.kind, SelectionKind::SubjectFallback);

        let selection = router().select_answer("physics", &Subject::Science);
        assert_eq!(selection.topic.as_deref(), Some("physics_basics"));
    }

    #[test]
    fn test_unknown_subject_gets_generic() {
        let selection = router().select_answer("quadratic formula", &Subject::Other("music".into()));
        assert_eq!(selection.kind, SelectionKind::GenericFallback);
        assert!(!selection.content.is_empty());
    }

    #[test]
    fn test_never_empty_for_any_subject() {
        let mut router = router();
        for subject in Subject::KNOWN.iter() {
            for query in ["", "???", "what is it", "algebra"] {
                assert!(!router.select_answer(query, subject).content.is_empty());
            }
        }
    }

    #[test]
    fn test_first_topic_wins_ties() {
        let mut kb = KnowledgeBase::empty();
        kb.insert_topic(Subject::Math, TopicEntry::new("first", "one", Difficulty::Beginner).with_keywords(&["shared"]));
        kb.insert_topic(Subject::Math, TopicEntry::new("second", "two", Difficulty::Beginner).with_keywords(&["shared"]));
        let mut router = QuestionRouter::new(kb).with_scorer(Arc::new(KeywordScorer));

        let selection = router.select_answer("a shared word", &Subject::Math);
        assert_eq!(selection.topic.as_deref(), Some("first"));
    }

    #[test]
    fn test_context_window_is_capped() {
        let mut router = router().with_context_window(3);
        for i in 0..5 {
            router.select_answer(&format!("question {}", i), &Subject::Math);
        }

        let questions: Vec<&str> = router.context().entries().map(|e| e.question.as_str()).collect();
        assert_eq!(questions, ["question 2", "question 3", "question 4"]);

        router.clear_context();
        assert!(router.context().is_empty());
    }
}
