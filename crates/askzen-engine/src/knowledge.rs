use std::collections::HashMap;

use askzen_types::{Difficulty, Subject};
use serde::{Deserialize, Serialize};

use crate::templates;

/// One canned answer and the words that route to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicEntry {
    /// Topic key; its `_`-separated words are what queries are scored against
    pub key: String,
    pub content: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl TopicEntry {
    pub fn new(key: impl Into<String>, content: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            key: key.into(),
            content: content.into(),
            difficulty,
            keywords: Vec::new(),
            examples: Vec::new(),
        }
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn with_examples(mut self, examples: &[&str]) -> Self {
        self.examples = examples.iter().map(|e| e.to_string()).collect();
        self
    }

    /// Lowercased words of the topic key
    pub fn key_words(&self) -> Vec<String> {
        crate::scoring::words(&self.key)
    }
}

/// Per-subject ordered topic tables. Order matters: on equal scores the
/// earlier topic wins.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    tables: HashMap<Subject, Vec<TopicEntry>>,
}

impl KnowledgeBase {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tables shipped with AskZen
    pub fn builtin() -> Self {
        let algebra = TopicEntry::new("algebra_basics", templates::ALGEBRA_BASICS, Difficulty::Beginner)
            .with_keywords(&["algebra", "variable", "equation", "solve", "linear"])
            .with_examples(&["2x + 5 = 13", "x² - 4 = 0", "system of equations"]);
        let quadratic = TopicEntry::new("quadratic_formula", templates::QUADRATIC_FORMULA, Difficulty::Intermediate)
            .with_keywords(&["quadratic", "discriminant", "roots", "factoring"])
            .with_examples(&["x² - 5x + 6 = 0", "b² - 4ac"]);
        let geometry = TopicEntry::new("geometry_fundamentals", templates::GEOMETRY_FUNDAMENTALS, Difficulty::Beginner)
            .with_keywords(&["geometry", "triangle", "circle", "area", "perimeter", "pythagoras"])
            .with_examples(&["area of triangle", "pythagorean theorem", "circle circumference"]);

        let physics = TopicEntry::new("physics_basics", templates::PHYSICS_BASICS, Difficulty::Intermediate)
            .with_keywords(&["physics", "force", "energy", "motion", "newton", "gravity", "wave"])
            .with_examples(&["F = ma", "conservation of energy", "wave equation"]);
        let chemistry = TopicEntry::new("chemistry_basics", templates::CHEMISTRY_BASICS, Difficulty::Intermediate)
            .with_keywords(&["chemistry", "atom", "molecule", "reaction", "bond", "acid", "base"])
            .with_examples(&["atomic structure", "ionic bond", "pH scale"]);
        let biology = TopicEntry::new("biology_basics", templates::BIOLOGY_BASICS, Difficulty::Intermediate)
            .with_keywords(&["biology", "cell", "genetics", "evolution", "photosynthesis", "ecosystem"])
            .with_examples(&["cell structure", "photosynthesis equation", "food chain"]);

        let grammar = TopicEntry::new("grammar_basics", templates::GRAMMAR_BASICS, Difficulty::Beginner)
            .with_keywords(&["grammar", "tense", "noun", "verb", "sentence", "english"])
            .with_examples(&["subject verb object", "present tense", "past tense"]);

        let reasoning = TopicEntry::new("logical_reasoning", templates::LOGICAL_REASONING, Difficulty::Advanced)
            .with_keywords(&["logic", "reasoning", "critical thinking", "problem solving", "deductive", "inductive"])
            .with_examples(&["deductive reasoning", "syllogism", "critical analysis"]);

        let mut kb = Self::empty();
        kb.tables.insert(Subject::Math, vec![algebra, quadratic, geometry]);
        kb.tables.insert(
            Subject::Science,
            vec![physics.clone(), chemistry.clone(), biology.clone()],
        );
        kb.tables.insert(Subject::SciencePhysics, vec![physics]);
        kb.tables.insert(Subject::ScienceChemistry, vec![chemistry]);
        kb.tables.insert(Subject::ScienceBiology, vec![biology]);
        kb.tables.insert(Subject::English, vec![grammar]);
        kb.tables.insert(Subject::Reasoning, vec![reasoning]);
        kb
    }

    pub fn topics(&self, subject: &Subject) -> &[TopicEntry] {
        self.tables.get(subject).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.tables.keys()
    }

    /// Add custom knowledge, replacing a topic with the same key in place
    pub fn insert_topic(&mut self, subject: Subject, entry: TopicEntry) {
        let table = self.tables.entry(subject).or_default();
        match table.iter_mut().find(|t| t.key == entry.key) {
            Some(existing) => *existing = entry,
            None => table.push(entry),
        }
    }
}
