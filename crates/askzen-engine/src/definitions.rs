use askzen_types::Subject;
use serde::{Deserialize, Serialize};

const MAX_DEFINITIONS: usize = 5;
const MAX_CONCEPTS: usize = 3;
const MAX_SEARCH_RESULTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub term: String,
    pub meaning: String,
    pub context: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub related_terms: Vec<String>,
}

impl Definition {
    pub fn new(term: impl Into<String>, meaning: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            meaning: meaning.into(),
            context: context.into(),
            examples: Vec::new(),
            related_terms: Vec::new(),
        }
    }

    fn with(mut self, examples: &[&str], related: &[&str]) -> Self {
        self.examples = examples.iter().map(|s| s.to_string()).collect();
        self.related_terms = related.iter().map(|s| s.to_string()).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionSet {
    pub definitions: Vec<Definition>,
    pub main_concepts: Vec<String>,
    pub subject: Subject,
}

/// Small glossary of study terms, keyed by lowercase term
#[derive(Debug, Clone)]
pub struct DefinitionService {
    entries: Vec<(String, Definition)>,
}

impl Default for DefinitionService {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DefinitionService {
    pub fn builtin() -> Self {
        let math = "Mathematics";
        let entries = vec![
            Definition::new("Algebra", "The branch of mathematics that solves equations using symbols for unknown numbers", math)
                .with(&["2x + 5 = 13", "y = mx + c"], &["equation", "variable", "coefficient"]),
            Definition::new("Equation", "A statement that two mathematical expressions are equal", math)
                .with(&["3x + 2 = 14", "a² + b² = c²"], &["algebra", "solution", "variable"]),
            Definition::new("Variable", "A symbol such as x or y that stands for an unknown value", math)
                .with(&["x in 2x + 3"], &["algebra", "constant"]),
            Definition::new("Photosynthesis", "The process by which plants make food from carbon dioxide and water using sunlight", "Biology")
                .with(&["6CO₂ + 6H₂O → C₆H₁₂O₆ + 6O₂"], &["chlorophyll", "glucose", "oxygen"]),
            Definition::new("Gravity", "The attractive force between objects caused by their mass", "Physics")
                .with(&["F = GMm/r²", "an apple falling from a tree"], &["force", "mass", "acceleration"]),
            Definition::new("Force", "A push or pull that changes an object's motion", "Physics")
                .with(&["F = ma"], &["newton", "mass", "acceleration"]),
            Definition::new("Energy", "The capacity to do work", "Physics")
                .with(&["½mv²", "mgh"], &["work", "power"]),
            Definition::new("Atom", "The smallest unit of an element, made of protons, neutrons and electrons", "Chemistry")
                .with(&["hydrogen: 1 proton, 1 electron"], &["proton", "neutron", "electron", "nucleus"]),
            Definition::new("Molecule", "Two or more atoms held together by chemical bonds", "Chemistry")
                .with(&["H₂O", "O₂"], &["atom", "bond"]),
            Definition::new("Cell", "The basic structural and functional unit of living things", "Biology")
                .with(&["nerve cell", "plant cell"], &["nucleus", "membrane"]),
            Definition::new("Noun", "A word naming a person, place, thing or idea", "English Grammar")
                .with(&["Ram", "Delhi", "book", "love"], &["verb", "adjective", "pronoun"]),
            Definition::new("Verb", "A word expressing an action or state of being", "English Grammar")
                .with(&["run", "is", "think"], &["noun", "tense", "subject"]),
            Definition::new("Adjective", "A word that describes a noun", "English Grammar")
                .with(&["bright", "tall"], &["noun", "adverb"]),
            Definition::new("Logic", "A systematic method for reaching valid conclusions", "Logical Reasoning")
                .with(&["If A then B"], &["reasoning", "premise", "argument"]),
            Definition::new("Syllogism", "An argument drawing a conclusion from two premises", "Logical Reasoning")
                .with(&["All men are mortal; Socrates is a man; so Socrates is mortal"], &["premise", "deduction"]),
            Definition::new("Premise", "A statement an argument takes as given", "Logical Reasoning")
                .with(&[], &["syllogism", "conclusion"]),
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|d| (d.term.to_lowercase(), d))
                .collect(),
        }
    }

    /// Glossary terms that appear in `text`
    pub fn find_in(&self, text: &str) -> Vec<Definition> {
        let lower = text.to_lowercase();
        self.entries
            .iter()
            .filter(|(key, _)| lower.contains(key.as_str()))
            .map(|(_, d)| d.clone())
            .take(MAX_DEFINITIONS)
            .collect()
    }

    /// Definitions for terms in `text`; subject staples when none appear
    pub fn extract(&self, text: &str, subject: &Subject) -> DefinitionSet {
        let mut definitions = self.find_in(text);
        if definitions.is_empty() {
            definitions = subject_terms(subject)
                .iter()
                .filter_map(|term| self.lookup(term).cloned())
                .collect();
        }
        definitions.truncate(MAX_DEFINITIONS);

        DefinitionSet {
            main_concepts: definitions
                .iter()
                .take(MAX_CONCEPTS)
                .map(|d| d.term.clone())
                .collect(),
            definitions,
            subject: subject.clone(),
        }
    }

    pub fn lookup(&self, term: &str) -> Option<&Definition> {
        let key = term.to_lowercase();
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, d)| d)
    }

    /// Match against term or meaning
    pub fn search(&self, query: &str) -> Vec<&Definition> {
        let lower = query.to_lowercase();
        self.entries
            .iter()
            .filter(|(key, d)| key.contains(&lower) || d.meaning.to_lowercase().contains(&lower))
            .map(|(_, d)| d)
            .take(MAX_SEARCH_RESULTS)
            .collect()
    }

    /// Add a definition, replacing any existing entry for the same term
    pub fn add(&mut self, definition: Definition) {
        let key = definition.term.to_lowercase();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = definition,
            None => self.entries.push((key, definition)),
        }
    }
}

fn subject_terms(subject: &Subject) -> &'static [&'static str] {
    match subject {
        Subject::Math => &["algebra", "equation", "variable"],
        Subject::Science => &["photosynthesis", "gravity", "atom"],
        Subject::SciencePhysics => &["gravity", "force", "energy"],
        Subject::ScienceChemistry => &["atom", "molecule"],
        Subject::ScienceBiology => &["photosynthesis", "cell"],
        Subject::English => &["noun", "verb", "adjective"],
        Subject::Reasoning => &["logic", "syllogism", "premise"],
        _ => &["logic"],
    }
}
