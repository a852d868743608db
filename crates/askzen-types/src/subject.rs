use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Topic tag used to pick answer templates, prompts and tips.
///
/// Unknown tags are kept in `Other`, trimmed and lowercased like known ones,
/// so a thread created under a subject this build does not know about still
/// round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subject {
    Math,
    Science,
    SciencePhysics,
    ScienceChemistry,
    ScienceBiology,
    English,
    Reasoning,
    Geography,
    Knowledge,
    Diagrams,
    Other(String),
}

impl Subject {
    /// Every subject with built-in support, in display order
    pub const KNOWN: [Subject; 10] = [
        Subject::Math,
        Subject::Science,
        Subject::SciencePhysics,
        Subject::ScienceChemistry,
        Subject::ScienceBiology,
        Subject::English,
        Subject::Reasoning,
        Subject::Geography,
        Subject::Knowledge,
        Subject::Diagrams,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Math => "math",
            Self::Science => "science",
            Self::SciencePhysics => "science_physics",
            Self::ScienceChemistry => "science_chemistry",
            Self::ScienceBiology => "science_biology",
            Self::English => "english",
            Self::Reasoning => "reasoning",
            Self::Geography => "geography",
            Self::Knowledge => "knowledge",
            Self::Diagrams => "diagrams",
            Self::Other(tag) => tag,
        }
    }

    /// `science_*` sub-tabs roll up to `science`; everything else is its own parent.
    pub fn parent(&self) -> Subject {
        match self {
            Self::SciencePhysics | Self::ScienceChemistry | Self::ScienceBiology => Self::Science,
            other => other.clone(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for Subject {
    fn default() -> Self {
        Subject::Knowledge
    }
}

impl From<&str> for Subject {
    fn from(tag: &str) -> Self {
        let normalized = tag.trim().to_lowercase();
        match normalized.as_str() {
            "math" => Self::Math,
            "science" => Self::Science,
            "science_physics" => Self::SciencePhysics,
            "science_chemistry" => Self::ScienceChemistry,
            "science_biology" => Self::ScienceBiology,
            "english" => Self::English,
            "reasoning" => Self::Reasoning,
            "geography" => Self::Geography,
            "knowledge" => Self::Knowledge,
            "diagrams" => Self::Diagrams,
            _ => Self::Other(normalized),
        }
    }
}

impl From<String> for Subject {
    fn from(tag: String) -> Self {
        Subject::from(tag.as_str())
    }
}

impl FromStr for Subject {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Subject::from(s))
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Subject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Subject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Subject::from(tag))
    }
}
