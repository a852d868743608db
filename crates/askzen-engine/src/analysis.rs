use askzen_types::{Difficulty, QueryAnalysis, QuestionType};

const COMPLEX_CUES: [&str; 5] = ["complex", "advanced", "detailed", "comprehensive", "analysis"];
const BASIC_CUES: [&str; 4] = ["what", "basic", "simple", "introduction"];

/// Average reading speed used for read-time estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// Sniff difficulty, confidence and intent from the wording of a question
pub fn analyze_question(question: &str) -> QueryAnalysis {
    let lower = question.to_lowercase();

    let (difficulty, confidence) = if COMPLEX_CUES.iter().any(|w| lower.contains(w)) {
        (Difficulty::Advanced, 0.8)
    } else if BASIC_CUES.iter().any(|w| lower.contains(w)) {
        (Difficulty::Beginner, 0.9)
    } else {
        (Difficulty::Intermediate, 0.85)
    };

    QueryAnalysis {
        confidence,
        difficulty,
        question_type: QuestionType::classify(&lower),
    }
}

/// Difficulty reported with an answer: "basic"/"simple" vs "advanced"/"complex"
pub fn assess_difficulty(question: &str) -> Difficulty {
    let lower = question.to_lowercase();
    if lower.contains("basic") || lower.contains("simple") {
        Difficulty::Beginner
    } else if lower.contains("advanced") || lower.contains("complex") {
        Difficulty::Advanced
    } else {
        Difficulty::Intermediate
    }
}

/// Whole minutes to read `text`, rounded up, never zero
pub fn estimate_read_time(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_question() {
        let a = analyze_question("Give a detailed analysis of photosynthesis");
        assert_eq!(a.difficulty, Difficulty::Advanced);
        assert_eq!(a.confidence, 0.8);

        let a = analyze_question("What is an atom?");
        assert_eq!(a.difficulty, Difficulty::Beginner);
        assert_eq!(a.confidence, 0.9);
        assert_eq!(a.question_type, QuestionType::Definitional);

        let a = analyze_question("solve 2x + 5 = 13");
        assert_eq!(a.difficulty, Difficulty::Intermediate);
        assert_eq!(a.confidence, 0.85);
        assert_eq!(a.question_type, QuestionType::ProblemSolving);
    }

    #[test]
    fn test_assess_difficulty() {
        assert_eq!(assess_difficulty("a simple question"), Difficulty::Beginner);
        assert_eq!(assess_difficulty("Complex numbers"), Difficulty::Advanced);
        assert_eq!(assess_difficulty("tenses"), Difficulty::Intermediate);
    }

    #[test]
    fn test_read_time_rounds_up() {
        assert_eq!(estimate_read_time(""), 1);
        assert_eq!(estimate_read_time(&"word ".repeat(200)), 1);
        assert_eq!(estimate_read_time(&"word ".repeat(201)), 2);
        assert_eq!(estimate_read_time(&"word ".repeat(650)), 4);
    }
}
