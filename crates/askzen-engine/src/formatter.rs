//! Wraps raw answer text with greeting, key terms, summary and tips, and
//! derives the metadata shown alongside an answer.

use askzen_types::{AnswerMetadata, QueryAnalysis, Subject};
use chrono::{DateTime, Utc};

use crate::analysis::{assess_difficulty, estimate_read_time};
use crate::definitions::Definition;

const HEADER: &str = "# 🎯 **AskZen Answer**";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseFormatter;

impl ResponseFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Render the full answer document. Output depends only on the inputs.
    pub fn format(
        &self,
        raw: &str,
        subject: &Subject,
        query: &str,
        analysis: &QueryAnalysis,
        definitions: &[Definition],
        timestamp: DateTime<Utc>,
    ) -> String {
        let mut out = String::with_capacity(raw.len() + 1024);

        out.push_str(HEADER);
        out.push_str("\n\n");
        out.push_str(greeting(subject));
        out.push_str("\n\n");
        out.push_str(&format!("> **Question:** {}\n\n", query.trim()));
        out.push_str(raw.trim_end());

        if !definitions.is_empty() {
            out.push_str("\n\n## 🔍 **Key Terms & Definitions**\n\n");
            for (i, def) in definitions.iter().enumerate() {
                out.push_str(&format!("**{}. {}:** {}\n\n", i + 1, def.term, def.meaning));
            }
        }

        out.push_str("\n\n## 📋 **Quick Summary**\n");
        out.push_str(summary(subject));
        out.push_str("\n\n");

        out.push_str("## 📊 **Answer Quality**\n");
        out.push_str(&format!(
            "- **Confidence:** {} ({}%)\n",
            quality_label(analysis.confidence),
            (analysis.confidence.clamp(0.0, 1.0) * 100.0).round() as u32
        ));
        out.push_str(&format!("- **Question type:** {}\n", analysis.question_type));
        out.push_str(&format!("- **Difficulty:** {}\n\n", analysis.difficulty));

        out.push_str("---\n\n");
        out.push_str(tips(subject));
        out.push_str("\n\n");
        out.push_str(&format!("📅 {}", timestamp.format(TIMESTAMP_FORMAT)));

        out
    }

    /// Heuristic metadata for a formatted answer
    pub fn metadata(
        &self,
        formatted: &str,
        query: &str,
        analysis: &QueryAnalysis,
        subject: &Subject,
    ) -> AnswerMetadata {
        let subject = subject.parent();
        AnswerMetadata {
            confidence: analysis.confidence.clamp(0.0, 1.0),
            difficulty: assess_difficulty(query),
            read_time_minutes: estimate_read_time(formatted),
            sources: to_strings(sources(&subject)),
            related_topics: related_topics(&subject)
                .iter()
                .take(3)
                .map(|s| s.to_string())
                .collect(),
            follow_up_questions: follow_up_questions(query, &subject),
            key_insights: to_strings(key_insights(&subject)),
            actionables: to_strings(actionables(&subject)),
        }
    }
}

fn quality_label(confidence: f64) -> &'static str {
    if confidence > 0.8 {
        "High"
    } else if confidence > 0.6 {
        "Medium"
    } else {
        "Low"
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn greeting(subject: &Subject) -> &'static str {
    match subject {
        Subject::Math => "🧮 **Mathematical Solution Ahead!** Here is a step-by-step walkthrough of your maths question:",
        Subject::Science => "🔬 **Scientific Exploration!** An evidence-based answer to your science question:",
        Subject::SciencePhysics => "⚛️ **Physics Deep Dive!** A detailed look at this physics concept:",
        Subject::ScienceChemistry => "🧪 **Chemistry Insights!** A thorough explanation of this chemistry topic:",
        Subject::ScienceBiology => "🧬 **Biology Explanation!** An overview of this biology topic:",
        Subject::English => "📚 **English Mastery!** A guide to this part of the English language:",
        Subject::Reasoning => "🧠 **Logical Analysis!** A systematic approach to your reasoning question:",
        Subject::Geography => "🌍 **Geographic Knowledge!** Exploring this geography topic:",
        Subject::Diagrams => "📊 **Diagram Breakdown!** Walking through the parts of this diagram:",
        Subject::Knowledge | Subject::Other(_) => "💡 **Knowledge Hub!** A well-researched answer to your question:",
    }
}

fn summary(subject: &Subject) -> &'static str {
    match subject.parent() {
        Subject::Math => "• Explained the concepts with practical examples\n• Laid out a step-by-step method\n• Highlighted real-world applications",
        Subject::Science => "• Explained the scientific principles\n• Grounded the answer in evidence\n• Gave practical applications and examples",
        Subject::English => "• Covered the language concept\n• Gave grammar rules with usage examples\n• Suggested ways to improve communication",
        Subject::Reasoning => "• Walked through the logical process\n• Offered critical-thinking techniques\n• Outlined problem-solving strategies",
        _ => "• Provided the core information\n• Covered more than one perspective\n• Included practical insights and examples",
    }
}

fn tips(subject: &Subject) -> &'static str {
    match subject.parent() {
        Subject::Math => "**🧮 Math Tip:** Practise a few problems daily and always check your answer by substituting it back.",
        Subject::Science => "**🔬 Science Tip:** Link each concept to something you can observe, and draw diagrams while revising.",
        Subject::English => "**📚 English Tip:** Read a little every day and write sentences using each new rule.",
        Subject::Reasoning => "**🧠 Reasoning Tip:** Time yourself on puzzles and review the pattern behind every mistake.",
        _ => "**📖 Learning Tip:** Verify facts with more than one source and apply critical thinking.",
    }
}

fn sources(subject: &Subject) -> &'static [&'static str] {
    match subject {
        Subject::Math => &["Mathematics Textbooks", "Mathematical Research Papers", "Educational Databases"],
        Subject::Science => &["Scientific Journals", "Research Publications", "Educational Resources"],
        Subject::English => &["Language Learning Resources", "Grammar Guides", "Literature References"],
        Subject::Reasoning => &["Logic and Critical Thinking Books", "Problem-Solving Methodologies", "Cognitive Science Research"],
        _ => &["Educational Resources", "Research Materials", "Expert Knowledge Base"],
    }
}

fn related_topics(subject: &Subject) -> &'static [&'static str] {
    match subject {
        Subject::Math => &["Linear Equations", "Quadratic Functions", "Coordinate Geometry", "Trigonometry"],
        Subject::Science => &["Laws of Motion", "Chemical Reactions", "Cell Biology", "Energy Conservation"],
        Subject::English => &["Tenses", "Parts of Speech", "Sentence Structure", "Active and Passive Voice"],
        Subject::Reasoning => &["Syllogisms", "Blood Relations", "Series Completion", "Coding-Decoding"],
        _ => &["Current Affairs", "World History", "Indian Constitution"],
    }
}

fn follow_up_questions(query: &str, subject: &Subject) -> Vec<String> {
    let topic = query.trim().trim_end_matches('?');
    let mut questions = vec![
        format!("Can you give another example of {}?", topic),
        format!("What are common mistakes with {}?", topic),
    ];
    questions.push(
        match subject {
            Subject::Math => "How is this used in real life?",
            Subject::Science => "What experiment demonstrates this?",
            Subject::English => "How do I use this in my writing?",
            Subject::Reasoning => "What shortcut helps in exams?",
            _ => "Where can I learn more about this?",
        }
        .to_string(),
    );
    questions
}

fn key_insights(subject: &Subject) -> &'static [&'static str] {
    match subject {
        Subject::Math => &["Break problems into small steps", "Check answers by substitution", "Patterns repeat across topics"],
        Subject::Science => &["Principles explain observations", "Units keep calculations honest", "Experiments test ideas"],
        Subject::English => &["Rules have common exceptions", "Reading builds vocabulary", "Practice makes usage natural"],
        Subject::Reasoning => &["Write premises down explicitly", "Eliminate impossible options first", "Look for the pattern before computing"],
        _ => &["Context matters", "Verify with multiple sources", "Connect new facts to what you know"],
    }
}

fn actionables(subject: &Subject) -> &'static [&'static str] {
    match subject {
        Subject::Math => &["Solve five similar problems", "Write down the formula from memory"],
        Subject::Science => &["Draw a labelled diagram", "Explain the concept to a friend"],
        Subject::English => &["Write five example sentences", "Spot the rule in today's reading"],
        Subject::Reasoning => &["Attempt a timed practice set", "Review every wrong answer"],
        _ => &["Summarise the answer in your own words", "Note one question to explore next"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askzen_types::{Difficulty, QuestionType};
    use chrono::TimeZone;

    fn analysis(confidence: f64) -> QueryAnalysis {
        QueryAnalysis {
            confidence,
            difficulty: Difficulty::Beginner,
            question_type: QuestionType::Definitional,
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_format_layout() {
        let defs = vec![Definition::new("Gravity", "Attraction between masses", "Physics")];
        let out = ResponseFormatter::new().format(
            "Gravity pulls things down.",
            &Subject::SciencePhysics,
            "what is gravity?",
            &analysis(0.9),
            &defs,
            fixed_time(),
        );

        assert!(out.starts_with(HEADER));
        assert!(out.contains("Physics Deep Dive"));
        assert!(out.contains("Gravity pulls things down."));
        assert!(out.contains("**1. Gravity:** Attraction between masses"));
        assert!(out.contains("High (90%)"));
        assert!(out.contains("definitional"));
        assert!(out.contains("Science Tip"));
        assert!(out.ends_with("📅 2024-03-14 09:30 UTC"));
    }

    #[test]
    fn test_format_is_deterministic() {
        let f = ResponseFormatter::new();
        let a = f.format("x", &Subject::Math, "q", &analysis(0.7), &[], fixed_time());
        let b = f.format("x", &Subject::Math, "q", &analysis(0.7), &[], fixed_time());
        assert_eq!(a, b);
        assert!(a.contains("Medium (70%)"));
        assert!(!a.contains("Key Terms"));
    }

    #[test]
    fn test_quality_labels() {
        assert_eq!(quality_label(0.85), "High");
        assert_eq!(quality_label(0.8), "Medium");
        assert_eq!(quality_label(0.6), "Low");
    }

    #[test]
    fn test_metadata() {
        let text = "word ".repeat(450);
        let meta = ResponseFormatter::new().metadata(
            &text,
            "a simple question about atoms",
            &analysis(0.9),
            &Subject::ScienceChemistry,
        );

        assert_eq!(meta.difficulty, Difficulty::Beginner);
        assert_eq!(meta.read_time_minutes, 3);
        assert_eq!(meta.confidence, 0.9);
        assert_eq!(meta.sources[0], "Scientific Journals");
        assert_eq!(meta.related_topics.len(), 3);
        assert_eq!(meta.key_insights.len(), 3);
        assert_eq!(meta.follow_up_questions.len(), 3);
        assert!(!meta.actionables.is_empty());
    }
}
