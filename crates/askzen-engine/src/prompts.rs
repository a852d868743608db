use askzen_types::Subject;

pub const BASE_PROMPT: &str = "You are AskZen, a patient study assistant for school and college students. \
Answer accurately and clearly. Use Markdown headings, short paragraphs and bullet points. \
Work through problems step by step, give concrete examples, and close with a short summary. \
If a question is ambiguous, state your assumption before answering.";

const MATH_PROMPT: &str = "Subject: Mathematics. Show every step of the working, name the rule used at each step, \
and verify the final answer. Prefer exact values and mention common mistakes.";

const SCIENCE_PROMPT: &str = "Subject: Science. Explain the underlying principle first, then the evidence and \
real-world applications. Include formulas with units where relevant.";

const PHYSICS_PROMPT: &str = "Subject: Physics. Start from the governing law, define every symbol with its SI unit, \
and connect the result to an everyday observation.";

const CHEMISTRY_PROMPT: &str = "Subject: Chemistry. Use balanced equations, name reaction types, and relate \
behaviour to atomic structure and bonding.";

const BIOLOGY_PROMPT: &str = "Subject: Biology. Describe structures before processes, use correct terminology, \
and link each process to its function in the organism.";

const ENGLISH_PROMPT: &str = "Subject: English. State the grammar rule, give correct and incorrect examples, \
and suggest how to practise it in writing and speech.";

const REASONING_PROMPT: &str = "Subject: Logical reasoning. Lay out premises explicitly, reason one step at a time, \
and point out shortcuts useful in competitive exams.";

const GEOGRAPHY_PROMPT: &str = "Subject: Geography. Anchor explanations to places and maps, and connect physical \
processes to their human impact.";

const DIAGRAMS_PROMPT: &str = "Subject: Diagrams. Describe the diagram part by part, label each component, \
and explain how the parts relate.";

const KNOWLEDGE_PROMPT: &str = "Subject: General knowledge. Give well-sourced facts, context, and why the topic matters.";

/// Subject-specific instructions appended to [`BASE_PROMPT`]
pub fn subject_prompt(subject: &Subject) -> &'static str {
    match subject {
        Subject::Math => MATH_PROMPT,
        Subject::Science => SCIENCE_PROMPT,
        Subject::SciencePhysics => PHYSICS_PROMPT,
        Subject::ScienceChemistry => CHEMISTRY_PROMPT,
        Subject::ScienceBiology => BIOLOGY_PROMPT,
        Subject::English => ENGLISH_PROMPT,
        Subject::Reasoning => REASONING_PROMPT,
        Subject::Geography => GEOGRAPHY_PROMPT,
        Subject::Diagrams => DIAGRAMS_PROMPT,
        Subject::Knowledge | Subject::Other(_) => KNOWLEDGE_PROMPT,
    }
}

pub fn system_prompt(subject: &Subject) -> String {
    format!("{}\n\n{}", BASE_PROMPT, subject_prompt(subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_combines_base_and_subject() {
        let prompt = system_prompt(&Subject::Math);
        assert!(prompt.starts_with(BASE_PROMPT));
        assert!(prompt.ends_with(MATH_PROMPT));
    }

    #[test]
    fn test_unknown_subject_uses_knowledge_prompt() {
        let prompt = system_prompt(&Subject::from("astrology"));
        assert!(prompt.ends_with(KNOWLEDGE_PROMPT));
    }
}
