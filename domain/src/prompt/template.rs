//! Prompt templates for the tutoring conversation

use crate::problem::entities::ProblemRecord;

/// Templates for the pinned instruction that opens every conversation
pub struct TutorPrompt;

impl TutorPrompt {
    /// Problem context block handed to the model: headline, description and
    /// the catalog's example test cases.
    pub fn problem_context(problem: &ProblemRecord) -> String {
        format!(
            "{}\n\n{}\n\nTest cases:\n{}\n",
            problem.headline(),
            problem.description(),
            problem.test_cases()
        )
    }

    /// System instruction for a tutoring session on `problem`
    pub fn system_instruction(problem: &ProblemRecord) -> String {
        format!(
            r#"You are a helpful coding-practice buddy that helps users solve coding problems through guidance, not by giving away complete solutions.

The user is working on this problem:
{}
Your job is to:
- Help break down the problem
- Provide hints and guidance when asked
- Review code snippets and suggest improvements
- Identify optimization opportunities
- Never give the full solution upfront
- Be encouraging and supportive
- When giving feedback on code, be specific about what works well and what could be improved"#,
            Self::problem_context(problem)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::entities::Difficulty;

    fn two_sum() -> ProblemRecord {
        ProblemRecord::new(
            1,
            "Two Sum",
            Difficulty::Easy,
            "Given an array of integers nums...",
            "[2,7,11,15]\n9",
            vec!["Array".to_string()],
        )
    }

    #[test]
    fn test_problem_context_layout() {
        let context = TutorPrompt::problem_context(&two_sum());
        assert_eq!(
            context,
            "Problem 1: Two Sum (Easy)\n\nGiven an array of integers nums...\n\nTest cases:\n[2,7,11,15]\n9\n"
        );
    }

    #[test]
    fn test_system_instruction_embeds_problem_and_rules() {
        let prompt = TutorPrompt::system_instruction(&two_sum());
        assert!(prompt.contains("Problem 1: Two Sum (Easy)"));
        assert!(prompt.contains("Never give the full solution upfront"));
        assert!(prompt.starts_with("You are a helpful coding-practice buddy"));
    }
}
