//! Judge prompt text

/// Task the judge is asked to perform
pub const DEFAULT_TASK: &str = "Evaluate the quality of the generated text.";

/// Criteria the judge applies
pub const DEFAULT_CRITERIA: &str =
    "Coherence (1-5): evaluate the logical flow and connection between sentences.";

/// System prompt for the scoring call
pub const JUDGE_SYSTEM_PROMPT: &str = "You will evaluate the quality of a generated text.";

/// Prompt for the chain-of-thought call
pub fn chain_of_thought(task: &str, criteria: &str) -> String {
    format!(
        "Given the task: {task}\n\
         And the evaluation criteria: {criteria}\n\
         Generate a step-by-step chain of thoughts for evaluation:"
    )
}

/// Prompt for the scoring call. `context` is the expected answer and
/// `target` the subject model's output.
pub fn scoring(task: &str, criteria: &str, reasoning: &str, context: &str, target: &str) -> String {
    format!(
        "{task}\n\
         Evaluation Criteria:\n{criteria}\n\
         Evaluation Steps:\n{reasoning}\n\
         Input Context:\n{context}\n\
         Input Target:\n{target}\n\
         Evaluation Form (score from 0 to 100 ONLY):"
    )
}
