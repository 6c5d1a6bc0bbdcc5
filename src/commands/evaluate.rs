//! One-shot evaluation of a guess against a target

use crate::core::{Evaluation, Word, WordError, evaluate};

/// Result of evaluating a guess
pub struct EvaluationResult {
    pub guess: Word,
    pub target: Word,
    pub evaluation: Evaluation,
}

/// Evaluate `guess` against `target` without any dictionary check
///
/// # Errors
///
/// Returns an error if either word is not exactly five letters A-Z.
pub fn evaluate_words(guess: &str, target: &str) -> Result<EvaluationResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let evaluation = evaluate(&guess, &target);

    Ok(EvaluationResult {
        guess,
        target,
        evaluation,
    })
}
