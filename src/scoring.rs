use crate::types::answers::AnswerSet;
use crate::types::question::QuestionBank;
use crate::types::report::{Band, ScoreReport};
use chrono::Utc;

pub fn is_complete(answers: &AnswerSet, bank: &QuestionBank) -> bool {
    (0..bank.len()).all(|index| answers.is_answered(index))
}

/// One-based question numbers still missing a selection.
pub fn unanswered(answers: &AnswerSet, bank: &QuestionBank) -> Vec<usize> {
    (0..bank.len())
        .filter(|index| !answers.is_answered(*index))
        .map(|index| index + 1)
        .collect()
}

// Sums over the fixed index range; partial answer sets yield partial sums,
// which callers must gate behind is_complete before showing as a result.
pub fn total_score(answers: &AnswerSet, bank: &QuestionBank) -> u32 {
    (0..bank.len())
        .filter_map(|index| {
            let key = answers.get(index)?;
            bank.get(index)?.option(key).map(|option| option.score)
        })
        .sum()
}

pub fn percentage(total: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (f64::from(total) / f64::from(max)) * 100.0
}

// The band intervals reproduce the original questionnaire verbatim: both
// explicit ranges are closed, so values in (48, 50) and above 73 fall through
// to High along with everything below 25.
pub fn classify(percentage: f64) -> Band {
    if (25.0..=48.0).contains(&percentage) {
        Band::Low
    } else if (50.0..=73.0).contains(&percentage) {
        Band::Moderate
    } else {
        Band::High
    }
}

/// Builds the final report, or None when the submission gate fails because
/// not every question has an answer.
pub fn build_report(answers: &AnswerSet, bank: &QuestionBank) -> Option<ScoreReport> {
    if !is_complete(answers, bank) {
        return None;
    }
    let total = total_score(answers, bank);
    let max = bank.max_score();
    let percentage = percentage(total, max);
    Some(ScoreReport {
        total,
        max,
        percentage,
        band: classify(percentage),
        generated_at: Utc::now(),
    })
}
