//! Score guardrails applied to model output before it is returned or persisted.

/// Upper bound of a single answer score and of session averages.
pub const MAX_ANSWER_SCORE: f64 = 10.0;

/// Clamps a model-supplied score into `0..=max`. NaN becomes 0.
pub fn clamp_score(score: f64, max: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, max)
}

/// Rounds to one decimal place, the precision shown on the dashboard.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of the graded answers in a session, rounded to one decimal.
/// `None` when nothing was graded.
pub fn session_average(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: f64 = scores.iter().map(|s| clamp_score(*s, MAX_ANSWER_SCORE)).sum();
    Some(round1(sum / scores.len() as f64))
}
