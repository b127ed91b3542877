//! Fractional odds from a pair of team scores.


/// Team scores land in the hundreds of thousands; Elo-style logistic
/// curves want numbers a few orders of magnitude smaller.
const SCORE_SCALE: f64 = 1000.0;

/// Logistic spread: a normalized-score gap of 50 swings the win
/// probability by one power of ten.
const ELO_DIVISOR: f64 = 50.0;

/// Convert two team scores into a fractional odds string for the first
/// team, `"X:1"` when favored and `"1:X"` otherwise.
///
/// Win probability comes from a logistic curve over the normalized score
/// difference. When the curve saturates at exactly 1.0 the odds ratio
/// would divide by zero, so `"1000:1"` is returned as a cap.
pub fn fractional_odds(score_a: f64, score_b: f64) -> String {
    let diff = score_b / SCORE_SCALE - score_a / SCORE_SCALE;
    let probability = 1.0 / (1.0 + 10f64.powf(diff / ELO_DIVISOR));

    if probability == 1.0 {
        return "1000:1".to_string();
    }

    let odds = probability / (1.0 - probability);
    if odds >= 1.0 {
        format!("{odds:.1}:1")
    } else {
        format!("1:{:.1}", 1.0 / odds)
    }
}
