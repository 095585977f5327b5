//! Deterministic rule-based ATS score

/// `round(found / total * 100)` with standard rounding to the nearest
/// integer; an empty target set scores 0.
pub fn rule_based_score(found: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (found as f64 / total as f64 * 100.0).round()
}
