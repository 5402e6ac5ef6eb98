use super::domain::Recommendation;

/// Scores at or above this count as a predicted pass when measuring accuracy.
/// Deliberately independent of the recommendation tiers below.
pub const PASS_THRESHOLD: f32 = 50.0;

/// Accuracies strictly above this are reported as on target.
pub const ACCURACY_TARGET: f32 = 0.7;

const EXCELLENT_FLOOR: f32 = 80.0;
const GOOD_FLOOR: f32 = 60.0;
const ACCEPTABLE_FLOOR: f32 = 40.0;

pub fn recommend(quality_score: f32) -> Recommendation {
    if quality_score >= EXCELLENT_FLOOR {
        Recommendation::Excellent
    } else if quality_score >= GOOD_FLOOR {
        Recommendation::Good
    } else if quality_score >= ACCEPTABLE_FLOOR {
        Recommendation::Acceptable
    } else {
        Recommendation::Low
    }
}

pub fn predicts_pass(quality_score: f32) -> bool {
    quality_score >= PASS_THRESHOLD
}
