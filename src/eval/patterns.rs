//! Pattern scores for Gomoku evaluation
//!
//! These constants define the scoring weights for line patterns through a
//! single cell. A pattern is described by the number of own stones adjacent
//! to the cell along one line and how many of its two ends are blocked.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Four or more own stones through the cell: a made five
    pub const FOUR: f64 = 10_000.0;

    /// Open three: _OOO_
    pub const OPEN_THREE: f64 = 1_000.0;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: f64 = 100.0;

    /// Open two: _OO_
    pub const OPEN_TWO: f64 = 100.0;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: f64 = 10.0;

    /// Open one: _O_
    pub const OPEN_ONE: f64 = 10.0;
    /// Closed one: XO_ or _OX
    pub const CLOSED_ONE: f64 = 1.0;

    /// Any directional score at or above this is a forced win for the mover
    pub const WIN_THRESHOLD: f64 = Self::FOUR;

    /// Opponent patterns at or above this earn a defensive bonus
    pub const THREAT_THRESHOLD: f64 = Self::OPEN_THREE;

    /// Weight of the defensive bonus relative to the opponent's pattern score
    pub const DEFENSE_WEIGHT: f64 = 0.8;

    /// Weight of the center-proximity term
    pub const CENTER_WEIGHT: f64 = 10.0;
}

/// Score a combined run by own-stone count and blocked-end count.
///
/// Runs of four or more score the same regardless of blocking; a run blocked
/// on both ends is dead.
pub fn pattern_score(own_count: u32, blocked: u32) -> f64 {
    match (own_count, blocked) {
        (4.., _) => PatternScore::FOUR,
        (3, 0) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 0) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (1, 0) => PatternScore::OPEN_ONE,
        (1, 1) => PatternScore::CLOSED_ONE,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table() {
        assert_eq!(pattern_score(4, 0), 10_000.0);
        assert_eq!(pattern_score(4, 1), 10_000.0);
        assert_eq!(pattern_score(4, 2), 10_000.0);
        assert_eq!(pattern_score(6, 2), 10_000.0);

        assert_eq!(pattern_score(3, 0), 1_000.0);
        assert_eq!(pattern_score(3, 1), 100.0);
        assert_eq!(pattern_score(3, 2), 0.0);

        assert_eq!(pattern_score(2, 0), 100.0);
        assert_eq!(pattern_score(2, 1), 10.0);
        assert_eq!(pattern_score(2, 2), 0.0);

        assert_eq!(pattern_score(1, 0), 10.0);
        assert_eq!(pattern_score(1, 1), 1.0);
        assert_eq!(pattern_score(1, 2), 0.0);
    }

    #[test]
    fn test_no_stones_scores_zero() {
        for blocked in 0..=2 {
            assert_eq!(pattern_score(0, blocked), 0.0);
        }
    }

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
        assert!(PatternScore::OPEN_ONE > PatternScore::CLOSED_ONE);
    }

    #[test]
    fn test_only_open_three_or_better_is_a_threat() {
        assert!(pattern_score(3, 0) >= PatternScore::THREAT_THRESHOLD);
        assert!(pattern_score(3, 1) < PatternScore::THREAT_THRESHOLD);
        assert!(pattern_score(2, 0) < PatternScore::THREAT_THRESHOLD);
    }
}
