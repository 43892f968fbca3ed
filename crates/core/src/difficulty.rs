//! Difficulty scaling - shortens obstacle gaps as the score climbs.
//!
//! Difficulty ramps linearly from 0 to `OBS_MAX_GAP - OBS_MIN_GAP` while the
//! score is below [`GAME_MAX_DIFF_SCORE`], then stays put. It is subtracted
//! from the upper bound of the spawn-gap range.

use std::ops::RangeInclusive;

use crate::types::{GAME_LENGTH, GAME_MAX_DIFF_SCORE, OBS_MAX_GAP, OBS_MIN_GAP};

/// Difficulty for `score`, or `current` once the ramp has topped out.
pub fn difficulty_for_score(score: u32, current: u32) -> u32 {
    if score >= GAME_MAX_DIFF_SCORE {
        return current;
    }
    let span = OBS_MIN_GAP * GAME_LENGTH - OBS_MIN_GAP + 1;
    score * span / GAME_MAX_DIFF_SCORE
}

/// Frames to wait before the next obstacle, as an inclusive range.
///
/// The upper bound never drops below `OBS_MIN_GAP`.
pub fn spawn_gap_range(difficulty: u32) -> RangeInclusive<u32> {
    let upper = OBS_MAX_GAP.saturating_sub(difficulty).max(OBS_MIN_GAP);
    OBS_MIN_GAP..=upper
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn ramp_starts_at_zero() {
        assert_eq!(difficulty_for_score(0, 0), 0);
        assert_eq!(difficulty_for_score(2, 0), 0);
    }

    #[test]
    fn ramp_is_linear_integer_division() {
        // span = 28 * 4 - 28 + 1 = 85
        assert_eq!(difficulty_for_score(2000, 0), 42);
        assert_eq!(difficulty_for_score(3998, 0), 84);
    }

    #[test]
    fn ramp_holds_after_threshold() {
        let last = difficulty_for_score(3998, 0);
        assert_eq!(difficulty_for_score(4000, last), last);
        assert_eq!(difficulty_for_score(1_000_000, last), last);
    }

    #[test]
    fn gap_range_never_inverts() {
        for d in 0..=(OBS_MAX_GAP + 50) {
            let range = spawn_gap_range(d);
            assert!(range.start() <= range.end(), "difficulty {d}");
            assert_eq!(*range.start(), OBS_MIN_GAP);
        }
    }

    #[test]
    fn sampled_gaps_stay_in_range_for_every_difficulty() {
        let mut rng = SimpleRng::new(2024);
        for d in 0..=(OBS_MAX_GAP - OBS_MIN_GAP) {
            for _ in 0..50 {
                let gap = rng.range_inclusive(spawn_gap_range(d));
                assert!(gap >= OBS_MIN_GAP);
                assert!(gap <= OBS_MAX_GAP - d);
            }
        }
    }
}
