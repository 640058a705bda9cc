//! Elo rating updates applied when a game is finalized.
//!
//! Standard logistic expected score with a fixed K-factor. Each function
//! returns the first player's new rating given both players' ratings before
//! the game.

pub const K_FACTOR: f64 = 32.0;

#[inline]
fn expected_score(elo: i32, opponent_elo: i32) -> f64 {
    1.0 / (1.0 + 10f64.powf(f64::from(opponent_elo - elo) / 400.0))
}

#[inline]
pub fn calculate_elo_after_win(elo: i32, opponent_elo: i32) -> i32 {
    let change = (K_FACTOR * (1.0 - expected_score(elo, opponent_elo))).round() as i32;
    elo + change
}

#[inline]
pub fn calculate_elo_after_loss(elo: i32, opponent_elo: i32) -> i32 {
    let change = (K_FACTOR * (0.0 - expected_score(elo, opponent_elo))).round() as i32;
    elo + change
}

#[inline]
pub fn calculate_elo_after_draw(elo: i32, opponent_elo: i32) -> i32 {
    let change = (K_FACTOR * (0.5 - expected_score(elo, opponent_elo))).round() as i32;
    elo + change
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_ratings_shift_by_half_the_k_factor() {
        assert_eq!(calculate_elo_after_win(1500, 1500), 1516);
        assert_eq!(calculate_elo_after_loss(1500, 1500), 1484);
        assert_eq!(calculate_elo_after_draw(1500, 1500), 1500);
    }

    #[test]
    fn upsets_move_more_points_than_expected_wins() {
        let underdog_gain = calculate_elo_after_win(1400, 1800) - 1400;
        let favourite_gain = calculate_elo_after_win(1800, 1400) - 1800;
        assert!(underdog_gain > favourite_gain);
        assert!(favourite_gain >= 1);
    }

    #[test]
    fn equal_rating_results_are_zero_sum() {
        let winner_delta = calculate_elo_after_win(1500, 1500) - 1500;
        let loser_delta = calculate_elo_after_loss(1500, 1500) - 1500;
        assert_eq!(winner_delta + loser_delta, 0);
    }
}
