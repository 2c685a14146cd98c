//! Monte Carlo cross-checks for the closed-form model.
//!
//! These simulators play the actual game (uniform hand draws, fold/bet/
//! call branches, a showdown comparison) and average the outcomes. They
//! exist to validate [`win_prob`](super::win_prob) and the EV evaluators
//! against something that cannot share their algebra, and to make the
//! demo output concrete. Not used on any computation path.

use rand::Rng;

use super::ThresholdGame;

/// Estimate the opener's showdown win probability by sampling hands
/// uniformly from each player's continuing range.
///
/// Thresholds must be in [0, 1] and `samples` nonzero; this is a
/// validation helper and only debug-asserts its inputs.
pub fn simulate_win_prob<R: Rng>(opener: f64, caller: f64, samples: u64, rng: &mut R) -> f64 {
    debug_assert!((0.0..=1.0).contains(&opener));
    debug_assert!((0.0..=1.0).contains(&caller));
    debug_assert!(samples > 0);

    let mut wins = 0u64;
    for _ in 0..samples {
        let opener_hand = opener + (1.0 - opener) * rng.gen::<f64>();
        let caller_hand = caller + (1.0 - caller) * rng.gen::<f64>();
        if opener_hand > caller_hand {
            wins += 1;
        }
    }
    wins as f64 / samples as f64
}

/// Estimate the caller's EV by playing out full hands.
///
/// Each sample draws both hand strengths uniformly from [0, 1] and walks
/// the tree: the opener folds below their threshold (caller takes the
/// pot), otherwise bets; the caller folds below their threshold
/// (nothing), otherwise calls to a showdown for the pot plus both bets.
pub fn simulate_caller_ev<R: Rng>(
    game: &ThresholdGame,
    opener: f64,
    caller: f64,
    samples: u64,
    rng: &mut R,
) -> f64 {
    debug_assert!((0.0..=1.0).contains(&opener));
    debug_assert!((0.0..=1.0).contains(&caller));
    debug_assert!(samples > 0);

    let pot = game.pot_size();
    let bet = game.bet_size();

    let mut total = 0.0;
    for _ in 0..samples {
        let opener_hand = rng.gen::<f64>();
        if opener_hand < opener {
            total += pot;
            continue;
        }
        let caller_hand = rng.gen::<f64>();
        if caller_hand < caller {
            continue;
        }
        total += if caller_hand > opener_hand {
            pot + bet
        } else {
            -bet
        };
    }
    total / samples as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::threshold::win_prob;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLES: u64 = 200_000;

    #[test]
    fn test_simulated_win_prob_matches_closed_form() {
        let mut rng = StdRng::seed_from_u64(42);
        for &(r, c) in &[(0.0, 0.0), (0.5, 0.2), (0.2, 0.5), (0.7, 0.7), (0.9, 0.1)] {
            let exact = win_prob(r, c).unwrap();
            let estimate = simulate_win_prob(r, c, SAMPLES, &mut rng);
            assert!(
                (estimate - exact).abs() < 0.01,
                "win_prob({}, {}): exact {} vs simulated {}",
                r,
                c,
                exact,
                estimate
            );
        }
    }

    #[test]
    fn test_simulated_caller_ev_matches_closed_form() {
        let mut rng = StdRng::seed_from_u64(7);
        let game = ThresholdGame::new(3.0, 2.0).unwrap();
        for &(r, c) in &[(0.0, 0.0), (0.3, 0.6), (0.6, 0.3), (0.25, 0.5)] {
            let exact = game.caller_ev(r, c).unwrap();
            let estimate = simulate_caller_ev(&game, r, c, SAMPLES, &mut rng);
            assert!(
                (estimate - exact).abs() < 0.05,
                "caller_ev({}, {}): exact {} vs simulated {}",
                r,
                c,
                exact,
                estimate
            );
        }
    }
}
