//! Walkthrough of one EV grid, with a Monte Carlo cross-check.

use rand::rngs::StdRng;
use rand::SeedableRng;

use nash_grid::compute_ev_grid;
use nash_grid::games::threshold::sim::{simulate_caller_ev, simulate_win_prob};
use nash_grid::games::threshold::{win_prob, ThresholdGame};

fn main() {
    let pot = 1.0;
    let bet = 1.0;
    let grid = compute_ev_grid(pot, bet, 0.05).unwrap();

    println!("Grid: {}x{} thresholds, pot {}, bet {}", grid.size(), grid.size(), pot, bet);
    println!();

    // The corner everyone can check by hand: nobody ever folds, the
    // showdown is a coin flip on pot + both bets.
    println!("caller EV at (0.00, 0.00): {:.4}", grid.matrix[0][0]);
    println!("opener EV at (0.00, 0.00): {:.4}", grid.opener_ev_at(0, 0));
    println!();

    // Caller best responses to a few opener strategies.
    for row in [0usize, 5, 10] {
        let cols: Vec<usize> = grid
            .caller_best
            .iter()
            .filter(|&&(r, _)| r == row)
            .map(|&(_, c)| c)
            .collect();
        println!(
            "opener {:.2} -> caller best response threshold(s): {:?}",
            grid.thresholds[row],
            cols.iter().map(|&c| grid.thresholds[c]).collect::<Vec<_>>()
        );
    }
    println!();

    if grid.nash.is_empty() {
        println!("No on-grid equilibrium at this step.");
    } else {
        for (opener, caller) in grid.nash_thresholds() {
            println!("Nash cell: opener {:.2}, caller {:.2}", opener, caller);
        }
    }
    println!();

    // Cross-check the closed forms by actually playing the game.
    let mut rng = StdRng::seed_from_u64(42);
    let game = ThresholdGame::new(pot, bet).unwrap();
    let (r, c) = (0.25, 0.5);

    let exact_wp = win_prob(r, c).unwrap();
    let sim_wp = simulate_win_prob(r, c, 500_000, &mut rng);
    println!("win_prob({}, {}): closed form {:.4}, simulated {:.4}", r, c, exact_wp, sim_wp);

    let exact_ev = game.caller_ev(r, c).unwrap();
    let sim_ev = simulate_caller_ev(&game, r, c, 500_000, &mut rng);
    println!("caller_ev({}, {}): closed form {:.4}, simulated {:.4}", r, c, exact_ev, sim_ev);
}
