//! Threshold-betting poker game model.
//!
//! A two-player, zero-sum betting game over continuous hand strengths.
//! Both players receive a hand strength drawn uniformly from [0, 1] and
//! play a *threshold strategy*: continue with any hand at or above a fixed
//! threshold, fold everything below it. Hands are never equal (ties have
//! measure zero).
//!
//! ## Game Rules
//!
//! - The pot starts with `pot_size` chips.
//! - The opener acts first: fold or bet `bet_size` chips.
//! - If the opener folds, the caller wins the pot.
//! - If the opener bets, the caller may fold (opener wins the pot) or call
//!   `bet_size` chips, forcing a showdown for the pot plus both bets.
//!
//! ## Game Tree
//!
//! ```text
//! Opener
//! ├── Fold → Caller wins pot
//! └── Bet
//!     └── Caller
//!         ├── Fold → Opener wins pot
//!         └── Call
//!             └── Showdown
//!                 ├── Opener has better hand → Opener wins pot + bet
//!                 └── Caller has better hand → Caller wins pot + bet
//! ```
//!
//! ## Strategy Parameterization
//!
//! A strategy is a single number: the minimum hand strength a player
//! continues with. An opener playing threshold `r` folds with probability
//! `r` and bets with probability `1 - r`; a caller playing threshold `c`
//! folds to a bet with probability `c` and calls with probability `1 - c`.
//! Conditional on continuing, a player's hand is uniform on
//! [threshold, 1], which gives the showdown win probability a closed form
//! (see [`win_prob`]).
//!
//! Expected values are exact, not sampled; the [`sim`] module provides a
//! Monte Carlo cross-check of the closed forms.

use std::fmt;

pub mod sim;

/// Two thresholds closer than this are treated as equal by [`win_prob`],
/// which then returns exactly 0.5 (identical continuing ranges).
pub const THRESHOLD_EPS: f64 = 1e-9;

/// Errors from the threshold game model.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// A strategy threshold lies outside [0, 1].
    ThresholdOutOfRange {
        /// Which argument was rejected ("opener" or "caller").
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A pot or bet size is zero, negative, or non-finite.
    NonPositiveStake {
        /// Which stake was rejected ("pot_size" or "bet_size").
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ThresholdOutOfRange { name, value } => {
                write!(f, "{} threshold {} is out of range [0, 1]", name, value)
            }
            GameError::NonPositiveStake { name, value } => {
                write!(f, "{} {} must be a positive finite number", name, value)
            }
        }
    }
}

impl std::error::Error for GameError {}

fn check_threshold(name: &'static str, value: f64) -> Result<(), GameError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GameError::ThresholdOutOfRange { name, value });
    }
    Ok(())
}

/// Probability that the opener wins a showdown.
///
/// Both hands are uniform on [0, 1] before thresholding; conditional on a
/// showdown, the opener's hand is uniform on [`opener`, 1] and the
/// caller's on [`caller`, 1]. The win probability follows from the
/// geometry of the joint sample space: with `r >= c`, the favorable
/// region is a right triangle of area `(1-r)²/2` (both hands above `r`,
/// opener higher) plus a rectangle of area `(r-c)(1-r)` (caller's hand in
/// [c, r), opener wins outright), normalized by the total area
/// `(1-r)(1-c)`. The `r < c` case is the complement with roles swapped,
/// handled by a branch rather than recursion.
///
/// Near-equal thresholds short-circuit to exactly 0.5, which also covers
/// the degenerate `r = c = 1` corner where the area ratio is 0/0. A
/// threshold of exactly 1 against a strictly lower one wins with
/// probability 1 (the continuity limit of the ratio).
///
/// # Errors
/// [`GameError::ThresholdOutOfRange`] if either threshold is outside
/// [0, 1].
///
/// # Example
/// ```
/// use nash_grid::games::threshold::win_prob;
///
/// let p = win_prob(0.5, 0.2).unwrap();
/// assert!((p - 0.6875).abs() < 1e-12);
/// ```
pub fn win_prob(opener: f64, caller: f64) -> Result<f64, GameError> {
    check_threshold("opener", opener)?;
    check_threshold("caller", caller)?;

    if (opener - caller).abs() < THRESHOLD_EPS {
        return Ok(0.5);
    }

    // Compute the higher-threshold player's win probability, then flip
    // if that player is the caller.
    let (hi, lo, flipped) = if opener >= caller {
        (opener, caller, false)
    } else {
        (caller, opener, true)
    };

    let p = if hi >= 1.0 {
        // Degenerate range [1, 1]: always the best possible hand.
        1.0
    } else {
        let triangle_area = 0.5 * (1.0 - hi) * (1.0 - hi);
        let rectangle_area = (hi - lo) * (1.0 - hi);
        let total_area = (1.0 - hi) * (1.0 - lo);
        (triangle_area + rectangle_area) / total_area
    };

    Ok(if flipped { 1.0 - p } else { p })
}

/// The threshold-betting game for a fixed pot and bet size.
///
/// Both stakes are validated up front and immutable afterwards; the EV
/// evaluators are pure functions of the two strategy thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdGame {
    pot_size: f64,
    bet_size: f64,
}

impl ThresholdGame {
    /// Create a game with the given stakes.
    ///
    /// # Errors
    /// [`GameError::NonPositiveStake`] unless both stakes are positive
    /// and finite; a zero or negative stake degenerates the payoffs and
    /// is rejected rather than silently evaluated.
    pub fn new(pot_size: f64, bet_size: f64) -> Result<Self, GameError> {
        if !(pot_size.is_finite() && pot_size > 0.0) {
            return Err(GameError::NonPositiveStake {
                name: "pot_size",
                value: pot_size,
            });
        }
        if !(bet_size.is_finite() && bet_size > 0.0) {
            return Err(GameError::NonPositiveStake {
                name: "bet_size",
                value: bet_size,
            });
        }
        Ok(Self { pot_size, bet_size })
    }

    /// Chips already in the pot.
    pub fn pot_size(&self) -> f64 {
        self.pot_size
    }

    /// Chips wagered on a bet or call.
    pub fn bet_size(&self) -> f64 {
        self.bet_size
    }

    /// Probability weights of the three terminal branches:
    /// opener folds, opener bets / caller folds, bet and call (showdown).
    /// The weights partition unity.
    fn branch_weights(opener: f64, caller: f64) -> (f64, f64, f64) {
        let open_fold = opener;
        let bet_fold = (1.0 - opener) * caller;
        let showdown = (1.0 - opener) * (1.0 - caller);
        (open_fold, bet_fold, showdown)
    }

    /// Expected value for the opener at thresholds (`opener`, `caller`).
    ///
    /// Per branch: a fold pays the opener nothing, a bet that folds out
    /// the caller pays the pot, a called bet pays `pot + bet` on a won
    /// showdown and `-bet` on a lost one.
    ///
    /// # Errors
    /// Propagates [`GameError::ThresholdOutOfRange`] from [`win_prob`].
    pub fn opener_ev(&self, opener: f64, caller: f64) -> Result<f64, GameError> {
        let win = win_prob(opener, caller)?;
        let (_, bet_fold, showdown) = Self::branch_weights(opener, caller);

        Ok(bet_fold * self.pot_size
            + showdown * win * (self.pot_size + self.bet_size)
            + showdown * (1.0 - win) * -self.bet_size)
    }

    /// Expected value for the caller at thresholds (`opener`, `caller`).
    ///
    /// The mirror of [`Self::opener_ev`]: an opener fold hands the caller
    /// the pot, a caller fold pays nothing, and showdown payoffs swap.
    /// The two EVs always sum to `pot_size` (each terminal branch pays
    /// out exactly the pot across both players).
    ///
    /// # Errors
    /// Propagates [`GameError::ThresholdOutOfRange`] from [`win_prob`].
    pub fn caller_ev(&self, opener: f64, caller: f64) -> Result<f64, GameError> {
        let win = win_prob(opener, caller)?;
        let (open_fold, _, showdown) = Self::branch_weights(opener, caller);

        Ok(open_fold * self.pot_size
            + showdown * win * -self.bet_size
            + showdown * (1.0 - win) * (self.pot_size + self.bet_size))
    }
}
