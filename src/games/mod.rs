//! Game models evaluated by the grid builder.
//!
//! A game model owns the rules and payoff math for one specific game; the
//! [`grid`](crate::grid) module sweeps a model over a discretized strategy
//! space without knowing anything about the rules. There is exactly one
//! model here:
//!
//! - [`threshold`]: the two-player threshold-betting game over continuous
//!   hand strengths, with closed-form win probability and EV, plus a
//!   Monte Carlo simulator used to validate the closed forms.

pub mod threshold;
