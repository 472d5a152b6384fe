//! Holdem specific scoring: the hand rank oracle, the pre-flop heuristic,
//! the one street look-ahead equity estimator and the cutoff table that
//! turns scores into weak/decent/strong.

/// Oracle trait and the default `Rankable` backed oracle.
mod oracle;
pub use self::oracle::{HandClass, HandRankOracle, StandardOracle, has_top_pair};

/// Chen formula for two card starting hands.
mod chen;
pub use self::chen::{ChenScorer, PreflopScorer, chen_score};

/// Configuration errors.
mod errors;
pub use self::errors::EquityConfigError;

/// The stage dispatching estimator.
mod equity;
pub use self::equity::*;

/// Call and bet cutoffs per street.
mod cutoff;
pub use self::cutoff::{CUTOFFS, CutoffPair, CutoffTable, cutoff};
