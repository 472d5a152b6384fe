use thiserror::Error;

/// Rejected equity or cutoff configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquityConfigError {
    #[error("Flop rate {0} must be strictly between 0 and 1")]
    InvalidFlopRate(f64),
    #[error("River rate {0} must be strictly between 0 and 1")]
    InvalidRiverRate(f64),
    #[error("Call score {call_score} above bet score {bet_score} with {community_cards} on board")]
    InvertedCutoff {
        community_cards: usize,
        call_score: f64,
        bet_score: f64,
    },
}
