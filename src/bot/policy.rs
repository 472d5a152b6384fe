use tracing::event;

use crate::holdem::CutoffPair;

use super::{Action, ActionKind, ActionSet, TableType};

/// Everything `decide` looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub score: f64,
    pub cutoff: CutoffPair,
    pub table_type: TableType,
    /// 0 is loose, 100 is tight.
    pub tightness: u8,
    /// 0 never bets, 100 always shoves.
    pub aggression: u8,
    pub allowed: ActionSet,
    pub min_bet: u32,
    pub current_bet: u32,
}

/// Pick one action.
///
/// Weak hands (below the call cutoff) check when they can and fold
/// otherwise. Decent hands check when they can and call otherwise. Strong
/// hands (at or above the bet cutoff) bet according to aggression:
///
/// * 0 calls, or checks when calling is not allowed.
/// * 100 bets or raises the minimum bet on fixed limit tables and a
///   hundred times that on no limit tables.
/// * Anything else bets or raises the minimum bet, doubled once per full
///   20 points of aggression on no limit tables, unless the current bet is
///   already that high in which case it calls.
///
/// With a single allowed action the answer is always `Check`. Tightness
/// does not change anything.
///
/// ```
/// use holdem_bot::bot::{Action, ActionKind, ActionSet, Decision, TableType, decide};
/// use holdem_bot::holdem::cutoff;
///
/// let decision = Decision {
///     score: 1.0,
///     cutoff: cutoff(3),
///     table_type: TableType::NoLimit,
///     tightness: 50,
///     aggression: 50,
///     allowed: [ActionKind::Call, ActionKind::Fold, ActionKind::Raise].into_iter().collect(),
///     min_bet: 10,
///     current_bet: 10,
/// };
/// assert_eq!(Action::Fold, decide(&decision));
/// ```
pub fn decide(decision: &Decision) -> Action {
    let allowed = &decision.allowed;
    let action = if allowed.len() == 1 {
        Action::Check
    } else if decision.score < decision.cutoff.call_score {
        check_or(allowed, Action::Fold)
    } else if decision.score < decision.cutoff.bet_score {
        check_or(allowed, Action::Call)
    } else {
        strong_hand(decision)
    };

    event!(
        tracing::Level::TRACE,
        score = decision.score,
        call_score = decision.cutoff.call_score,
        bet_score = decision.cutoff.bet_score,
        aggression = decision.aggression,
        %action,
        "Decided"
    );
    action
}

fn check_or(allowed: &ActionSet, otherwise: Action) -> Action {
    if allowed.contains(ActionKind::Check) {
        Action::Check
    } else {
        otherwise
    }
}

fn call_or_check(allowed: &ActionSet) -> Action {
    if allowed.contains(ActionKind::Call) {
        Action::Call
    } else {
        Action::Check
    }
}

/// Bet, otherwise raise, otherwise call, otherwise check.
fn bet_or_raise(allowed: &ActionSet, amount: u32) -> Action {
    if allowed.contains(ActionKind::Bet) {
        Action::Bet(amount)
    } else if allowed.contains(ActionKind::Raise) {
        Action::Raise(amount)
    } else {
        call_or_check(allowed)
    }
}

fn strong_hand(decision: &Decision) -> Action {
    let allowed = &decision.allowed;
    match decision.aggression {
        0 => call_or_check(allowed),
        100 => {
            let amount = match decision.table_type {
                TableType::FixedLimit => decision.min_bet,
                TableType::NoLimit => decision.min_bet.saturating_mul(100),
            };
            bet_or_raise(allowed, amount)
        }
        aggression => {
            let amount = match decision.table_type {
                TableType::FixedLimit => decision.min_bet,
                TableType::NoLimit => (0..aggression / 20)
                    .fold(decision.min_bet, |amount, _| amount.saturating_mul(2)),
            };
            if decision.current_bet < amount {
                bet_or_raise(allowed, amount)
            } else {
                call_or_check(allowed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holdem::cutoff;

    fn set(kinds: &[ActionKind]) -> ActionSet {
        kinds.iter().copied().collect()
    }

    fn decision(score: f64, aggression: u8, allowed: &[ActionKind]) -> Decision {
        Decision {
            score,
            cutoff: cutoff(3),
            table_type: TableType::NoLimit,
            tightness: 50,
            aggression,
            allowed: set(allowed),
            min_bet: 10,
            current_bet: 0,
        }
    }

    use ActionKind::*;

    #[test]
    fn test_single_action_checks() {
        for kind in [Check, Fold, Call, Bet, Raise] {
            for score in [-1.0, 2.5, 9.0] {
                assert_eq!(Action::Check, decide(&decision(score, 50, &[kind])));
            }
        }
    }

    #[test]
    fn test_weak_hand() {
        assert_eq!(Action::Check, decide(&decision(1.0, 50, &[Check, Bet])));
        assert_eq!(Action::Fold, decide(&decision(1.0, 50, &[Fold, Call, Raise])));
        // Even the most aggressive bot folds junk.
        assert_eq!(Action::Fold, decide(&decision(0.0, 100, &[Fold, Call])));
    }

    #[test]
    fn test_decent_hand() {
        assert_eq!(Action::Check, decide(&decision(2.0, 50, &[Check, Bet])));
        assert_eq!(Action::Call, decide(&decision(2.5, 50, &[Fold, Call, Raise])));
    }

    #[test]
    fn test_passive_strong_hand() {
        assert_eq!(Action::Call, decide(&decision(5.0, 0, &[Fold, Call, Raise])));
        assert_eq!(Action::Check, decide(&decision(5.0, 0, &[Check, Bet])));
    }

    #[test]
    fn test_max_aggression() {
        let mut d = decision(3.0, 100, &[Check, Bet]);
        assert_eq!(Action::Bet(1_000), decide(&d));

        d.table_type = TableType::FixedLimit;
        assert_eq!(Action::Bet(10), decide(&d));

        d.allowed = set(&[Fold, Call, Raise]);
        assert_eq!(Action::Raise(10), decide(&d));

        d.allowed = set(&[Fold, Call]);
        assert_eq!(Action::Call, decide(&d));

        d.allowed = set(&[Fold, Check]);
        assert_eq!(Action::Check, decide(&d));
    }

    #[test]
    fn test_scaled_aggression() {
        // 50 / 20 = 2 doublings.
        let d = decision(3.0, 50, &[Check, Bet]);
        assert_eq!(Action::Bet(40), decide(&d));

        let d = Decision {
            aggression: 19,
            ..d
        };
        assert_eq!(Action::Bet(10), decide(&d));

        let d = Decision {
            aggression: 99,
            table_type: TableType::FixedLimit,
            ..d
        };
        assert_eq!(Action::Bet(10), decide(&d));
    }

    #[test]
    fn test_already_bet_enough_calls() {
        let mut d = decision(4.0, 50, &[Fold, Call, Raise]);
        d.current_bet = 40;
        assert_eq!(Action::Call, decide(&d));
        d.current_bet = 39;
        assert_eq!(Action::Raise(40), decide(&d));

        d.current_bet = 40;
        d.allowed = set(&[Check, Bet]);
        assert_eq!(Action::Check, decide(&d));
    }

    #[test]
    fn test_amount_saturates() {
        let mut d = decision(4.0, 100, &[Check, Bet]);
        d.min_bet = u32::MAX / 2;
        assert_eq!(Action::Bet(u32::MAX), decide(&d));

        d.aggression = 80;
        assert_eq!(Action::Bet(u32::MAX), decide(&d));
    }

    #[test]
    fn test_tightness_is_ignored() {
        let base = decision(2.5, 40, &[Fold, Call, Raise]);
        for tightness in [0, 50, 100] {
            assert_eq!(decide(&base), decide(&Decision { tightness, ..base }));
        }
    }
}
