use std::fmt;

/// Betting structure of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableType {
    FixedLimit,
    NoLimit,
}

/// What a bot does when it is asked to act. Bet and raise carry the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Check,
    Fold,
    Call,
    Bet(u32),
    Raise(u32),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Check => ActionKind::Check,
            Action::Fold => ActionKind::Fold,
            Action::Call => ActionKind::Call,
            Action::Bet(_) => ActionKind::Bet,
            Action::Raise(_) => ActionKind::Raise,
        }
    }

    pub fn amount(&self) -> Option<u32> {
        match self {
            Action::Bet(amount) | Action::Raise(amount) => Some(*amount),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Check => write!(f, "Check"),
            Action::Fold => write!(f, "Fold"),
            Action::Call => write!(f, "Call"),
            Action::Bet(amount) => write!(f, "Bet {amount}"),
            Action::Raise(amount) => write!(f, "Raise {amount}"),
        }
    }
}

/// An action without its amount. This is what the game offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Check = 0,
    Fold = 1,
    Call = 2,
    Bet = 3,
    Raise = 4,
}

const ALL_KINDS: [ActionKind; 5] = [
    ActionKind::Check,
    ActionKind::Fold,
    ActionKind::Call,
    ActionKind::Bet,
    ActionKind::Raise,
];

/// The set of action kinds allowed at a decision point.
///
/// ```
/// use holdem_bot::bot::{ActionKind, ActionSet};
///
/// let allowed: ActionSet = [ActionKind::Check, ActionKind::Bet].into_iter().collect();
/// assert!(allowed.contains(ActionKind::Bet));
/// assert!(!allowed.contains(ActionKind::Fold));
/// assert_eq!(2, allowed.len());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActionSet {
    bits: u8,
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        ALL_KINDS.into_iter().collect()
    }

    pub fn insert(&mut self, kind: ActionKind) {
        self.bits |= 1 << kind as u8;
    }

    pub fn remove(&mut self, kind: ActionKind) {
        self.bits &= !(1 << kind as u8);
    }

    pub fn contains(&self, kind: ActionKind) -> bool {
        self.bits & (1 << kind as u8) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = ActionKind> + '_ {
        ALL_KINDS.into_iter().filter(|k| self.contains(*k))
    }
}

impl FromIterator<ActionKind> for ActionSet {
    fn from_iter<T: IntoIterator<Item = ActionKind>>(iter: T) -> Self {
        let mut set = Self::new();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl fmt::Debug for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
