//! Bots are the automatic players at a table. The game drives them through
//! the `Bot` callbacks and asks them for an `Action` when it is their turn.
mod action;
mod ai_bot;
mod errors;
mod policy;

use tracing::event;

use crate::core::Card;

pub use action::{Action, ActionKind, ActionSet, TableType};
pub use ai_bot::{AiBot, AiBotBuilder, BotPhase, BotSession};
pub use errors::BotError;
pub use policy::{Decision, decide};

/// What a bot is told about a player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Player {
    pub name: String,
    pub cash: u32,
    /// Only the cards visible to the bot receiving the update.
    pub cards: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    pub fn with_cash(mut self, cash: u32) -> Self {
        self.cash = cash;
        self
    }
}

/// The callbacks a game makes on a seated bot.
///
/// Only `act` has to produce anything. The notifications a bot doesn't
/// care about can be left to the default implementations, which just log
/// them.
pub trait Bot {
    fn joined_table(&mut self, table_type: TableType, big_blind: u32, players: &[Player]);

    fn message_received(&mut self, message: &str) {
        event!(tracing::Level::TRACE, message, "Ignoring message");
    }

    fn hand_started(&mut self, dealer: &Player);

    fn actor_rotated(&mut self, actor: &Player) {
        event!(tracing::Level::TRACE, actor = %actor.name, "Ignoring actor rotation");
    }

    fn board_updated(&mut self, board: &[Card], bet: u32, pot: u32) {
        event!(
            tracing::Level::TRACE,
            cards = board.len(),
            bet,
            pot,
            "Ignoring board update"
        );
    }

    fn player_updated(&mut self, player: &Player);

    fn player_acted(&mut self, player: &Player) {
        event!(tracing::Level::TRACE, player = %player.name, "Ignoring player action");
    }

    /// Choose an action.
    ///
    /// `board` holds the community cards dealt so far.
    fn act(
        &mut self,
        min_bet: u32,
        current_bet: u32,
        allowed: &ActionSet,
        board: &[Card],
    ) -> Result<Action, BotError>;
}
