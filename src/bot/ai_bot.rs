use tracing::event;

use crate::core::{Card, CardSet, NUM_HOLE_CARDS};
use crate::holdem::{
    ChenScorer, CutoffTable, EquityConfig, EquityEstimator, HandRankOracle, PreflopScorer,
    StandardOracle,
};

use super::{Action, ActionSet, Bot, BotError, Decision, Player, TableType, decide};

/// Where the bot is in the life of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotPhase {
    /// No hand has started.
    Idle,
    /// A hand started but its hole cards haven't been seen.
    AwaitingCards,
    /// Hole cards are known, ready to act.
    Ready,
}

/// What the bot remembers between callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BotSession {
    pub table_type: Option<TableType>,
    pub in_hand: bool,
    pub hole_cards: Option<[Card; NUM_HOLE_CARDS]>,
}

impl BotSession {
    pub fn phase(&self) -> BotPhase {
        match (self.in_hand, self.hole_cards) {
            (false, _) => BotPhase::Idle,
            (true, None) => BotPhase::AwaitingCards,
            (true, Some(_)) => BotPhase::Ready,
        }
    }

    fn start_hand(&mut self) {
        self.in_hand = true;
        self.hole_cards = None;
    }
}

fn check_parameters(tightness: u32, aggression: u32) -> Result<(u8, u8), BotError> {
    let tightness = u8::try_from(tightness)
        .ok()
        .filter(|t| *t <= 100)
        .ok_or(BotError::InvalidTightness(tightness))?;
    let aggression = u8::try_from(aggression)
        .ok()
        .filter(|a| *a <= 100)
        .ok_or(BotError::InvalidAggression(aggression))?;
    Ok((tightness, aggression))
}

/// A bot that scores its cards with an `EquityEstimator` and plays by the
/// cutoff table.
///
/// ```
/// use holdem_bot::bot::{Action, ActionKind, ActionSet, AiBot, Bot, Player, TableType};
/// use holdem_bot::core::Card;
///
/// let mut bot = AiBot::new(50, 100).unwrap();
/// bot.joined_table(TableType::NoLimit, 10, &[]);
/// bot.hand_started(&Player::new("dealer"));
///
/// let me = Player::new("bot").with_cards(vec![
///     Card::try_from("As").unwrap(),
///     Card::try_from("Ac").unwrap(),
/// ]);
/// bot.player_updated(&me);
///
/// let allowed: ActionSet = [ActionKind::Check, ActionKind::Bet].into_iter().collect();
/// assert_eq!(Action::Bet(1_000), bot.act(10, 0, &allowed, &[]).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct AiBot<O = StandardOracle, P = ChenScorer> {
    tightness: u8,
    aggression: u8,
    estimator: EquityEstimator<O, P>,
    cutoffs: CutoffTable,
    name: Option<String>,
    session: BotSession,
}

impl AiBot {
    /// A bot with the default estimator and cutoffs. Both parameters must
    /// be between 0 and 100.
    pub fn new(tightness: u32, aggression: u32) -> Result<Self, BotError> {
        AiBotBuilder::default()
            .tightness(tightness)
            .aggression(aggression)
            .build()
    }
}

impl<O, P> AiBot<O, P>
where
    O: HandRankOracle,
    P: PreflopScorer,
{
    /// A bot with a custom estimator, for example one with a different
    /// oracle.
    pub fn with_estimator(
        tightness: u32,
        aggression: u32,
        estimator: EquityEstimator<O, P>,
        cutoffs: CutoffTable,
    ) -> Result<Self, BotError> {
        let (tightness, aggression) = check_parameters(tightness, aggression)?;
        estimator.config().validate()?;
        cutoffs.validate()?;
        Ok(Self {
            tightness,
            aggression,
            estimator,
            cutoffs,
            name: None,
            session: BotSession::default(),
        })
    }

    /// Only take hole cards from updates about the player with this name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn tightness(&self) -> u8 {
        self.tightness
    }

    pub fn aggression(&self) -> u8 {
        self.aggression
    }

    pub fn session(&self) -> &BotSession {
        &self.session
    }

    pub fn phase(&self) -> BotPhase {
        self.session.phase()
    }

    /// Hole cards followed by the board.
    fn visible_cards(&self, board: &[Card]) -> Result<CardSet, BotError> {
        let hole = self.session.hole_cards.ok_or(BotError::HoleCardsUnknown)?;
        Ok(CardSet::new_with_cards(
            hole.into_iter().chain(board.iter().copied()),
        )?)
    }
}

impl<O, P> Bot for AiBot<O, P>
where
    O: HandRankOracle,
    P: PreflopScorer,
{
    fn joined_table(&mut self, table_type: TableType, big_blind: u32, players: &[Player]) {
        event!(
            tracing::Level::DEBUG,
            ?table_type,
            big_blind,
            players = players.len(),
            "Joined table"
        );
        self.session.table_type = Some(table_type);
    }

    fn hand_started(&mut self, dealer: &Player) {
        event!(tracing::Level::TRACE, dealer = %dealer.name, "Hand started");
        self.session.start_hand();
    }

    /// The first snapshot of the hand showing exactly two cards is taken as
    /// this bot's hole cards. When the bot is named only its own snapshot
    /// counts. Later snapshots, such as cards shown at showdown, are
    /// ignored until the next hand starts.
    fn player_updated(&mut self, player: &Player) {
        if self.session.phase() != BotPhase::AwaitingCards {
            return;
        }
        if self.name.as_deref().is_some_and(|name| name != player.name) {
            return;
        }
        if let [first, second] = player.cards.as_slice() {
            event!(
                tracing::Level::TRACE,
                player = %player.name,
                %first,
                %second,
                "Cached hole cards"
            );
            self.session.hole_cards = Some([*first, *second]);
        }
    }

    fn act(
        &mut self,
        min_bet: u32,
        current_bet: u32,
        allowed: &ActionSet,
        board: &[Card],
    ) -> Result<Action, BotError> {
        // Nothing to decide, so nothing needs to be known.
        if allowed.len() == 1 {
            return Ok(Action::Check);
        }

        let table_type = self.session.table_type.ok_or(BotError::NotSeated)?;
        let cards = self.visible_cards(board)?;
        let cutoff = self.cutoffs.lookup(board.len());
        let score = self.estimator.eval(&cards);
        event!(tracing::Level::DEBUG, %cards, score, "Scored hand");

        Ok(decide(&Decision {
            score,
            cutoff,
            table_type,
            tightness: self.tightness,
            aggression: self.aggression,
            allowed: *allowed,
            min_bet,
            current_bet,
        }))
    }
}

/// Builder for `AiBot` with the default oracle and pre-flop scorer.
///
/// Tightness and aggression default to 50.
///
/// ```
/// use holdem_bot::bot::AiBotBuilder;
/// use holdem_bot::holdem::EquityConfig;
///
/// let bot = AiBotBuilder::default()
///     .aggression(80)
///     .equity_config(EquityConfig::aggressive())
///     .build()
///     .unwrap();
/// assert_eq!(80, bot.aggression());
///
/// assert!(AiBotBuilder::default().tightness(101).build().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AiBotBuilder {
    tightness: Option<u32>,
    aggression: Option<u32>,
    equity_config: Option<EquityConfig>,
    cutoffs: Option<CutoffTable>,
    name: Option<String>,
}

impl AiBotBuilder {
    pub fn tightness(mut self, tightness: u32) -> Self {
        self.tightness = Some(tightness);
        self
    }

    pub fn aggression(mut self, aggression: u32) -> Self {
        self.aggression = Some(aggression);
        self
    }

    pub fn equity_config(mut self, equity_config: EquityConfig) -> Self {
        self.equity_config = Some(equity_config);
        self
    }

    pub fn cutoffs(mut self, cutoffs: CutoffTable) -> Self {
        self.cutoffs = Some(cutoffs);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<AiBot, BotError> {
        let bot = AiBot::with_estimator(
            self.tightness.unwrap_or(50),
            self.aggression.unwrap_or(50),
            EquityEstimator::new(self.equity_config.unwrap_or_default()),
            self.cutoffs.unwrap_or_default(),
        )?;
        Ok(match self.name {
            Some(name) => bot.named(name),
            None => bot,
        })
    }
}
