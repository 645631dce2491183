use crate::config::{DuplicatePolicy, LotteryConfig};
use crate::draw;
use crate::error::{LotteryError, Result};
use crate::events::{LotteryEvent, LotteryObserver, Subscribers, SubscriptionId};
use crate::types::{Address, DrawOutcome, LotteryInfo, LotteryState, TicketPrice};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Owns the lottery record and applies create / buy / draw transitions.
///
/// Every operation either succeeds and notifies subscribers once, or fails and
/// leaves the state untouched.
pub struct LotteryStateMachine<R = StdRng> {
    config: LotteryConfig,
    state: LotteryState,
    rng: R,
    subscribers: Subscribers,
}

impl LotteryStateMachine<StdRng> {
    pub fn new(config: LotteryConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> LotteryStateMachine<R> {
    pub fn with_rng(config: LotteryConfig, rng: R) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            state: LotteryState::default(),
            rng,
            subscribers: Subscribers::default(),
        })
    }

    pub fn config(&self) -> &LotteryConfig {
        &self.config
    }

    pub fn state(&self) -> &LotteryState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Open a new lottery from user-entered price text
    pub fn create(&mut self, ticket_price: &str) -> Result<LotteryInfo> {
        let price = TicketPrice::parse(ticket_price).map_err(|e| rejected("create", e))?;
        self.create_with_price(price)
    }

    pub fn create_with_price(&mut self, ticket_price: TicketPrice) -> Result<LotteryInfo> {
        if self.state.active {
            return Err(rejected("create", LotteryError::AlreadyActive));
        }

        let id = Uuid::new_v4();
        self.state = LotteryState {
            id: Some(id),
            round: self.state.round + 1,
            active: true,
            ticket_price,
            participants: Vec::new(),
            winner: None,
            opened_at: Some(Utc::now()),
            drawn_at: None,
        };

        tracing::info!(
            "Lottery {} (round {}) created with ticket price {} {}",
            id,
            self.state.round,
            ticket_price,
            self.config.currency
        );

        let info = self.query();
        self.subscribers
            .publish(&LotteryEvent::Created { id, ticket_price }, &info);
        Ok(info)
    }

    /// Add `address` to the participants. Returns the 1-based ticket position.
    pub fn buy_ticket(&mut self, address: Address) -> Result<usize> {
        if !self.state.active {
            return Err(rejected("buy_ticket", LotteryError::NoActiveLottery));
        }

        if self.config.duplicate_policy == DuplicatePolicy::Reject
            && self.state.has_participant(&address)
        {
            return Err(rejected(
                "buy_ticket",
                LotteryError::DuplicateParticipant(address),
            ));
        }

        self.state.participants.push(address.clone());
        let position = self.state.participants.len();

        tracing::info!("Ticket #{} purchased by {}", position, address);

        let info = self.query();
        self.subscribers
            .publish(&LotteryEvent::TicketPurchased { address, position }, &info);
        Ok(position)
    }

    /// Draw a winner uniformly from the participants and close the lottery
    pub fn pick_winner(&mut self) -> Result<DrawOutcome> {
        if !self.state.active {
            return Err(rejected("pick_winner", LotteryError::NoActiveLottery));
        }

        let index = draw::select_index(&mut self.rng, self.state.participants.len())
            .ok_or_else(|| rejected("pick_winner", LotteryError::NoParticipants))?;
        let winner = self.state.participants[index].clone();

        self.state.winner = Some(winner.clone());
        self.state.active = false;
        self.state.drawn_at = Some(Utc::now());

        let outcome = DrawOutcome {
            lottery_id: self.state.id,
            winner: winner.clone(),
            prize_pool: self.state.prize_pool(),
            participants: self.state.participants.len(),
        };

        tracing::info!(
            "Winner of {} participants is {}, prize pool {} {}",
            outcome.participants,
            winner,
            outcome.prize_pool,
            self.config.currency
        );

        let info = self.query();
        self.subscribers.publish(
            &LotteryEvent::WinnerDrawn {
                winner,
                prize_pool: outcome.prize_pool,
            },
            &info,
        );
        Ok(outcome)
    }

    pub fn query(&self) -> LotteryInfo {
        LotteryInfo::from(&self.state)
    }

    pub fn subscribe(&mut self, observer: impl LotteryObserver + 'static) -> SubscriptionId {
        self.subscribers.add(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }
}

fn rejected(operation: &str, err: LotteryError) -> LotteryError {
    tracing::debug!("{} rejected: {}", operation, err);
    err
}

impl<R> std::fmt::Debug for LotteryStateMachine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LotteryStateMachine")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
