use crate::error::{LotteryError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identity of a ticket buyer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Result<Self> {
        let address = address.into();
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(LotteryError::InvalidAddress(address));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = LotteryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Address {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Price of a single ticket. Zero only in the default (never created) state.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketPrice(f64);

impl TicketPrice {
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(LotteryError::InvalidTicketPrice(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Parse user-entered numeric text. The whole trimmed input must be a number.
    pub fn parse(input: &str) -> Result<Self> {
        let value: f64 = input
            .trim()
            .parse()
            .map_err(|_| LotteryError::InvalidTicketPrice(input.to_string()))?;
        Self::new(value).map_err(|_| LotteryError::InvalidTicketPrice(input.to_string()))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total collected for `tickets` purchases at this price
    pub fn pool_for(&self, tickets: usize) -> f64 {
        tickets as f64 * self.0
    }
}

impl FromStr for TicketPrice {
    type Err = LotteryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TicketPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LotteryStatus {
    Inactive,
    Active,
}

impl fmt::Display for LotteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => f.write_str("INACTIVE"),
            Self::Active => f.write_str("ACTIVE"),
        }
    }
}

/// The single lottery record owned by the state machine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LotteryState {
    pub id: Option<Uuid>,
    pub round: u64,
    pub active: bool,
    pub ticket_price: TicketPrice,
    pub participants: Vec<Address>,
    pub winner: Option<Address>,
    pub opened_at: Option<DateTime<Utc>>,
    pub drawn_at: Option<DateTime<Utc>>,
}

impl LotteryState {
    pub fn status(&self) -> LotteryStatus {
        if self.active {
            LotteryStatus::Active
        } else {
            LotteryStatus::Inactive
        }
    }

    pub fn prize_pool(&self) -> f64 {
        self.ticket_price.pool_for(self.participants.len())
    }

    pub fn has_participant(&self, address: &Address) -> bool {
        self.participants.contains(address)
    }
}

/// Lottery info for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotteryInfo {
    pub status: LotteryStatus,
    pub state: LotteryState,
    pub prize_pool: f64,
}

impl LotteryInfo {
    pub fn participant_count(&self) -> usize {
        self.state.participants.len()
    }
}

impl From<&LotteryState> for LotteryInfo {
    fn from(state: &LotteryState) -> Self {
        Self {
            status: state.status(),
            prize_pool: state.prize_pool(),
            state: state.clone(),
        }
    }
}

/// Result of a successful draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub lottery_id: Option<Uuid>,
    pub winner: Address,
    pub prize_pool: f64,
    pub participants: usize,
}
