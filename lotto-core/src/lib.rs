//! Mock lottery - core library
//!
//! A single in-memory lottery record driven through create, buy ticket and
//! pick winner transitions. Each operation returns a structured result and
//! subscribed observers are notified after every successful mutation.

pub mod config;
pub mod draw;
pub mod error;
pub mod events;
pub mod machine;
pub mod types;

pub use config::{DuplicatePolicy, LotteryConfig};
pub use error::{ErrorKind, LotteryError, Result};
pub use events::{LotteryEvent, LotteryObserver, SubscriptionId};
pub use machine::LotteryStateMachine;
pub use types::{Address, DrawOutcome, LotteryInfo, LotteryState, LotteryStatus, TicketPrice};
