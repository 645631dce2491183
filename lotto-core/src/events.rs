use crate::types::{Address, LotteryInfo, TicketPrice};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Emitted once after every successful mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LotteryEvent {
    Created {
        id: Uuid,
        ticket_price: TicketPrice,
    },
    TicketPurchased {
        address: Address,
        position: usize,
    },
    WinnerDrawn {
        winner: Address,
        prize_pool: f64,
    },
}

/// Receives events from a state machine. `info` is the state after the mutation.
pub trait LotteryObserver {
    fn notify(&self, event: &LotteryEvent, info: &LotteryInfo);
}

impl<F> LotteryObserver for F
where
    F: Fn(&LotteryEvent, &LotteryInfo),
{
    fn notify(&self, event: &LotteryEvent, info: &LotteryInfo) {
        self(event, info)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

/// Observers in subscription order
#[derive(Default)]
pub struct Subscribers {
    observers: Vec<(SubscriptionId, Box<dyn LotteryObserver>)>,
}

impl Subscribers {
    pub fn add(&mut self, observer: Box<dyn LotteryObserver>) -> SubscriptionId {
        let id = SubscriptionId(Uuid::new_v4());
        self.observers.push((id, observer));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn publish(&self, event: &LotteryEvent, info: &LotteryInfo) {
        for (_, observer) in &self.observers {
            observer.notify(event, info);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.observers.len())
            .finish()
    }
}
