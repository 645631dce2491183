use super::display::{self, Notifier};
use dialoguer::{Input, Select};
use lotto_core::{Address, LotteryConfig, LotteryStateMachine};
use rand::Rng;

const MENU: [&str; 5] = [
    "Create Lottery",
    "Buy a Ticket",
    "Pick Winner",
    "Show Status",
    "Quit",
];

/// One user action against the lottery
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Create(String),
    BuyTicket(Address),
    PickWinner,
    Status,
    Quit,
}

/// Apply `action`. Returns `Ok(false)` once the session should end.
pub fn perform<R: Rng>(
    lottery: &mut LotteryStateMachine<R>,
    action: Action,
) -> lotto_core::Result<bool> {
    match action {
        Action::Create(price) => {
            lottery.create(&price)?;
        }
        Action::BuyTicket(address) => {
            lottery.buy_ticket(address)?;
        }
        Action::PickWinner => {
            lottery.pick_winner()?;
        }
        Action::Status => {
            display::print_status(&lottery.query(), &lottery.config().currency);
        }
        Action::Quit => return Ok(false),
    }
    Ok(true)
}

/// Interactive session against a fresh in-memory lottery
pub fn run_session(config: LotteryConfig, prompt_address: bool) -> anyhow::Result<()> {
    let me = config.default_address()?;
    let currency = config.currency.clone();

    let mut lottery = LotteryStateMachine::new(config)?;
    lottery.subscribe(Notifier::new(currency.as_str()));

    println!("Mock Lottery");
    println!("Connected as: {}", me);
    println!();
    display::print_status(&lottery.query(), &currency);

    loop {
        let choice = Select::new()
            .with_prompt("Choose an action")
            .items(&MENU)
            .default(0)
            .interact()?;

        let action = match choice {
            0 => {
                let price: String = Input::new()
                    .with_prompt(format!("Ticket price ({})", currency))
                    .allow_empty(true)
                    .interact_text()?;
                Action::Create(price)
            }
            1 => {
                let buyer = if prompt_address {
                    let text: String = Input::new()
                        .with_prompt("Buyer address")
                        .default(me.to_string())
                        .interact_text()?;
                    match Address::new(text) {
                        Ok(address) => address,
                        Err(e) => {
                            display::print_rejection(&e);
                            continue;
                        }
                    }
                } else {
                    me.clone()
                };
                Action::BuyTicket(buyer)
            }
            2 => Action::PickWinner,
            3 => Action::Status,
            _ => Action::Quit,
        };

        match perform(&mut lottery, action) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => display::print_rejection(&e),
        }
        println!();
    }

    tracing::debug!("Session ended after {} lottery round(s)", lottery.state().round);
    Ok(())
}
