use comfy_table::{presets::UTF8_FULL, Table};
use lotto_core::{ErrorKind, LotteryError, LotteryEvent, LotteryInfo, LotteryObserver};

/// Prints a notification for every successful lottery mutation
pub struct Notifier {
    currency: String,
}

impl Notifier {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    pub fn message(&self, event: &LotteryEvent) -> String {
        match event {
            LotteryEvent::Created { ticket_price, .. } => format!(
                "New lottery created with ticket price: {} {}",
                ticket_price, self.currency
            ),
            LotteryEvent::TicketPurchased { address, position } => {
                format!("Ticket #{} purchased successfully by {}", position, address)
            }
            LotteryEvent::WinnerDrawn { winner, prize_pool } => format!(
                "Congratulations! The winner is: {} (prize pool {} {})",
                winner, prize_pool, self.currency
            ),
        }
    }
}

impl LotteryObserver for Notifier {
    fn notify(&self, event: &LotteryEvent, _info: &LotteryInfo) {
        println!("{}", self.message(event));
    }
}

pub fn rejection_message(err: &LotteryError) -> String {
    let label = match err.kind() {
        ErrorKind::InvalidInput => "Invalid input",
        ErrorKind::IllegalState => "Not allowed now",
        ErrorKind::BusinessRule => "Rejected",
        ErrorKind::Ambient => "Error",
    };
    format!("{}: {}", label, err)
}

pub fn print_rejection(err: &LotteryError) {
    eprintln!("{}", rejection_message(err));
}

pub fn status_table(info: &LotteryInfo, currency: &str) -> Table {
    let state = &info.state;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Status".to_string(), info.status.to_string()]);

    if state.active {
        table.add_row(vec![
            "Ticket Price".to_string(),
            format!("{} {}", state.ticket_price, currency),
        ]);
        table.add_row(vec![
            "Total Participants".to_string(),
            info.participant_count().to_string(),
        ]);
        table.add_row(vec![
            "Prize Pool".to_string(),
            format!("{} {}", info.prize_pool, currency),
        ]);
        if let Some(opened_at) = state.opened_at {
            table.add_row(vec![
                "Opened".to_string(),
                opened_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ]);
        }
    } else {
        match &state.winner {
            Some(winner) => {
                table.add_row(vec!["Last Winner".to_string(), winner.to_string()]);
                if let Some(drawn_at) = state.drawn_at {
                    table.add_row(vec![
                        "Drawn".to_string(),
                        drawn_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                    ]);
                }
            }
            None => {
                table.add_row(vec![
                    "Last Winner".to_string(),
                    "No active lottery or no winner drawn yet".to_string(),
                ]);
            }
        }
    }

    table
}

pub fn participants_table(info: &LotteryInfo) -> Option<Table> {
    if info.state.participants.is_empty() {
        return None;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Address"]);
    for (i, address) in info.state.participants.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), address.to_string()]);
    }
    Some(table)
}

pub fn print_status(info: &LotteryInfo, currency: &str) {
    println!("Current Lottery Status");
    println!("{}", status_table(info, currency));

    if info.state.active {
        match participants_table(info) {
            Some(table) => {
                println!("Participants:");
                println!("{}", table);
            }
            None => println!("No tickets purchased yet. Be the first!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotto_core::{Address, LotteryState, TicketPrice};

    fn active_info() -> LotteryInfo {
        let state = LotteryState {
            active: true,
            ticket_price: TicketPrice::new(2.0).unwrap(),
            participants: vec![Address::new("0xA").unwrap(), Address::new("0xB").unwrap()],
            ..LotteryState::default()
        };
        LotteryInfo::from(&state)
    }

    #[test]
    fn test_status_table_active() {
        let rendered = status_table(&active_info(), "APT").to_string();
        assert!(rendered.contains("ACTIVE"));
        assert!(!rendered.contains("INACTIVE"));
        assert!(rendered.contains("4 APT"));
        assert!(participants_table(&active_info())
            .unwrap()
            .to_string()
            .contains("0xB"));
    }

    #[test]
    fn test_status_table_inactive_with_winner() {
        let state = LotteryState {
            winner: Some(Address::new("0xWin").unwrap()),
            ..LotteryState::default()
        };
        let rendered = status_table(&LotteryInfo::from(&state), "APT").to_string();
        assert!(rendered.contains("INACTIVE"));
        assert!(rendered.contains("0xWin"));
    }

    #[test]
    fn test_messages() {
        let notifier = Notifier::new("APT");
        let msg = notifier.message(&LotteryEvent::TicketPurchased {
            address: Address::new("0xA").unwrap(),
            position: 3,
        });
        assert_eq!(msg, "Ticket #3 purchased successfully by 0xA");

        let msg = rejection_message(&LotteryError::NoParticipants);
        assert!(msg.starts_with("Rejected:"));
    }
}
