use super::display::{self, Notifier};
use super::play::{perform, Action};
use anyhow::bail;
use lotto_core::{Address, DrawOutcome, LotteryConfig, LotteryStateMachine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scripted round: create at `price`, one ticket per address, then draw.
pub fn run_simulation(
    config: LotteryConfig,
    price: &str,
    addresses: &[String],
    seed: Option<u64>,
) -> anyhow::Result<DrawOutcome> {
    let currency = config.currency.clone();
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut lottery = LotteryStateMachine::with_rng(config, rng)?;
    lottery.subscribe(Notifier::new(currency.as_str()));

    let outcome = simulate(&mut lottery, price, addresses)?;

    println!();
    perform(&mut lottery, Action::Status)?;
    println!("Winner: {} ({} {})", outcome.winner, outcome.prize_pool, currency);
    Ok(outcome)
}

pub fn simulate<R: Rng>(
    lottery: &mut LotteryStateMachine<R>,
    price: &str,
    addresses: &[String],
) -> anyhow::Result<DrawOutcome> {
    if addresses.is_empty() {
        bail!("At least one participant address is required");
    }

    let mut script = vec![Action::Create(price.to_string())];
    for address in addresses {
        script.push(Action::BuyTicket(Address::new(address.as_str())?));
    }

    for action in script {
        if let Err(e) = perform(lottery, action) {
            bail!(display::rejection_message(&e));
        }
    }

    Ok(lottery.pick_winner()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addresses(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_simulation_picks_a_participant() {
        let outcome =
            run_simulation(LotteryConfig::default(), "2", &addresses(&["A", "B"]), Some(1))
                .unwrap();
        assert!(outcome.winner == "A" || outcome.winner == "B");
        assert_eq!(outcome.prize_pool, 4.0);
        assert_eq!(outcome.participants, 2);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let list = addresses(&["A", "B", "C", "D", "E"]);
        let first = run_simulation(LotteryConfig::default(), "1", &list, Some(9)).unwrap();
        let second = run_simulation(LotteryConfig::default(), "1", &list, Some(9)).unwrap();
        assert_eq!(first.winner, second.winner);
    }

    #[test]
    fn test_duplicate_address_fails_run() {
        let err = run_simulation(LotteryConfig::default(), "1", &addresses(&["A", "A"]), None)
            .unwrap_err();
        assert!(err.to_string().contains("already purchased"));

        let outcome = run_simulation(
            LotteryConfig::allowing_duplicates(),
            "1",
            &addresses(&["A", "A"]),
            None,
        )
        .unwrap();
        assert_eq!(outcome.winner, "A");
    }

    #[test]
    fn test_bad_input_fails_run() {
        assert!(run_simulation(LotteryConfig::default(), "-1", &addresses(&["A"]), None).is_err());
        assert!(run_simulation(LotteryConfig::default(), "1", &[], None).is_err());
        assert!(run_simulation(LotteryConfig::default(), "1", &addresses(&[" "]), None).is_err());
    }
}
