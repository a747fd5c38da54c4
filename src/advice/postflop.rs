use super::Advice;
use super::action::Facing;
use crate::BET_FRACTION;
use crate::Chips;
use crate::Probability;
use crate::cards::board::Board;
use crate::cards::hole::Hole;
use crate::equity::simulator::Simulator;
use crate::error::Result;

/// Minimum equity to bet when checked to. Tightens with every extra
/// opponent still in the hand.
fn bet_threshold(opponents: usize) -> Probability {
    0.50 + 0.04 * (opponents - 1) as Probability
}

/// Minimum equity to raise over a bet instead of calling.
fn raise_threshold(opponents: usize) -> Probability {
    0.72 + 0.04 * (opponents - 1) as Probability
}

/// Postflop decision: simulate hero's equity against the live opponent
/// count, then compare it to the price being offered.
pub fn decide_postflop(
    hole: &Hole,
    board: &Board,
    opponents: usize,
    pot: Chips,
    facing: &Facing,
    trials: usize,
) -> Result<Advice> {
    let report = Simulator::new(*hole, *board, opponents)?.simulate(trials);
    let equity = report.hero_equity;
    let street = board.street();
    let pot = pot.max(1.0);
    let advice = match facing.action {
        Some(_) => {
            let wager = facing.size.unwrap_or(pot * BET_FRACTION);
            let price = wager / (pot + wager + wager);
            if equity > raise_threshold(opponents) {
                Advice::raise(
                    wager * 3.0,
                    format!(
                        "{:.0}% equity on the {} raises the {:.1}bb wager for value",
                        equity * 100.0,
                        street,
                        wager
                    ),
                )
            } else if equity > price {
                Advice::call(format!(
                    "{:.0}% equity beats the {:.0}% price on the {}",
                    equity * 100.0,
                    price * 100.0,
                    street
                ))
            } else {
                Advice::fold(format!(
                    "{:.0}% equity cannot pay {:.0}% on the {}",
                    equity * 100.0,
                    price * 100.0,
                    street
                ))
            }
        }
        None => {
            if equity > bet_threshold(opponents) {
                Advice::bet(
                    pot * BET_FRACTION,
                    format!(
                        "{:.0}% equity bets {:.0}% of pot on the {}",
                        equity * 100.0,
                        BET_FRACTION * 100.0,
                        street
                    ),
                )
            } else {
                Advice::check(format!(
                    "{:.0}% equity checks the {} against {} opponents",
                    equity * 100.0,
                    street,
                    opponents
                ))
            }
        }
    };
    Ok(advice.with_equity(equity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::Verdict;

    fn advice(hole: &str, board: &str, opponents: usize, pot: Chips, facing: &str) -> Advice {
        decide_postflop(
            &Hole::try_from(hole).unwrap(),
            &Board::try_from(board).unwrap(),
            opponents,
            pot,
            &Facing::from(facing),
            4_000,
        )
        .unwrap()
    }

    #[test]
    fn the_nuts_bet_when_checked_to() {
        // royal flush: equity is exactly 1
        let advice = advice("As Ks", "Qs Js Ts", 1, 10.0, "");
        assert!(advice.verdict == Verdict::Bet);
        assert!(advice.equity == Some(1.0));
    }

    #[test]
    fn the_nuts_raise_a_bet() {
        let advice = advice("As Ks", "Qs Js Ts", 1, 10.0, "BTN bets 5");
        assert!(advice.verdict == Verdict::Raise);
        assert!(advice.size == Some(15.0));
    }

    #[test]
    fn air_folds_to_a_pot_bet() {
        let advice = advice("2c 7d", "As Ks Qs", 1, 10.0, "BTN bets 10");
        assert!(advice.verdict == Verdict::Fold);
    }

    #[test]
    fn air_checks_back() {
        let advice = advice("2c 7d", "9h 5s Jc", 1, 10.0, "");
        assert!(advice.verdict == Verdict::Check);
    }

    #[test]
    fn marginal_hands_call_a_cheap_price() {
        // pocket deuces near a coin flip, priced in against a small bet
        let advice = advice("2c 2d", "9h 5s Jc", 1, 10.0, "BTN bets 2");
        assert!(advice.verdict == Verdict::Call);
    }

    #[test]
    fn errors_propagate_from_the_simulator() {
        let result = decide_postflop(
            &Hole::try_from("As Kd").unwrap(),
            &Board::try_from("As 5s Jc").unwrap(),
            1,
            10.0,
            &Facing::none(),
            1_000,
        );
        assert!(result.is_err());
    }
}
