use super::report::Report;
use super::tally::Tally;
use crate::BATCH_SIZE;
use crate::cards::board::Board;
use crate::cards::category::Category;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::strength::Strength;
use crate::error::Error;
use crate::error::Result;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Monte Carlo equity simulation for a fixed hero hand and partial board.
///
/// Each trial completes the board from the live deck, deals every
/// opponent two live cards, evaluates all seven-card hands, and credits
/// hero `1/|winners|` of the pot when hero is among the winners. Trials
/// run in fixed-size batches across the rayon pool; every batch owns an
/// independently seeded generator, so a seeded run is reproducible no
/// matter how the scheduler interleaves the work.
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    hero: Hole,
    board: Board,
    opponents: usize,
}

impl Simulator {
    pub fn new(hero: Hole, board: Board, opponents: usize) -> Result<Self> {
        let hero_cards = Hand::from(hero);
        let board_cards = Hand::from(board);
        if let Some(card) = hero_cards.into_iter().find(|c| board_cards.contains(c)) {
            return Err(Error::DuplicateCard(card));
        }
        if opponents == 0 {
            return Err(Error::InvalidOpponentCount(opponents));
        }
        let needed = board.missing() + 2 * opponents;
        let live = 52 - hero_cards.size() - board_cards.size();
        if needed > live {
            return Err(Error::DeckExhausted { needed, live });
        }
        Ok(Self {
            hero,
            board,
            opponents,
        })
    }

    /// Runs trials with an entropy-seeded generator.
    pub fn simulate(&self, trials: usize) -> Report {
        self.simulate_seeded(trials, rand::rng().random())
    }

    /// Runs trials deterministically from the given seed.
    pub fn simulate_seeded(&self, trials: usize, seed: u64) -> Report {
        let trials = trials.max(1);
        let batches = trials.div_ceil(BATCH_SIZE);
        log::debug!(
            "simulating {} trials in {} batches for {} vs {} opponents",
            trials,
            batches,
            self.hero,
            self.opponents
        );
        let tally = (0..batches)
            .into_par_iter()
            .map(|i| (i, BATCH_SIZE.min(trials - i * BATCH_SIZE)))
            .map(|(i, n)| self.batch(n, SmallRng::seed_from_u64(seed.wrapping_add(i as u64))))
            .sum::<Tally>();
        Report::from((tally, seed))
    }

    fn batch(&self, n: usize, mut rng: SmallRng) -> Tally {
        let hero = Hand::from(self.hero);
        let partial = Hand::from(self.board);
        let dead = Hand::add(hero, partial);
        let missing = self.board.missing();
        let mut tally = Tally::default();
        for _ in 0..n {
            let mut deck = Deck::live(dead);
            let board = Hand::add(partial, deck.deal(&mut rng, missing));
            let strength = Strength::from(Hand::add(hero, board));
            let mut co_winners = 1usize;
            for _ in 0..self.opponents {
                let villain = Hand::from(deck.hole(&mut rng));
                let villain = Strength::from(Hand::add(villain, board));
                match villain.cmp(&strength) {
                    Ordering::Greater => {
                        co_winners = 0;
                        break;
                    }
                    Ordering::Equal => co_winners += 1,
                    Ordering::Less => continue,
                }
            }
            tally.record(co_winners, Category::from(strength.value()));
        }
        tally
    }
}
