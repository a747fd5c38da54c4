use super::tally::Tally;
use crate::Probability;
use crate::cards::category::Category;
use std::collections::BTreeMap;

/// The aggregate a simulation run boils down to. Field names double as
/// the JSON shape the equity endpoint returns.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Report {
    pub hero_equity: Probability,
    pub villain_equity: Probability,
    /// Fraction of trials where hero split the pot with at least one
    /// other player.
    pub tie: Probability,
    /// How often hero's best hand landed in each of the nine tiers.
    pub hand_distribution: BTreeMap<Category, Probability>,
    pub trials: usize,
    pub wins: usize,
    pub ties: usize,
    pub losses: usize,
    pub seed: u64,
}

impl From<(Tally, u64)> for Report {
    fn from((tally, seed): (Tally, u64)) -> Self {
        let trials = tally.trials as Probability;
        let hero_equity = tally.share / trials;
        Self {
            hero_equity,
            villain_equity: 1.0 - hero_equity,
            tie: tally.ties as Probability / trials,
            hand_distribution: Category::all()
                .iter()
                .map(|c| (*c, tally.categories[usize::from(*c)] as Probability / trials))
                .collect(),
            trials: tally.trials,
            wins: tally.wins,
            ties: tally.ties,
            losses: tally.losses,
            seed,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "equity {:.4} (villain {:.4}, tie {:.4}, {} trials)",
            self.hero_equity, self.villain_equity, self.tie, self.trials
        )?;
        for (category, frequency) in self.hand_distribution.iter() {
            if *frequency > 0.0 {
                writeln!(f, "  {:<16} {:.4}", category, frequency)?;
            }
        }
        Ok(())
    }
}
