use crate::config::TestSubset;
use crate::data::*;
use crate::engine::{Game, Solver};
use crate::results::*;
use crate::scorers::WordScorer;
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::result::Result;

/// Chooses the objective words for a statistics run.
///
/// `curated` is the separately supplied list used by [`TestSubset::PreviouslyUsed`] and
/// [`TestSubset::HardWords`]; it is ignored for the other subsets.
pub fn select_test_words(subset: TestSubset, bank: &WordBank, curated: &[Word]) -> Vec<Word> {
    match subset {
        TestSubset::All => bank.to_vec(),
        TestSubset::PrefixA => bank
            .iter()
            .filter(|word| word.value().starts_with('a'))
            .cloned()
            .collect(),
        TestSubset::PreviouslyUsed | TestSubset::HardWords => curated.to_vec(),
    }
}

/// Counts how many games ended with each outcome code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeHistogram {
    max_tries: u32,
    num_games_per_outcome: BTreeMap<i32, u32>,
}

impl OutcomeHistogram {
    /// Creates a histogram with a zero count for every possible outcome.
    pub fn new(max_tries: u32) -> OutcomeHistogram {
        let num_games_per_outcome = std::iter::once(EXHAUSTED_OUTCOME)
            .chain(1..=max_tries as i32 + 1)
            .map(|outcome| (outcome, 0))
            .collect();
        OutcomeHistogram {
            max_tries,
            num_games_per_outcome,
        }
    }

    pub fn record(&mut self, result: &GameResult) {
        *self
            .num_games_per_outcome
            .entry(result.outcome_code(self.max_tries))
            .or_insert(0) += 1;
    }

    /// Returns the number of games with the given outcome code.
    pub fn count(&self, outcome: i32) -> u32 {
        self.num_games_per_outcome
            .get(&outcome)
            .copied()
            .unwrap_or(0)
    }

    /// Returns the number of games that ran out of tries.
    pub fn num_out_of_tries(&self) -> u32 {
        self.count(self.max_tries as i32 + 1)
    }

    /// Returns the number of games where no possible words remained.
    pub fn num_exhausted(&self) -> u32 {
        self.count(EXHAUSTED_OUTCOME)
    }

    pub fn num_games(&self) -> u32 {
        self.num_games_per_outcome.values().sum()
    }

    /// Returns the mean and standard deviation of the number of tries across solved games, or
    /// `None` if no game was solved.
    pub fn solved_tries_stats(&self) -> Option<(f64, f64)> {
        let solved = self
            .num_games_per_outcome
            .iter()
            .filter(|(outcome, _)| (1..=self.max_tries as i32).contains(*outcome));
        let num_solved: u32 = solved.clone().map(|(_, num_games)| num_games).sum();
        if num_solved == 0 {
            return None;
        }
        let average = solved
            .clone()
            .map(|(outcome, num_games)| (outcome * *num_games as i32) as f64)
            .sum::<f64>()
            / num_solved as f64;
        let variance = solved
            .map(|(outcome, num_games)| (*outcome as f64 - average).powi(2) * *num_games as f64)
            .sum::<f64>()
            / num_solved as f64;
        Some((average, variance.sqrt()))
    }

    /// Iterates over `(outcome code, number of games)` in outcome order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.num_games_per_outcome
            .iter()
            .map(|(outcome, num_games)| (*outcome, *num_games))
    }
}

/// The results of a statistics run.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    /// Each objective word with the result of its game, in the order they were given.
    pub results: Vec<(Word, GameResult)>,
    pub histogram: OutcomeHistogram,
}

/// Plays one game against each objective word.
///
/// If the solver skips used words, the games are played in order, since each solved word is then
/// skipped by later games. Otherwise the games are independent, and are played in parallel, each
/// with its own record of used words. Either way, every solved word is marked used on `solver`.
pub fn play_all<S>(
    solver: &mut Solver<'_, S>,
    objectives: &[Word],
) -> Result<StatsReport, WordleError>
where
    S: WordScorer + Sync,
{
    let game_results: Vec<GameResult> = if solver.config().skip_used_words {
        objectives
            .iter()
            .map(|objective| solver.solve(objective.value()))
            .collect::<Result<Vec<GameResult>, WordleError>>()?
    } else {
        let bank = solver.bank();
        let scorer = solver.scorer();
        let config = solver.config();
        let results = objectives
            .par_iter()
            .map(|objective| {
                let mut used = UsedWords::new(bank);
                Game::new(objective.value(), bank, scorer, config)?.play(&mut used)
            })
            .collect::<Result<Vec<GameResult>, WordleError>>()?;
        for (objective, result) in objectives.iter().zip(&results) {
            if let GameResult::Success(_) = result {
                solver.mark_used(objective.value());
            }
        }
        results
    };

    let mut histogram = OutcomeHistogram::new(solver.config().max_tries);
    for result in &game_results {
        histogram.record(result);
    }
    debug!("played {} games", histogram.num_games());
    Ok(StatsReport {
        results: objectives.iter().cloned().zip(game_results).collect(),
        histogram,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|text| Word::new(text).unwrap()).collect()
    }

    fn guesses(num_guesses: usize) -> Vec<Box<str>> {
        vec![Box::from("xxxxx"); num_guesses]
    }

    #[test]
    fn select_test_words_by_subset() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(["about", "crane", "alpha", "goose"])?;
        let curated = words(&["hatch"]);

        assert_eq!(select_test_words(TestSubset::All, &bank, &curated).len(), 4);
        assert_eq!(
            select_test_words(TestSubset::PrefixA, &bank, &curated),
            words(&["about", "alpha"])
        );
        assert_eq!(
            select_test_words(TestSubset::HardWords, &bank, &curated),
            curated
        );
        assert_eq!(
            select_test_words(TestSubset::PreviouslyUsed, &bank, &[]),
            Vec::<Word>::new()
        );
        Ok(())
    }

    #[test]
    fn histogram_starts_with_every_outcome() {
        let histogram = OutcomeHistogram::new(6);

        assert_eq!(
            histogram.iter().map(|(outcome, _)| outcome).collect::<Vec<i32>>(),
            vec![-1, 1, 2, 3, 4, 5, 6, 7]
        );
        assert_eq!(histogram.num_games(), 0);
        assert_eq!(histogram.solved_tries_stats(), None);
    }

    #[test]
    fn histogram_records_outcomes() {
        let mut histogram = OutcomeHistogram::new(6);

        histogram.record(&GameResult::Success(guesses(2)));
        histogram.record(&GameResult::Success(guesses(4)));
        histogram.record(&GameResult::Failure(guesses(6)));
        histogram.record(&GameResult::Exhausted(guesses(3)));

        assert_eq!(histogram.count(2), 1);
        assert_eq!(histogram.count(4), 1);
        assert_eq!(histogram.num_out_of_tries(), 1);
        assert_eq!(histogram.num_exhausted(), 1);
        assert_eq!(histogram.num_games(), 4);
        assert_eq!(histogram.solved_tries_stats(), Some((3.0, 1.0)));
    }
}
