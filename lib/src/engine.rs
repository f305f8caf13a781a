use crate::config::SolverConfig;
use crate::data::*;
use crate::restrictions::WordRestrictions;
use crate::results::*;
use crate::scorers::{UniformScorer, WordScorer};
use log::debug;
use std::cmp::Ordering;
use std::result::Result;
use std::sync::Arc;

/// A word that is still possible, along with its score against the current restrictions.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    /// The position of the word in the [`WordBank`].
    pub index: usize,
    pub word: Word,
    pub score: f64,
}

/// Gets the words in the bank that meet the given restrictions, in word bank order, scoring each
/// one as it is found.
///
/// If `used` is given, words it marks as used are skipped.
pub fn get_possible_words<S>(
    restrictions: &WordRestrictions,
    bank: &WordBank,
    used: Option<&UsedWords>,
    scorer: &S,
) -> Vec<ScoredWord>
where
    S: WordScorer + ?Sized,
{
    bank.iter()
        .enumerate()
        .filter(|(index, word)| {
            !used.map_or(false, |used| used.is_used(*index)) && restrictions.is_satisfied_by(word)
        })
        .map(|(index, word)| ScoredWord {
            index,
            word: word.clone(),
            score: scorer.score_word(word, restrictions),
        })
        .collect()
}

/// Sorts words from highest to lowest score. Words with equal scores keep their relative order.
pub fn rank_words(words: &mut [ScoredWord]) {
    words.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

/// Gets the possible words for the given config, best guess first.
///
/// Without letter frequency, words are left unscored in word bank order.
fn select_possible_words<S>(
    restrictions: &WordRestrictions,
    bank: &WordBank,
    used: &UsedWords,
    scorer: &S,
    config: &SolverConfig,
) -> Vec<ScoredWord>
where
    S: WordScorer + ?Sized,
{
    let used = if config.skip_used_words {
        Some(used)
    } else {
        None
    };
    if !config.use_letter_frequency {
        return get_possible_words(restrictions, bank, used, &UniformScorer);
    }
    let mut words = get_possible_words(restrictions, bank, used, scorer);
    rank_words(&mut words);
    words
}

fn check_config(config: &SolverConfig) -> Result<(), WordleError> {
    if config.max_tries == 0 {
        return Err(WordleError::NoGuessesAllowed);
    }
    Ok(())
}

/// A single game against a known objective word.
#[derive(Debug)]
pub struct Game<'a, S: WordScorer + ?Sized> {
    bank: &'a WordBank,
    scorer: &'a S,
    config: &'a SolverConfig,
    objective: Word,
    tries: u32,
    restrictions: WordRestrictions,
    guesses: Vec<Box<str>>,
}

impl<'a, S: WordScorer + ?Sized> Game<'a, S> {
    /// Starts a game with the given objective word. The objective need not be in the bank, but
    /// such a game can never be won.
    pub fn new(
        objective: &str,
        bank: &'a WordBank,
        scorer: &'a S,
        config: &'a SolverConfig,
    ) -> Result<Game<'a, S>, WordleError> {
        check_config(config)?;
        let objective = Word::new(objective)?;
        if objective.len() != config.word_length {
            return Err(WordleError::WordLength(config.word_length));
        }
        Ok(Game {
            bank,
            scorer,
            config,
            objective,
            tries: 0,
            restrictions: WordRestrictions::new(config.word_length),
            guesses: Vec::new(),
        })
    }

    /// Returns the words that are still possible, best guess first.
    pub fn possible_words(&self, used: &UsedWords) -> Vec<ScoredWord> {
        select_possible_words(
            &self.restrictions,
            self.bank,
            used,
            self.scorer,
            self.config,
        )
    }

    /// Guesses the given word, and records the resulting restrictions.
    pub fn guess<'g>(&mut self, guess: &'g str) -> Result<GuessResult<'g>, WordleError> {
        let result = get_result_for_guess(self.objective.value(), guess)?;
        self.restrictions.update(&result)?;
        self.tries += 1;
        self.guesses.push(Box::from(guess));
        Ok(result)
    }

    /// Plays until the objective is found, no possible words remain, or the tries run out.
    ///
    /// When the objective is found, it is marked in `used`.
    pub fn play(mut self, used: &mut UsedWords) -> Result<GameResult, WordleError> {
        loop {
            let possible_words = self.possible_words(used);
            let Some(best) = possible_words.first() else {
                debug!("{}: no possible words remain", self.objective);
                return Ok(GameResult::Exhausted(self.guesses));
            };
            let guess: Arc<str> = best.word.shared_value();
            let result = self.guess(&guess)?;
            debug!(
                "{} {}: {} - {} {:?}",
                self.tries,
                guess,
                result.to_code(),
                possible_words.len(),
                possible_words
                    .iter()
                    .take(self.config.display_limit)
                    .map(|word| word.word.value())
                    .collect::<Vec<&str>>()
            );
            if result.is_correct() {
                used.mark(best.index);
                return Ok(GameResult::Success(self.guesses));
            }
            if self.tries >= self.config.max_tries {
                return Ok(GameResult::Failure(self.guesses));
            }
        }
    }

    /// The number of guesses made so far.
    pub fn tries(&self) -> u32 {
        self.tries
    }

    pub fn restrictions(&self) -> &WordRestrictions {
        &self.restrictions
    }

    pub fn guesses(&self) -> &[Box<str>] {
        &self.guesses
    }
}

/// Plays games against a fixed word bank, remembering which words have already been answers.
#[derive(Debug)]
pub struct Solver<'a, S: WordScorer> {
    bank: &'a WordBank,
    scorer: S,
    config: SolverConfig,
    used: UsedWords,
}

impl<'a, S: WordScorer> Solver<'a, S> {
    /// Constructs a solver. Fails if the bank's words do not have the configured length, or if
    /// the config allows no guesses.
    ///
    /// ```
    /// use letter_freq_solver::{GameResult, Solver, SolverConfig, WordBank};
    /// use letter_freq_solver::scorers::LetterFrequencyScorer;
    ///
    /// let bank = WordBank::from_iterator(["crane", "goose", "moose"]).unwrap();
    /// let mut solver =
    ///     Solver::new(&bank, LetterFrequencyScorer::english(), SolverConfig::default()).unwrap();
    ///
    /// let result = solver.solve("goose").unwrap();
    /// assert!(matches!(result, GameResult::Success(_)));
    /// ```
    pub fn new(
        bank: &'a WordBank,
        scorer: S,
        config: SolverConfig,
    ) -> Result<Solver<'a, S>, WordleError> {
        check_config(&config)?;
        if !bank.is_empty() && bank.word_length() != config.word_length {
            return Err(WordleError::WordLength(config.word_length));
        }
        Ok(Solver {
            bank,
            scorer,
            used: UsedWords::new(bank),
            config,
        })
    }

    /// Returns every word that satisfies the given restrictions, best guess first.
    pub fn possible_words(&self, restrictions: &WordRestrictions) -> Vec<ScoredWord> {
        let words = select_possible_words(
            restrictions,
            self.bank,
            &self.used,
            &self.scorer,
            &self.config,
        );
        debug!("{} possible words", words.len());
        words
    }

    /// Returns up to `n` of the best guesses that satisfy the given restrictions.
    pub fn select_top_n_guesses(
        &self,
        restrictions: &WordRestrictions,
        n: usize,
    ) -> Vec<ScoredWord> {
        let mut words = self.possible_words(restrictions);
        words.truncate(n);
        words
    }

    /// Starts a new game against the given objective word.
    pub fn new_game(&self, objective: &str) -> Result<Game<'_, S>, WordleError> {
        Game::new(objective, self.bank, &self.scorer, &self.config)
    }

    /// Plays a full game against the given objective word.
    pub fn solve(&mut self, objective: &str) -> Result<GameResult, WordleError> {
        let game = Game::new(objective, self.bank, &self.scorer, &self.config)?;
        game.play(&mut self.used)
    }

    /// Plays a full game and returns its outcome code: the number of tries if solved, `7` if the
    /// tries ran out, or `-1` if no possible words remained.
    pub fn solve_for_outcome(&mut self, objective: &str) -> Result<i32, WordleError> {
        let max_tries = self.config.max_tries;
        Ok(self.solve(objective)?.outcome_code(max_tries))
    }

    /// Marks the given word as already used. Returns false if it is not in the bank.
    pub fn mark_used(&mut self, word: &str) -> bool {
        match self.bank.index_of(word) {
            Some(index) => {
                self.used.mark(index);
                true
            }
            None => false,
        }
    }

    pub fn used_words(&self) -> &UsedWords {
        &self.used
    }

    pub fn bank(&self) -> &'a WordBank {
        self.bank
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}
