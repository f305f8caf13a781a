use crate::config::LetterWeights;
use crate::config::SolverConfig;
use crate::data::*;
use crate::restrictions::WordRestrictions;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gives words a score, where the maximum score indicates the best guess.
///
/// Scores are computed fresh for each candidate on every turn, against the current
/// restrictions, so implementations hold no per-game state and can be shared between games.
pub trait WordScorer {
    /// Determines a score for the given word. The higher the score, the better the guess.
    fn score_word(&self, word: &Word, restrictions: &WordRestrictions) -> f64;
}

/// Relative frequency of each letter `a` to `z` in English text.
pub const ENGLISH_LETTER_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    0.084966, 0.020720, 0.045388, 0.033844, 0.111607, 0.018121, 0.024705, 0.030034, 0.075448,
    0.001965, 0.011016, 0.054893, 0.030129, 0.066544, 0.071635, 0.031671, 0.001962, 0.075809,
    0.057351, 0.069509, 0.036308, 0.010074, 0.012899, 0.002902, 0.017779, 0.002722,
];

/// Scores words by summing a fixed weight for each unique letter in the word that is not yet
/// known to be in the objective word.
///
/// Letters that are already known to be present add nothing, so the best-scoring words are the
/// ones that test the most (and most common) new letters.
///
/// ```
/// use letter_freq_solver::{Word, WordRestrictions};
/// use letter_freq_solver::scorers::{LetterFrequencyScorer, WordScorer};
///
/// let scorer = LetterFrequencyScorer::english();
/// let restrictions = WordRestrictions::new(5);
///
/// let irate = scorer.score_word(&Word::new("irate").unwrap(), &restrictions);
/// let fuzzy = scorer.score_word(&Word::new("fuzzy").unwrap(), &restrictions);
/// assert!(irate > fuzzy);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterFrequencyScorer {
    weights: [f64; ALPHABET_SIZE],
}

impl LetterFrequencyScorer {
    /// Constructs a scorer with the given weight for each letter `a` to `z`.
    pub fn new(weights: [f64; ALPHABET_SIZE]) -> LetterFrequencyScorer {
        LetterFrequencyScorer { weights }
    }

    /// Constructs a scorer using [`ENGLISH_LETTER_FREQUENCIES`].
    pub fn english() -> LetterFrequencyScorer {
        LetterFrequencyScorer::new(ENGLISH_LETTER_FREQUENCIES)
    }

    /// Constructs a scorer where each letter's weight is the fraction of the given words that
    /// contain it.
    pub fn from_words(words: &[Word]) -> LetterFrequencyScorer {
        let mut weights = [0.0; ALPHABET_SIZE];
        if words.is_empty() {
            return LetterFrequencyScorer { weights };
        }
        for word in words {
            for letter in word.letters().iter() {
                weights[(letter as u8 - b'a') as usize] += 1.0;
            }
        }
        let num_words = words.len() as f64;
        for weight in weights.iter_mut() {
            *weight /= num_words;
        }
        LetterFrequencyScorer { weights }
    }

    /// Returns the weight for the given letter, or zero if it is not in `a` to `z`.
    pub fn weight(&self, letter: u8) -> f64 {
        letter_index(letter)
            .map(|index| self.weights[index])
            .unwrap_or(0.0)
    }
}

impl Default for LetterFrequencyScorer {
    fn default() -> Self {
        LetterFrequencyScorer::english()
    }
}

impl WordScorer for LetterFrequencyScorer {
    fn score_word(&self, word: &Word, restrictions: &WordRestrictions) -> f64 {
        word.letters()
            .iter()
            .map(|letter| letter as u8)
            .filter(|letter| !restrictions.included_letters().contains(*letter))
            .map(|letter| self.weight(letter))
            .sum()
    }
}

/// Gives every word the same score, so words are guessed in word bank order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformScorer;

impl WordScorer for UniformScorer {
    fn score_word(&self, _word: &Word, _restrictions: &WordRestrictions) -> f64 {
        0.0
    }
}

impl<S: WordScorer + ?Sized> WordScorer for Box<S> {
    fn score_word(&self, word: &Word, restrictions: &WordRestrictions) -> f64 {
        (**self).score_word(word, restrictions)
    }
}

/// Builds the scorer described by the given config.
pub fn scorer_for_config(
    config: &SolverConfig,
    bank: &WordBank,
) -> Box<dyn WordScorer + Send + Sync> {
    if !config.use_letter_frequency {
        return Box::new(UniformScorer);
    }
    match config.letter_weights {
        LetterWeights::English => Box::new(LetterFrequencyScorer::english()),
        LetterWeights::WordBank => Box::new(LetterFrequencyScorer::from_words(bank)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::WordleError;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn sequential_weights() -> [f64; ALPHABET_SIZE] {
        let mut weights = [0.0; ALPHABET_SIZE];
        for (index, weight) in weights.iter_mut().enumerate() {
            *weight = (index + 1) as f64;
        }
        weights
    }

    #[test]
    fn letter_frequency_scorer_counts_repeated_letters_once() {
        let scorer = LetterFrequencyScorer::new(sequential_weights());
        let restrictions = WordRestrictions::new(5);

        // g=7, o=15, s=19, e=5
        assert_eq!(scorer.score_word(&word("goose"), &restrictions), 46.0);
        // a=1, b=2, c=3, d=4, e=5
        assert_eq!(scorer.score_word(&word("abcde"), &restrictions), 15.0);
        assert_eq!(scorer.score_word(&word("aaaaa"), &restrictions), 1.0);
    }

    #[test]
    fn letter_frequency_scorer_ignores_included_letters() -> Result<(), WordleError> {
        let scorer = LetterFrequencyScorer::new(sequential_weights());
        let mut restrictions = WordRestrictions::new(5);
        restrictions.add_constraints([("oxxxs", "10001")])?;

        // Only g and e are new.
        assert_eq!(scorer.score_word(&word("goose"), &restrictions), 12.0);
        Ok(())
    }

    #[test]
    fn letter_frequency_scorer_skips_repeated_included_letters() -> Result<(), WordleError> {
        let scorer = LetterFrequencyScorer::new(sequential_weights());
        let mut restrictions = WordRestrictions::new(5);
        restrictions.add_constraints([("xxxxe", "00002")])?;

        // g=7, s=19, and every e is already known.
        assert_eq!(scorer.score_word(&word("geese"), &restrictions), 26.0);
        Ok(())
    }

    #[test]
    fn letter_frequency_scorer_from_words() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(["goose", "geese", "crane", "zzzzz"])?;
        let scorer = LetterFrequencyScorer::from_words(&bank);

        assert_eq!(scorer.weight(b'e'), 0.75);
        assert_eq!(scorer.weight(b'g'), 0.5);
        assert_eq!(scorer.weight(b'z'), 0.25);
        assert_eq!(scorer.weight(b'q'), 0.0);
        assert_eq!(scorer.weight(b'?'), 0.0);
        Ok(())
    }

    #[test]
    fn letter_frequency_scorer_from_no_words() {
        let scorer = LetterFrequencyScorer::from_words(&[]);

        assert_eq!(scorer.weight(b'e'), 0.0);
    }

    #[test]
    fn scorer_for_config_follows_options() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(["zzzzz", "crane"])?;
        let restrictions = WordRestrictions::new(5);
        let zzzzz = word("zzzzz");

        let english = scorer_for_config(&SolverConfig::default(), &bank);
        assert_eq!(
            english.score_word(&zzzzz, &restrictions),
            ENGLISH_LETTER_FREQUENCIES[25]
        );

        let from_bank = scorer_for_config(
            &SolverConfig {
                letter_weights: LetterWeights::WordBank,
                ..SolverConfig::default()
            },
            &bank,
        );
        assert_eq!(from_bank.score_word(&zzzzz, &restrictions), 0.5);

        let uniform = scorer_for_config(
            &SolverConfig {
                use_letter_frequency: false,
                letter_weights: LetterWeights::WordBank,
                ..SolverConfig::default()
            },
            &bank,
        );
        assert_eq!(uniform.score_word(&zzzzz, &restrictions), 0.0);
        Ok(())
    }

    #[test]
    fn uniform_scorer_is_zero() {
        assert_eq!(
            UniformScorer.score_word(&word("crane"), &WordRestrictions::new(5)),
            0.0
        );
    }
}
