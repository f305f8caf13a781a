#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The only word length the solver currently supports.
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// The number of guesses allowed per game.
pub const DEFAULT_MAX_TRIES: u32 = 6;

/// The number of ranked guesses shown to a player by default.
pub const DEFAULT_DISPLAY_LIMIT: usize = 15;

/// Which words a statistics run should use as the objective words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TestSubset {
    /// Every word in the word bank.
    #[default]
    All,
    /// Only words in the word bank that start with `a`.
    PrefixA,
    /// A list of words that have already been answers in the real game.
    PreviouslyUsed,
    /// A curated list of words that are known to be difficult.
    HardWords,
}

impl TestSubset {
    /// Returns true iff this subset comes from a separately supplied word list.
    pub fn is_curated(&self) -> bool {
        matches!(self, TestSubset::PreviouslyUsed | TestSubset::HardWords)
    }
}

/// Where letter-frequency weights come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterWeights {
    /// A fixed table of letter frequencies in English text.
    #[default]
    English,
    /// The fraction of words in the word bank that contain each letter.
    WordBank,
}

/// Options for how the solver picks and filters its guesses.
///
/// ```
/// use letter_freq_solver::SolverConfig;
///
/// let config = SolverConfig {
///     skip_used_words: false,
///     ..SolverConfig::default()
/// };
/// assert_eq!(config.max_tries, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SolverConfig {
    /// Number of letters in each word.
    pub word_length: usize,
    /// Number of guesses allowed before the game is lost.
    pub max_tries: u32,
    /// Whether to rank candidates by letter frequency. If false, candidates are guessed in word
    /// bank order.
    pub use_letter_frequency: bool,
    /// Which letter weights to rank with, when ranking by letter frequency.
    pub letter_weights: LetterWeights,
    /// Whether to skip words that were already the answer to an earlier game.
    pub skip_used_words: bool,
    /// Which objective words a statistics run should play.
    pub test_subset: TestSubset,
    /// How many ranked guesses to show a player.
    pub display_limit: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            word_length: DEFAULT_WORD_LENGTH,
            max_tries: DEFAULT_MAX_TRIES,
            use_letter_frequency: true,
            letter_weights: LetterWeights::English,
            skip_used_words: true,
            test_subset: TestSubset::All,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}
