//! Solves Wordle-style puzzles by ranking the words that are still possible by how many common,
//! untested letters they contain.
//!
//! The solver can suggest the best next guess given the feedback seen so far, or play whole
//! games against known objective words to measure how well it does.
//!
//! ```
//! use letter_freq_solver::*;
//! use letter_freq_solver::scorers::LetterFrequencyScorer;
//!
//! let bank = WordBank::from_iterator(["crane", "goose", "moose", "noose", "loose"]).unwrap();
//! let solver = Solver::new(&bank, LetterFrequencyScorer::english(), SolverConfig::default())
//!     .unwrap();
//!
//! let mut restrictions = WordRestrictions::new(5);
//! restrictions.add_constraints([("crane", "00002")]).unwrap();
//!
//! let guesses = solver.select_top_n_guesses(&restrictions, 15);
//! assert_eq!(guesses.len(), 3);
//! ```

mod config;
mod data;
mod engine;
mod restrictions;
mod results;
pub mod scorers;
pub mod stats;

pub use config::*;
pub use data::Word;
pub use data::WordBank;
pub use engine::*;
pub use restrictions::WordRestrictions;
pub use results::*;

/// Lower-level building blocks used by the solver.
pub mod details {
    pub use crate::data::letter_index;
    pub use crate::data::LetterSet;
    pub use crate::data::UsedWords;
    pub use crate::data::ALPHABET_SIZE;
}
