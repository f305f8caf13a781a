use crate::data::LetterSet;
use crate::data::Word;
use crate::data::letter_index;
use crate::results::GuessResult;
use crate::results::LetterResult;
use crate::results::WordleError;
use log::trace;
use std::result::Result;

/// Defines letter restrictions that a word must adhere to, accumulated from every guess result
/// seen so far in a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRestrictions {
    word_length: usize,
    /// Letters known to be somewhere in the word.
    included_letters: LetterSet,
    /// Letters known not to be in the word.
    excluded_letters: LetterSet,
    /// Letters known to be at each location.
    here: Vec<LetterSet>,
    /// Letters known to be in the word, but not at each location.
    not_here: Vec<LetterSet>,
}

impl WordRestrictions {
    /// Creates a `WordRestrictions` object for the given word length with all letters unknown.
    pub fn new(word_length: usize) -> WordRestrictions {
        WordRestrictions {
            word_length,
            included_letters: LetterSet::EMPTY,
            excluded_letters: LetterSet::EMPTY,
            here: vec![LetterSet::EMPTY; word_length],
            not_here: vec![LetterSet::EMPTY; word_length],
        }
    }

    /// Returns the restrictions imposed by the given result.
    pub fn from_result(result: &GuessResult) -> Result<WordRestrictions, WordleError> {
        let mut restrictions = WordRestrictions::new(result.guess.len());
        restrictions.update(result)?;
        Ok(restrictions)
    }

    /// Adds restrictions arising from the given guess result.
    ///
    /// The result is checked before anything is recorded, so an invalid result leaves these
    /// restrictions unchanged.
    pub fn update(&mut self, guess_result: &GuessResult) -> Result<(), WordleError> {
        if guess_result.guess.len() != self.word_length
            || guess_result.results.len() != self.word_length
        {
            return Err(WordleError::WordLength(self.word_length));
        }
        for letter in guess_result.guess.bytes() {
            letter_index(letter)?;
        }
        trace!("adding restrictions from {}", guess_result.to_code());
        for (index, (letter, result)) in guess_result
            .guess
            .bytes()
            .zip(guess_result.results.iter())
            .enumerate()
        {
            match result {
                LetterResult::Correct => {
                    self.included_letters.insert(letter)?;
                    self.here[index].insert(letter)?;
                }
                LetterResult::PresentNotHere => {
                    self.included_letters.insert(letter)?;
                    self.not_here[index].insert(letter)?;
                }
                LetterResult::NotPresent => {
                    self.excluded_letters.insert(letter)?;
                }
            }
        }
        Ok(())
    }

    /// Adds restrictions for each `(guess, feedback code)` pair, e.g. `("crane", "01020")`.
    ///
    /// If any pair is invalid, none of them are recorded.
    ///
    /// ```
    /// use letter_freq_solver::{Word, WordRestrictions};
    ///
    /// let mut restrictions = WordRestrictions::new(5);
    /// restrictions.add_constraints([("crane", "00002"), ("those", "00222")]).unwrap();
    ///
    /// assert!(restrictions.is_satisfied_by(&Word::new("goose").unwrap()));
    /// assert!(!restrictions.is_satisfied_by(&Word::new("crane").unwrap()));
    /// ```
    pub fn add_constraints<G, C>(
        &mut self,
        constraints: impl IntoIterator<Item = (G, C)>,
    ) -> Result<(), WordleError>
    where
        G: AsRef<str>,
        C: AsRef<str>,
    {
        let mut updated = self.clone();
        for (guess, code) in constraints {
            updated.update(&GuessResult::from_code(guess.as_ref(), code.as_ref())?)?;
        }
        *self = updated;
        Ok(())
    }

    /// Returns true iff no guess results have been added yet.
    pub fn is_unconstrained(&self) -> bool {
        self.included_letters.is_empty() && self.excluded_letters.is_empty()
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        if word.len() != self.word_length {
            return false;
        }
        if self.is_unconstrained() {
            return true;
        }
        self.included_letters.is_subset(word.letters())
            && !self.excluded_letters.intersects(word.letters())
            && (0..self.word_length).all(|index| {
                let letter = word.letter_at(index);
                !self.not_here[index].contains(letter)
                    && (self.here[index].is_empty() || self.here[index].contains(letter))
            })
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Letters known to be somewhere in the word.
    pub fn included_letters(&self) -> &LetterSet {
        &self.included_letters
    }

    /// Letters known not to be in the word.
    pub fn excluded_letters(&self) -> &LetterSet {
        &self.excluded_letters
    }

    /// Letters known to be at the given location.
    pub fn here(&self, index: usize) -> &LetterSet {
        &self.here[index]
    }

    /// Letters known to be in the word, but not at the given location.
    pub fn not_here(&self, index: usize) -> &LetterSet {
        &self.not_here[index]
    }
}
