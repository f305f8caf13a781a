use crate::results::WordleError;
use std::fmt;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

/// Number of letters in the supported alphabet (`a` to `z`).
pub const ALPHABET_SIZE: usize = 26;

/// Converts a lowercase ASCII letter into its index in the alphabet.
pub fn letter_index(letter: u8) -> Result<usize, WordleError> {
    if letter.is_ascii_lowercase() {
        return Ok((letter - b'a') as usize);
    }
    Err(WordleError::UnsupportedCharacter(letter as char))
}

/// A set of letters from `a` to `z`, stored as a bitmask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The set containing no letters.
    pub const EMPTY: LetterSet = LetterSet(0);

    /// Builds the set of distinct letters in `word`.
    pub fn from_word(word: &str) -> Result<LetterSet, WordleError> {
        let mut set = LetterSet::EMPTY;
        for letter in word.bytes() {
            set.insert(letter)?;
        }
        Ok(set)
    }

    /// Adds the given letter. Returns true if it was not already present.
    pub fn insert(&mut self, letter: u8) -> Result<bool, WordleError> {
        let bit = 1 << letter_index(letter)?;
        let is_new = self.0 & bit == 0;
        self.0 |= bit;
        Ok(is_new)
    }

    /// Returns true iff the letter is in the set. Unsupported characters are never in the set.
    #[inline]
    pub fn contains(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true iff every letter in this set is also in `other`.
    #[inline]
    pub fn is_subset(&self, other: &LetterSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns true iff the two sets share at least one letter.
    #[inline]
    pub fn intersects(&self, other: &LetterSet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn union(&self, other: &LetterSet) -> LetterSet {
        LetterSet(self.0 | other.0)
    }

    pub fn intersection(&self, other: &LetterSet) -> LetterSet {
        LetterSet(self.0 & other.0)
    }

    /// Iterates over the letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0..ALPHABET_SIZE as u8)
            .filter(|index| self.0 & (1 << index) != 0)
            .map(|index| (b'a' + index) as char)
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A candidate word, along with the set of letters it contains.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word {
    value: Arc<str>,
    letters: LetterSet,
}

impl Word {
    /// Constructs a word from the given text, which is trimmed and converted to lower case.
    ///
    /// ```
    /// use letter_freq_solver::Word;
    ///
    /// let word = Word::new(" Goose").unwrap();
    /// assert_eq!(word.value(), "goose");
    /// assert_eq!(word.letters().len(), 4);
    /// assert!(Word::new("caf\u{e9}s").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Word, WordleError> {
        let value = text.trim().to_lowercase();
        let letters = LetterSet::from_word(&value)?;
        Ok(Word {
            value: Arc::from(value),
            letters,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns a shared handle to the word's text.
    pub fn shared_value(&self) -> Arc<str> {
        Arc::clone(&self.value)
    }

    pub fn letters(&self) -> &LetterSet {
        &self.letters
    }

    /// The letter at the given index, as an ASCII byte.
    #[inline]
    pub fn letter_at(&self, index: usize) -> u8 {
        self.value.as_bytes()[index]
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// Contains all the possible words for this Wordle game, in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Word>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word will be trimmed and converted to
    /// lower case. Blank lines are skipped. All words must have the same length.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let lines = word_reader
            .lines()
            .collect::<Result<Vec<String>, std::io::Error>>()?;
        WordBank::from_iterator(lines)
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    ///
    /// Each word will be trimmed and converted to lower case. Empty words are skipped. All words
    /// must have the same length.
    pub fn from_iterator<S>(words: impl IntoIterator<Item = S>) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
    {
        let mut word_length = 0;
        let all_words = words
            .into_iter()
            .filter(|word| !word.as_ref().trim().is_empty())
            .map(|word| {
                let word = Word::new(word.as_ref())?;
                if word_length == 0 {
                    word_length = word.len();
                } else if word.len() != word_length {
                    return Err(WordleError::WordLength(word_length));
                }
                Ok(word)
            })
            .collect::<Result<Vec<Word>, WordleError>>()?;
        Ok(WordBank {
            all_words,
            word_length,
        })
    }

    /// Returns the position of the given word in the bank, if present.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.all_words.iter().position(|other| other.value() == word)
    }

    /// Returns the number of letters in each word, or zero if the bank is empty.
    pub fn word_length(&self) -> usize {
        self.word_length
    }
}

impl Deref for WordBank {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

/// Tracks which words in a [`WordBank`] have already been the answer to a game.
///
/// Indices match the positions of words in the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedWords {
    used: Vec<bool>,
}

impl UsedWords {
    /// Creates a tracker with no words used.
    pub fn new(bank: &WordBank) -> UsedWords {
        UsedWords {
            used: vec![false; bank.len()],
        }
    }

    /// Marks the word at the given index as used.
    pub fn mark(&mut self, index: usize) {
        if let Some(used) = self.used.get_mut(index) {
            *used = true;
        }
    }

    pub fn is_used(&self, index: usize) -> bool {
        self.used.get(index).copied().unwrap_or(false)
    }

    /// Returns the number of used words.
    pub fn count(&self) -> usize {
        self.used.iter().filter(|used| **used).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn letter_set_from_word_dedupes() -> Result<(), WordleError> {
        let set = LetterSet::from_word("sheep")?;

        assert_eq!(set.len(), 4);
        assert_eq!(set.iter().collect::<String>(), "ehps");
        assert!(set.contains(b'e'));
        assert!(!set.contains(b'a'));
        assert!(!set.contains(b'E'));
        Ok(())
    }

    #[test]
    fn letter_set_insert_reports_new_letters() -> Result<(), WordleError> {
        let mut set = LetterSet::EMPTY;

        assert!(set.insert(b'q')?);
        assert!(!set.insert(b'q')?);
        assert_matches!(set.insert(b'1'), Err(WordleError::UnsupportedCharacter('1')));
        Ok(())
    }

    #[test]
    fn letter_set_relations() -> Result<(), WordleError> {
        let abc = LetterSet::from_word("abc")?;
        let ab = LetterSet::from_word("ab")?;
        let xyz = LetterSet::from_word("xyz")?;

        assert!(ab.is_subset(&abc));
        assert!(!abc.is_subset(&ab));
        assert!(LetterSet::EMPTY.is_subset(&xyz));
        assert!(ab.intersects(&abc));
        assert!(!abc.intersects(&xyz));
        assert_eq!(abc.union(&xyz).len(), 6);
        assert_eq!(abc.intersection(&ab), ab);
        Ok(())
    }

    #[test]
    fn word_letters_match_value() -> Result<(), WordleError> {
        let word = Word::new("Speed")?;

        assert_eq!(word.value(), "speed");
        assert_eq!(*word.letters(), LetterSet::from_word("spde")?);
        assert_eq!(word.letter_at(1), b'p');
        Ok(())
    }

    #[test]
    fn word_rejects_non_letters() {
        assert_matches!(Word::new("ab-cd"), Err(WordleError::UnsupportedCharacter('-')));
    }

    #[test]
    fn used_words_ignores_out_of_range() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(["goose", "moose"])?;
        let mut used = UsedWords::new(&bank);

        used.mark(1);
        used.mark(7);

        assert!(!used.is_used(0));
        assert!(used.is_used(1));
        assert!(!used.is_used(7));
        assert_eq!(used.count(), 1);
        Ok(())
    }
}
