#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::io;

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    /// The letter is at this location in the objective word. Written as `2`.
    Correct,
    /// The letter is in the objective word, but not at this location. Written as `1`.
    PresentNotHere,
    /// The letter is not in the objective word. Written as `0`.
    NotPresent,
}

impl LetterResult {
    /// Parses a single feedback digit.
    pub fn from_code(code: char) -> Result<LetterResult, WordleError> {
        match code {
            '2' => Ok(LetterResult::Correct),
            '1' => Ok(LetterResult::PresentNotHere),
            '0' => Ok(LetterResult::NotPresent),
            other => Err(WordleError::InvalidFeedback(other)),
        }
    }

    /// Returns the feedback digit for this result.
    pub fn to_code(self) -> char {
        match self {
            LetterResult::Correct => '2',
            LetterResult::PresentNotHere => '1',
            LetterResult::NotPresent => '0',
        }
    }
}

/// Indicates that an error occurred while trying to guess the objective word.
#[derive(Debug)]
pub enum WordleError {
    /// Indicates that a word or feedback code had the wrong length. Includes the expected length.
    WordLength(usize),
    /// Indicates that the given character is not a lowercase ASCII letter.
    UnsupportedCharacter(char),
    /// Indicates that a feedback code contained something other than `0`, `1`, or `2`.
    InvalidFeedback(char),
    /// Indicates that a constraint was not given in the `guess:code` form.
    MalformedConstraint(String),
    /// Indicates that the solver was configured to allow no guesses.
    NoGuessesAllowed,
    /// Wraps a failure to read a word list.
    Io(io::Error),
}

impl fmt::Display for WordleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordleError::WordLength(length) => {
                write!(f, "words and feedback must have length {}", length)
            }
            WordleError::UnsupportedCharacter(letter) => {
                write!(f, "unsupported character {:?}, only a-z are allowed", letter)
            }
            WordleError::InvalidFeedback(code) => write!(
                f,
                "invalid feedback {:?}, expected '0', '1', or '2'",
                code
            ),
            WordleError::MalformedConstraint(constraint) => write!(
                f,
                "malformed constraint {:?}, expected <guess>:<feedback>",
                constraint
            ),
            WordleError::NoGuessesAllowed => write!(f, "max_tries must be at least 1"),
            WordleError::Io(e) => write!(f, "could not read words: {}", e),
        }
    }
}

impl Error for WordleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WordleError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for WordleError {
    fn from(e: io::Error) -> Self {
        WordleError::Io(e)
    }
}

/// The result of a single word guess.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GuessResult<'a> {
    /// The guess that was made.
    pub guess: &'a str,
    /// The result of each letter, provided in the same leter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl<'a> GuessResult<'a> {
    /// Parses a feedback code such as `"01020"` for the given guess.
    ///
    /// ```
    /// use letter_freq_solver::{GuessResult, LetterResult};
    ///
    /// let result = GuessResult::from_code("crane", "01020").unwrap();
    /// assert_eq!(result.results[3], LetterResult::Correct);
    /// ```
    pub fn from_code(guess: &'a str, code: &str) -> Result<GuessResult<'a>, WordleError> {
        let results = code
            .chars()
            .map(LetterResult::from_code)
            .collect::<Result<Vec<LetterResult>, WordleError>>()?;
        if results.len() != guess.len() {
            return Err(WordleError::WordLength(guess.len()));
        }
        Ok(GuessResult { guess, results })
    }

    /// Renders the results back into a feedback code.
    pub fn to_code(&self) -> String {
        self.results.iter().map(|result| result.to_code()).collect()
    }

    /// Returns true iff every letter was correct.
    pub fn is_correct(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Correct)
    }
}

/// Parses a `guess:code` pair, e.g. `crane:01020`.
pub fn parse_constraint(constraint: &str) -> Result<GuessResult<'_>, WordleError> {
    let mut parts = constraint.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(guess), Some(code), None) if !guess.is_empty() => {
            GuessResult::from_code(guess, code)
        }
        _ => Err(WordleError::MalformedConstraint(constraint.to_string())),
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// A guessed letter that is not in the right place is reported as
/// [`LetterResult::PresentNotHere`] whenever the objective contains it at all, even if the
/// objective's copies of that letter are already accounted for by other positions.
///
/// ```
/// use letter_freq_solver::get_result_for_guess;
///
/// let result = get_result_for_guess("those", "geese").unwrap();
/// assert_eq!(result.to_code(), "01122");
/// ```
pub fn get_result_for_guess<'a>(
    objective: &str,
    guess: &'a str,
) -> Result<GuessResult<'a>, WordleError> {
    if objective.len() != guess.len() {
        return Err(WordleError::WordLength(objective.len()));
    }
    let objective_bytes = objective.as_bytes();
    Ok(GuessResult {
        guess,
        results: guess
            .bytes()
            .enumerate()
            .map(|(index, letter)| {
                if objective_bytes[index] == letter {
                    return LetterResult::Correct;
                }
                if objective_bytes.contains(&letter) {
                    return LetterResult::PresentNotHere;
                }
                LetterResult::NotPresent
            })
            .collect(),
    })
}

/// How a game ended, along with the guesses that were made.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Box<str>>),
    /// Indicates that the guesser ran out of tries, and provides the guesses that were given.
    Failure(Vec<Box<str>>),
    /// Indicates that no word in the bank was consistent with the feedback, e.g. because the
    /// objective word is not in the bank. Provides the guesses that were given.
    Exhausted(Vec<Box<str>>),
}

/// Outcome code reported when no candidates remain.
pub const EXHAUSTED_OUTCOME: i32 = -1;

impl GameResult {
    /// The guesses made during the game, in order.
    pub fn guesses(&self) -> &[Box<str>] {
        match self {
            GameResult::Success(guesses)
            | GameResult::Failure(guesses)
            | GameResult::Exhausted(guesses) => guesses,
        }
    }

    /// Returns the numeric outcome: the number of tries if solved, `max_tries + 1` if the tries
    /// ran out, or [`EXHAUSTED_OUTCOME`] if no candidates remained.
    pub fn outcome_code(&self, max_tries: u32) -> i32 {
        match self {
            GameResult::Success(guesses) => guesses.len() as i32,
            GameResult::Failure(_) => max_tries as i32 + 1,
            GameResult::Exhausted(_) => EXHAUSTED_OUTCOME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn letter_result_code_round_trip() {
        for result in [
            LetterResult::Correct,
            LetterResult::PresentNotHere,
            LetterResult::NotPresent,
        ] {
            assert_eq!(LetterResult::from_code(result.to_code()).unwrap(), result);
        }
    }

    #[test]
    fn guess_result_from_code_rejects_bad_digit() {
        assert_matches!(
            GuessResult::from_code("crane", "01320"),
            Err(WordleError::InvalidFeedback('3'))
        );
    }

    #[test]
    fn guess_result_from_code_rejects_wrong_length() {
        assert_matches!(
            GuessResult::from_code("crane", "0102"),
            Err(WordleError::WordLength(5))
        );
    }

    #[test]
    fn parse_constraint_requires_one_separator() {
        assert_matches!(parse_constraint("crane:01020"), Ok(GuessResult { guess: "crane", .. }));
        assert_matches!(
            parse_constraint("crane"),
            Err(WordleError::MalformedConstraint(_))
        );
        assert_matches!(
            parse_constraint("crane:01020:2"),
            Err(WordleError::MalformedConstraint(_))
        );
        assert_matches!(
            parse_constraint(":01020"),
            Err(WordleError::MalformedConstraint(_))
        );
    }

    #[test]
    fn outcome_codes() {
        let guesses: Vec<Box<str>> = vec![Box::from("crane"), Box::from("goose")];

        assert_eq!(GameResult::Success(guesses.clone()).outcome_code(6), 2);
        assert_eq!(GameResult::Failure(guesses.clone()).outcome_code(6), 7);
        assert_eq!(GameResult::Exhausted(guesses).outcome_code(6), -1);
    }
}
