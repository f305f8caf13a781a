use letter_freq_solver::scorers::*;
use letter_freq_solver::*;

use std::result::Result;

#[test]
fn english_scorer_prefers_common_letters() -> Result<(), WordleError> {
    let scorer = LetterFrequencyScorer::english();
    let restrictions = WordRestrictions::new(5);

    let irate = scorer.score_word(&Word::new("irate")?, &restrictions);
    let fuzzy = scorer.score_word(&Word::new("fuzzy")?, &restrictions);
    let eerie = scorer.score_word(&Word::new("eerie")?, &restrictions);

    assert!(irate > fuzzy);
    // Repeated letters only count once.
    assert!(irate > eerie);
    Ok(())
}

#[test]
fn known_letters_lower_the_score() -> Result<(), WordleError> {
    let scorer = LetterFrequencyScorer::english();
    let mut restrictions = WordRestrictions::new(5);
    let stare = Word::new("stare")?;
    let before = scorer.score_word(&stare, &restrictions);

    restrictions.add_constraints([("crane", "00202")])?;
    let after = scorer.score_word(&stare, &restrictions);

    let expected = before - scorer.weight(b'a') - scorer.weight(b'e');
    assert!((after - expected).abs() < 1e-12);
    Ok(())
}

#[test]
fn excluded_letters_still_score() -> Result<(), WordleError> {
    let scorer = LetterFrequencyScorer::english();
    let mut restrictions = WordRestrictions::new(5);
    let stare = Word::new("stare")?;
    let before = scorer.score_word(&stare, &restrictions);

    restrictions.add_constraints([("xxxxx", "00000")])?;

    assert_eq!(scorer.score_word(&stare, &restrictions), before);
    Ok(())
}

#[test]
fn scorer_is_deterministic() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(["crane", "goose", "speed"])?;
    let scorer = LetterFrequencyScorer::from_words(&bank);
    let restrictions = WordRestrictions::new(5);

    for word in bank.iter() {
        assert_eq!(
            scorer.score_word(word, &restrictions),
            scorer.score_word(word, &restrictions)
        );
    }
    Ok(())
}
