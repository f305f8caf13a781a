use clap::{Parser, Subcommand, ValueEnum};
use letter_freq_solver::scorers::{scorer_for_config, WordScorer};
use letter_freq_solver::stats::*;
use letter_freq_solver::*;
use log::{debug, warn};
use std::error::Error;
use std::fs;
use std::fs::File;
use std::io;
use std::time::Instant;

/// Suggests the best next Wordle guess, or plays Wordle against itself to see how well it does.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: String,

    /// Path to a RON file with solver options. Flags given here take precedence.
    #[arg(short, long)]
    config: Option<String>,

    /// Guess words in word-list order instead of ranking them by letter frequency.
    #[arg(long)]
    no_letter_frequency: bool,

    /// Keep suggesting words that have already been answers.
    #[arg(long)]
    include_used: bool,

    /// Where the letter-frequency weights come from.
    #[arg(long, value_enum)]
    weights: Option<Weights>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the best guesses given the feedback seen so far.
    Best {
        /// Guesses with their feedback, e.g. `crane:01020`, where `0` means the letter is not
        /// in the word, `1` means it is elsewhere in the word, and `2` means it is in the right
        /// place.
        constraints: Vec<String>,

        /// Path to a file of words that were already answers. These will not be suggested.
        #[arg(long)]
        used_file: Option<String>,
    },
    /// Run a single game with the given word.
    Single { word: String },
    /// Run a game for every word in a test set, and summarize how many guesses each took.
    Stats {
        /// Which words to run games for.
        #[arg(long, value_enum)]
        subset: Option<Subset>,

        /// Path to the word list for the `previously-used` and `hard-words` subsets.
        #[arg(long)]
        subset_file: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Weights {
    /// Letter frequencies in English text.
    English,
    /// The fraction of words in the words file that contain each letter.
    Bank,
}

impl From<Weights> for LetterWeights {
    fn from(weights: Weights) -> Self {
        match weights {
            Weights::English => LetterWeights::English,
            Weights::Bank => LetterWeights::WordBank,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Subset {
    All,
    PrefixA,
    PreviouslyUsed,
    HardWords,
}

impl From<Subset> for TestSubset {
    fn from(subset: Subset) -> Self {
        match subset {
            Subset::All => TestSubset::All,
            Subset::PrefixA => TestSubset::PrefixA,
            Subset::PreviouslyUsed => TestSubset::PreviouslyUsed,
            Subset::HardWords => TestSubset::HardWords,
        }
    }
}

type BoxedSolver<'a> = Solver<'a, Box<dyn WordScorer + Send + Sync>>;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();
    let config = load_config(&args)?;
    debug!("Using {:?}", config);
    println!("File: {}", args.words_file);

    let word_bank = WordBank::from_reader(io::BufReader::new(File::open(&args.words_file)?))?;
    println!("There are {} possible words.", word_bank.len());

    let scorer = scorer_for_config(&config, &word_bank);
    let mut solver = Solver::new(&word_bank, scorer, config)?;

    match &args.command {
        Command::Best {
            constraints,
            used_file,
        } => print_best_guesses(&mut solver, constraints, used_file.as_deref())?,
        Command::Single { word } => play_single_game(&mut solver, word)?,
        Command::Stats { subset_file, .. } => run_stats(&mut solver, subset_file.as_deref())?,
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn load_config(args: &Args) -> Result<SolverConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => ron::from_str::<SolverConfig>(&fs::read_to_string(path)?)?,
        None => SolverConfig::default(),
    };
    if args.no_letter_frequency {
        config.use_letter_frequency = false;
    }
    if args.include_used {
        config.skip_used_words = false;
    }
    if let Some(weights) = args.weights {
        config.letter_weights = weights.into();
    }
    if let Command::Stats {
        subset: Some(subset),
        ..
    } = args.command
    {
        config.test_subset = subset.into();
    }
    Ok(config)
}

fn read_words(path: &str) -> Result<Vec<Word>, WordleError> {
    let bank = WordBank::from_reader(io::BufReader::new(File::open(path)?))?;
    Ok(bank.to_vec())
}

fn print_best_guesses(
    solver: &mut BoxedSolver,
    constraints: &[String],
    used_file: Option<&str>,
) -> Result<(), WordleError> {
    let mut restrictions = WordRestrictions::new(solver.config().word_length);
    for constraint in constraints {
        restrictions.update(&parse_constraint(constraint)?)?;
    }
    if let Some(path) = used_file {
        for word in read_words(path)? {
            if !solver.mark_used(word.value()) {
                warn!("Used word {} is not in the word list.", word);
            }
        }
    }

    let possible_words = solver.possible_words(&restrictions);
    let best_guesses = possible_words
        .iter()
        .take(solver.config().display_limit)
        .map(|scored| scored.word.value())
        .collect::<Vec<&str>>();
    println!("{}: {:?}", possible_words.len(), best_guesses);
    Ok(())
}

fn play_single_game(solver: &mut BoxedSolver, word: &str) -> Result<(), WordleError> {
    match solver.solve(word)? {
        GameResult::Success(guesses) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::Failure(guesses) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::Exhausted(guesses) => {
            println!(
                "I ran out of possible words after {} guesses. Is \"{}\" in the word list?",
                guesses.len(),
                word
            );
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
    }
    Ok(())
}

fn run_stats(solver: &mut BoxedSolver, subset_file: Option<&str>) -> Result<(), Box<dyn Error>> {
    let subset = solver.config().test_subset;
    let curated = match subset_file {
        Some(path) if subset.is_curated() => read_words(path)?,
        None if subset.is_curated() => {
            return Err(format!("The {:?} subset needs a --subset-file.", subset).into());
        }
        _ => Vec::new(),
    };
    let objectives = select_test_words(subset, solver.bank(), &curated);
    println!("Playing {} games.", objectives.len());

    let report = play_all(solver, &objectives)?;
    let max_tries = solver.config().max_tries;
    for (word, result) in &report.results {
        println!("{}: {}", word, result.outcome_code(max_tries));
    }

    println!("Solved {} words. Results:", report.histogram.num_games());
    for num_guesses in 1..=max_tries as i32 {
        println!("{}: {}", num_guesses, report.histogram.count(num_guesses));
    }
    println!("X: {}", report.histogram.num_out_of_tries());
    println!("Stumped: {}", report.histogram.num_exhausted());

    if let Some((average, std_dev)) = report.histogram.solved_tries_stats() {
        println!(
            "\n**Average number of guesses:** {:.2} +/- {:.2}",
            average, std_dev
        );
    }
    Ok(())
}
