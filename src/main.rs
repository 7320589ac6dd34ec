//! Wordle Narrow CLI
//!
//! Interactive command-line interface for the solver.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use rayon::ThreadPoolBuilder;
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use wordle_narrow::solver::GAME_GUESSES;
use wordle_narrow::{GuessFeedback, Outcome, Session, Vocabulary, Word, WordleSolver};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Newline-delimited list of words that may be guessed but are never the answer.
    #[arg(long, global = true, default_value = "guesses.txt")]
    guesses: PathBuf,

    /// Newline-delimited list of words that may be the answer.
    #[arg(long, global = true, default_value = "answers.txt")]
    answers: PathBuf,

    /// Log more detail (-v for debug, -vv for trace). RUST_LOG overrides this.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively: the solver guesses, you enter the feedback (default).
    ///
    /// Feedback is one letter per position: r = not in the word,
    /// y = in the word elsewhere, g = in this position.
    Play,

    /// List the cheapest guesses after the given feedback.
    Suggest {
        /// A previous guess and its feedback, as WORD:FEEDBACK (e.g. roate:ryrrg).
        #[arg(short, long = "feedback", value_name = "WORD:FEEDBACK")]
        feedback: Vec<String>,

        /// How many guesses to list.
        #[arg(short = 'n', long, default_value = "5")]
        top: usize,
    },

    /// Let the solver play against a known answer.
    Solve {
        /// The answer to play against.
        target: String,
    },

    /// Play every answer and report the guess-count distribution.
    Benchmark {
        /// Only play the first N answers.
        #[arg(short, long)]
        games: Option<usize>,

        /// Worker threads; 0 uses rayon's default.
        #[arg(short, long, default_value = "0")]
        threads: usize,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let vocabulary = Vocabulary::load(&args.guesses, &args.answers)
        .inspect_err(|e| log::error!("{e}"))
        .context("loading word lists")?;
    let mut solver = WordleSolver::new(vocabulary);

    match args.command.unwrap_or(Command::Play) {
        Command::Play => play(solver),
        Command::Suggest { feedback, top } => {
            for entry in &feedback {
                solver.apply_feedback(parse_entry(entry)?);
            }
            suggest(&mut solver, top);
            Ok(())
        }
        Command::Solve { target } => {
            let target = Word::new(&target.to_lowercase())
                .with_context(|| format!("invalid target {target:?}"))?;
            solve(&mut solver, &target);
            Ok(())
        }
        Command::Benchmark { games, threads } => {
            ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("starting thread pool")?;
            benchmark(&solver, games);
            Ok(())
        }
    }
}

fn play(solver: WordleSolver) -> Result<()> {
    let vocabulary = solver.vocabulary();
    println!(
        "Loaded {} answers and {} guesses.",
        vocabulary.answers().len(),
        vocabulary.guesses().len()
    );
    println!("Enter feedback as r (absent), y (present) or g (exact) per letter.");
    println!();

    let stdin = io::stdin();
    let outcome = Session::new(solver).run(stdin.lock(), io::stdout())?;
    if outcome == Outcome::EndOfInput {
        log::info!("input closed before the game finished");
    }
    Ok(())
}

fn parse_entry(entry: &str) -> Result<GuessFeedback> {
    let (word, tokens) = entry
        .split_once(':')
        .ok_or_else(|| anyhow!("expected WORD:FEEDBACK, got {entry:?}"))?;
    let word = Word::new(&word.to_lowercase())
        .with_context(|| format!("invalid guess in {entry:?}"))?;
    GuessFeedback::parse(&word, &tokens.to_lowercase())
        .with_context(|| format!("invalid feedback in {entry:?}"))
}

fn suggest(solver: &mut WordleSolver, top: usize) {
    let remaining = solver.remaining_count();
    let ranked = solver.get_top_guesses(top);
    if ranked.is_empty() {
        println!("No possible answers remain.");
        return;
    }

    println!();
    println!("Remaining possibilities: {remaining}");
    println!("{:>4} {:>8} {:>10} Possible?", "#", "Word", "Cost");
    println!("{}", "-".repeat(36));
    for (i, analysis) in ranked.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>10} {}",
            i + 1,
            analysis.word.to_string().to_uppercase(),
            analysis.cost.unwrap_or_default(),
            if analysis.is_possible_answer { "✓" } else { "" }
        );
    }
    println!();
}

fn solve(solver: &mut WordleSolver, target: &Word) {
    println!("Solving for: {}", target.to_string().to_uppercase());
    println!();

    let guesses = solver.solve_for_target(target);
    for (i, (guess, code)) in guesses.iter().enumerate() {
        println!("Guess {}: {} → {}", i + 1, guess.to_string().to_uppercase(), code);
    }

    println!();
    match guesses.last() {
        Some((_, code)) if code.is_win() => println!("Solved in {} guesses.", guesses.len()),
        _ => println!("Not solved in {} guesses.", guesses.len()),
    }
}

fn benchmark(solver: &WordleSolver, games: Option<usize>) {
    let start = Instant::now();
    let report = solver.benchmark_guess_distribution(games);
    let elapsed = start.elapsed();
    if report.games == 0 {
        println!("No games played.");
        return;
    }

    println!("Guess distribution:");
    for (guesses, count) in &report.distribution {
        let pct = *count as f64 / report.games as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / report.games).max(1));
        println!("  {guesses:>2} guesses: {count:>5} ({pct:>5.1}%) {bar}");
    }
    println!();
    println!("Average guesses: {:.3}", report.average());
    println!("Total games: {}", report.games);
    println!("Time elapsed: {elapsed:.2?}");
    if report.unsolved > 0 {
        println!("Unsolved: {}", report.unsolved);
    }
    if report.over_limit() > 0 {
        println!(
            "Solved in more than {GAME_GUESSES} guesses: {}",
            report.over_limit()
        );
    }
}
