use clap::{ArgGroup, Parser, ValueEnum};
use eight_puzzle::render::render_board;
use eight_puzzle::{search, Puzzle, SearchMode, SearchResult};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{warn, Level};

const DEFAULT_PUZZLE: [u8; 9] = [1, 2, 3, 4, 0, 6, 7, 5, 8];

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    UniformCost,
    Misplaced,
    Euclidean,
}

impl From<Algorithm> for SearchMode {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::UniformCost => SearchMode::UniformCost,
            Algorithm::Misplaced => SearchMode::AStarMisplaced,
            Algorithm::Euclidean => SearchMode::AStarEuclidean,
        }
    }
}

/// Solve the 8-puzzle with uniform cost search or A*.
#[derive(Debug, Parser)]
#[command(version, about)]
#[command(group(ArgGroup::new("source").args(["puzzle", "default", "random"])))]
struct Cli {
    #[arg(short, long, value_enum, default_value_t = Algorithm::Euclidean)]
    algorithm: Algorithm,

    /// Nine tiles in row order, 0 for the blank, e.g. "1 2 3 4 0 6 7 5 8".
    #[arg(short, long)]
    puzzle: Option<Puzzle>,

    /// Use the built-in puzzle.
    #[arg(long)]
    default: bool,

    /// Use a random solvable puzzle.
    #[arg(long)]
    random: bool,

    /// Log each expansion (-v) or every generated state (-vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> io::Result<bool> {
    let puzzle = if let Some(puzzle) = cli.puzzle {
        puzzle
    } else if cli.default {
        Puzzle::from_tiles(DEFAULT_PUZZLE).map_err(invalid_input)?
    } else if cli.random {
        let mut puzzle = Puzzle::goal();
        puzzle.shuffle();
        puzzle
    } else {
        prompt_puzzle()?
    };

    let mode = SearchMode::from(cli.algorithm);
    let mut stdout = io::stdout();

    println!("Solving with {}:", mode);
    render_board(&mut stdout, &puzzle)?;
    println!();

    if !puzzle.is_solvable() {
        warn!("puzzle has odd inversion parity; the search will exhaust its frontier");
    }

    match search(puzzle, mode) {
        SearchResult::Success(stats) => {
            println!("{}", stats);
            if !stats.moves.is_empty() {
                let moves: Vec<String> = stats.moves.iter().map(ToString::to_string).collect();
                println!("Blank moves: {}", moves.join(", "));
            }
            Ok(true)
        }
        SearchResult::Failure { reason } => {
            println!("Failed to find goal state: {}", reason);
            Ok(false)
        }
    }
}

fn prompt_puzzle() -> io::Result<Puzzle> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let ordinals = ["first", "second", "third"];

    println!("Enter your puzzle, use a zero to represent the blank.");
    let mut rows = Vec::with_capacity(ordinals.len());
    for ordinal in ordinals {
        print!(
            "Enter the {} row, use space or tabs between numbers: ",
            ordinal
        );
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before three rows were read",
            ));
        }
        rows.push(line);
    }
    println!();

    Puzzle::from_rows(&rows).map_err(invalid_input)
}

fn invalid_input(err: eight_puzzle::PuzzleError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}
