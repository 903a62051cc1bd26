use std::{
    fs,
    io::{self, BufRead, Write},
    process,
};

use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};

use battlegrid::{fleet, Board, Game, GameEnd};

use self::logging::init_logging;

mod logging;

/// Exit status when every ship was sunk.
const EXIT_SUNK: i32 = 0;
/// Exit status when the fleet description was rejected.
const EXIT_SETUP: i32 = 1;
/// Exit status when the guesses ran out with ships still afloat.
const EXIT_AFLOAT: i32 = 2;
/// Exit status when an input could not be read.
const EXIT_IO: i32 = 3;

fn main() {
    init_logging();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Replays a list of guesses against a fleet placed from a description file.")
        .setting(AppSettings::ArgsNegateSubcommands)
        .arg(
            Arg::with_name("fleet")
                .value_name("FLEET")
                .help("fleet description file; read from stdin if omitted")
                .index(1),
        )
        .arg(
            Arg::with_name("guesses")
                .value_name("GUESSES")
                .help("guess list file; read from stdin if omitted")
                .index(2),
        )
        .arg(
            Arg::with_name("show_board")
                .long("show-board")
                .help("print the board after placing the fleet"),
        )
        .subcommand(
            SubCommand::with_name("generate")
                .about("print a random valid fleet description")
                .arg(
                    Arg::with_name("seed")
                        .long("seed")
                        .value_name("SEED")
                        .help("fix the RNG seed for a reproducible fleet")
                        .takes_value(true),
                ),
        )
        .get_matches();

    process::exit(exit_status(run(&matches)));
}

/// Map the outcome of [`run`] to a process exit status, reporting any error on stderr.
fn exit_status(result: Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            EXIT_IO
        }
    }
}

/// Dispatch to the selected command, returning the exit status.
fn run(matches: &ArgMatches) -> Result<i32> {
    if let Some(generate) = matches.subcommand_matches("generate") {
        generate_fleet(generate)?;
        return Ok(0);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let fleet_path = path_or_prompt(matches.value_of("fleet"), &mut input)?;
    let guesses_path = path_or_prompt(matches.value_of("guesses"), &mut input)?;
    let fleet_lines = read_lines(&fleet_path)?;
    let guess_lines = read_lines(&guesses_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    play(
        &fleet_lines,
        &guess_lines,
        matches.is_present("show_board"),
        &mut out,
    )
}

/// Place the fleet and replay the guesses, writing the game output to `out`.
fn play(
    fleet_lines: &[String],
    guess_lines: &[String],
    show_board: bool,
    out: &mut impl Write,
) -> Result<i32> {
    let records = fleet::parse_records(fleet_lines);
    let board = match records.and_then(|records| Board::from_records(&records)) {
        Ok(board) => board,
        Err(err) => {
            writeln!(out, "ERROR: {}", err)?;
            return Ok(EXIT_SETUP);
        }
    };
    if show_board {
        write!(out, "{}", board)?;
    }

    let mut game = Game::new(board);
    let replay = game.replay(guess_lines);
    write!(out, "{}", replay)?;
    out.flush()?;

    Ok(match replay.end() {
        GameEnd::AllSunk => {
            info!("fleet sunk after {} guesses", replay.consumed());
            EXIT_SUNK
        }
        GameEnd::OutOfGuesses { .. } => {
            warn!("{}", replay.end());
            EXIT_AFLOAT
        }
    })
}

/// Print a random fleet description, one record per line.
fn generate_fleet(matches: &ArgMatches) -> Result<()> {
    let records = match matches.value_of("seed") {
        Some(seed) => {
            let seed = seed
                .parse()
                .with_context(|| format!("invalid seed {:?}", seed))?;
            fleet::random_fleet(&mut StdRng::seed_from_u64(seed))
        }
        None => fleet::random_fleet(&mut rand::thread_rng()),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

/// Use the path given on the command line, or read one line from `input` naming it.
fn path_or_prompt(arg: Option<&str>, input: &mut impl BufRead) -> Result<String> {
    if let Some(path) = arg {
        return Ok(path.to_owned());
    }
    let mut buf = String::new();
    if input.read_line(&mut buf).context("failed to read file name")? == 0 {
        anyhow::bail!("expected a file name on stdin");
    }
    Ok(buf.trim().to_owned())
}

/// Read every line of the file at `path`, with trailing whitespace removed.
fn read_lines(path: &str) -> Result<Vec<String>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    Ok(contents
        .lines()
        .map(|line| line.trim_end().to_owned())
        .collect())
}
