#![warn(non_snake_case)]
//! # dungeon_gen command line
//!
//! Loads a generator configuration and a room catalog, runs a batch of seeded
//! generation attempts and prints the first dungeon that came out of it,
//! either as an ASCII map or as JSON.
//!
//! With `--interactive` a single generator is kept alive instead: each `g`
//! disposes the previous dungeon and generates a new one in the same scene,
//! drawing fresh randomness from one RNG seeded by `--seed`. `q` quits.
//!
//! ## Exit codes
//! - `0`: a dungeon was printed
//! - `1`: unreadable or invalid configuration/catalog
//! - `2`: no layout was found
//! - `3`: the iteration limit was exceeded (in batch mode, by at least one
//!   attempt while none succeeded)

use clap::Parser;
use dungeon_gen::generator::{
    first_success, generate_batch, seeded_rng, BatchAttempt, DungeonGenerator, GeneratorConfig, Outcome,
};
use dungeon_gen::layout::{Layout, LayoutRecorder};
use dungeon_gen::rooms::RoomCatalog;
use log::{debug, info};
use rand::Rng;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Most attempts a single batch may run.
const MAX_ATTEMPTS: u64 = 4096;

/// Backtracking dungeon layout generator
#[derive(Parser, Debug)]
#[command(name = "dungeon_gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Generator configuration (JSON: max_size, threshold)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Room catalog (JSON: start, target, rooms)
    #[arg(long = "catalog")]
    catalog: Option<PathBuf>,

    /// First seed of the batch (or the interactive RNG seed); random if omitted
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Number of attempts in the batch, run in parallel
    #[arg(
        long = "attempts",
        default_value_t = 16,
        value_parser = clap::value_parser!(u64).range(1..=MAX_ATTEMPTS)
    )]
    attempts: u64,

    /// Print the layout as JSON instead of an ASCII map
    #[arg(long = "json")]
    json: bool,

    /// Keep one generator and read commands from stdin (g: generate, q: quit)
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,
}

/// How one round of generation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Round {
    Generated,
    Exhausted,
    BudgetExceeded,
}

impl Round {
    fn exit_code(self) -> ExitCode {
        match self {
            Round::Generated => ExitCode::SUCCESS,
            Round::Exhausted => ExitCode::from(2),
            Round::BudgetExceeded => ExitCode::from(3),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    info!("dungeon_gen starting...");

    let args = Args::parse();
    match run(&args) {
        Ok(round) => {
            info!("dungeon_gen exiting.");
            round.exit_code()
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Round, Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => RoomCatalog::load(path)?,
        None => RoomCatalog::standard(),
    };
    debug!("Using {:?} with {} room prototypes", config, catalog.rooms.len());

    let seed = args.seed.unwrap_or_else(rand::random);
    if !args.interactive {
        return run_batch(&config, &catalog, seed, args.attempts, args.json);
    }

    let mut generator = DungeonGenerator::new(config, catalog, LayoutRecorder::new())?;
    let mut rng = seeded_rng(seed);
    let mut stdout = io::stdout();
    let mut round = regenerate(&mut generator, &mut rng, args.json, &mut stdout)?;

    prompt(&mut stdout)?;
    for line in io::stdin().lock().lines() {
        match line?.trim() {
            "g" => round = regenerate(&mut generator, &mut rng, args.json, &mut stdout)?,
            "q" => break,
            "" => {}
            other => eprintln!("unknown command `{other}` (g: generate, q: quit)"),
        }
        prompt(&mut stdout)?;
    }
    Ok(round)
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn print_layout<W: Write>(out: &mut W, layout: &Layout, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        writeln!(out, "{}", layout.to_json()?)?;
    } else {
        writeln!(out, "{}", layout.render_ascii())?;
    }
    Ok(())
}

/// Clears the generator's previous dungeon and builds the next one in place.
fn regenerate<R: Rng + ?Sized, W: Write>(
    generator: &mut DungeonGenerator<LayoutRecorder>,
    rng: &mut R,
    json: bool,
    out: &mut W,
) -> Result<Round, Box<dyn Error>> {
    match generator.generate(rng) {
        Ok(Outcome::Generated(report)) => {
            info!(
                "Generated {} rooms in {} iterations",
                report.rooms_placed, report.iterations
            );
            print_layout(out, &generator.scene().layout(), json)?;
            Ok(Round::Generated)
        }
        Ok(Outcome::Exhausted(report)) => {
            eprintln!("no layout found after {} iterations", report.iterations);
            Ok(Round::Exhausted)
        }
        Err(err) if err.is_budget_exhausted() => {
            eprintln!("generation aborted: {err}");
            Ok(Round::BudgetExceeded)
        }
        Err(err) => Err(err.into()),
    }
}

fn run_batch(
    config: &GeneratorConfig,
    catalog: &RoomCatalog,
    first_seed: u64,
    attempts: u64,
    json: bool,
) -> Result<Round, Box<dyn Error>> {
    let seeds: Vec<u64> = (0..attempts).map(|offset| first_seed.wrapping_add(offset)).collect();
    let batch = generate_batch(config, catalog, &seeds)?;

    let Some((seed, layout)) = first_success(&batch).and_then(|w| w.layout().map(|l| (w.seed, l))) else {
        return Ok(report_failure(&batch));
    };

    info!(
        "Seed {} produced {} rooms and {} hallways",
        seed,
        layout.rooms.len(),
        layout.hallways.len()
    );
    let mut stdout = io::stdout();
    if !json {
        writeln!(stdout, "seed {}", seed)?;
    }
    print_layout(&mut stdout, layout, json)?;
    Ok(Round::Generated)
}

fn report_failure(batch: &[BatchAttempt]) -> Round {
    let over_budget = batch
        .iter()
        .filter(|attempt| matches!(&attempt.result, Err(err) if err.is_budget_exhausted()))
        .count();
    if over_budget > 0 {
        eprintln!(
            "generation aborted: {} of {} attempts exceeded the iteration limit",
            over_budget,
            batch.len()
        );
        Round::BudgetExceeded
    } else {
        eprintln!("no layout found in {} attempts", batch.len());
        Round::Exhausted
    }
}
