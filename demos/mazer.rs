//! Generate a maze and watch it being solved in the terminal.
//!
//! Run: cargo run --bin mazer -- --size 31 --generator aldous-broder
//!
//! With `--headless` the maze is generated and solved once and printed as
//! text. A missing `--start` or `--end` defaults to the first or last open
//! cell; a given one that is a wall or off the grid is an error.

use std::time::Duration;

use clap::Parser;
use mazer_core::Coord;
use mazer_demos::{Session, Settings, Status, parse_coord, term};
use mazer_gen::GeneratorKind;
use mazer_paths::{SearchAlgorithm, Step, StepKind};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze side length; clamped to 21..=51 and rounded up to odd
    #[arg(long, default_value_t = 21)]
    size: usize,

    /// Carving algorithm: backtracking or aldous-broder
    #[arg(long, default_value_t = GeneratorKind::Backtracking)]
    generator: GeneratorKind,

    /// Search strategy: bfs or bidirectional
    #[arg(long, default_value_t = SearchAlgorithm::Bfs)]
    solver: SearchAlgorithm,

    /// Pause between animation steps, in milliseconds
    #[arg(long, default_value_t = 25)]
    delay_ms: u64,

    /// Random seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Start cell as ROW,COL
    #[arg(long, value_parser = parse_coord)]
    start: Option<Coord>,

    /// End cell as ROW,COL
    #[arg(long, value_parser = parse_coord)]
    end: Option<Coord>,

    /// Solve once and print the result instead of opening the terminal UI
    #[arg(long)]
    headless: bool,
}

fn headless(session: &mut Session<StdRng>) -> Result<(), Box<dyn std::error::Error>> {
    session.default_endpoints();

    let mut visits = 0usize;
    let outcome = session.solve(&mut |step: &Step<'_>| {
        if step.kind == StepKind::Visit {
            visits += 1;
        }
        log::trace!("{:?} {} ({:?})", step.kind, step.coord, step.side);
    })?;
    log::debug!("{visits} visitation steps");

    println!("{}", session.grid());
    match session.status() {
        Status::Solved { cells, .. } => println!("solved: {cells} cells, {visits} visited"),
        Status::NoPath { .. } => println!("no path after {visits} visited cells"),
        Status::Idle | Status::Cancelled => {}
    }
    if let Some(path) = outcome.path() {
        log::info!("path from {} to {}", path.start(), path.end());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let settings = Settings {
        size: args.size,
        generator: args.generator,
        solver: args.solver,
        delay: Duration::from_millis(args.delay_ms),
    };

    let result = Session::new(settings, rng)
        .map_err(Box::<dyn std::error::Error>::from)
        .and_then(|mut session| {
            session.set_endpoints(args.start, args.end)?;
            if args.headless {
                headless(&mut session)
            } else {
                term::run(&mut session)
            }
        });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
