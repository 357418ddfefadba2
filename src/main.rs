//! Dartboard entry point
//!
//! Runs the warm-up throws, a darts game, the pi estimate and the
//! screensaver, prompting on the console for the counts.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use dartboard::renderer::{Canvas, NullSurface, Surface};
use dartboard::sim::{
    Clock, Dartboard, DartsOutcome, Estimate, Screensaver, ScreensaverReport, SeededSource,
    SystemClock, Winner, monte_pi, play_darts,
};
use dartboard::{DartsError, Result, Settings};

fn main() {
    env_logger::init();
    log::info!("Dartboard starting...");

    if let Err(err) = run() {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::load_default()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    // Only keep draw commands when they will be written out
    let session = match settings.svg_dir.clone() {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            play(
                &settings,
                &mut Canvas::default(),
                &mut input,
                &mut SystemClock,
                |canvas: &Canvas, name: &str| canvas.write_svg(&dir.join(format!("{}.svg", name))),
            )?
        }
        None => play(
            &settings,
            &mut NullSurface::new(),
            &mut input,
            &mut SystemClock,
            |_: &NullSurface, _: &str| Ok(()),
        )?,
    };

    log::info!(
        "Session done: darts {}-{}, pi ~ {} (error {:.4}), {} screensaver steps",
        session.outcome.player_one,
        session.outcome.player_two,
        session.estimate.pi,
        session.estimate.abs_error(),
        session.screensaver.steps
    );
    Ok(())
}

/// Results of one full session
#[derive(Debug, Clone, Copy)]
struct Session {
    outcome: DartsOutcome,
    estimate: Estimate,
    screensaver: ScreensaverReport,
}

/// Run parts A to D on `surface`, handing it to `snapshot` after each part
fn play<S, B, C, F>(
    settings: &Settings,
    surface: &mut S,
    input: &mut B,
    clock: &mut C,
    mut snapshot: F,
) -> Result<Session>
where
    S: Surface,
    B: BufRead,
    C: Clock,
    F: FnMut(&S, &str) -> Result<()>,
{
    let seed = settings.effective_seed();
    log::info!("Using seed {}", seed);

    let mut rng = SeededSource::new(seed);
    let board = Dartboard::from_settings(settings)?;

    println!(
        "This is a program that simulates throwing darts at a dartboard\n\
         in order to approximate pi: The ratio of darts in a unit circle\n\
         to the total number of darts in a 2X2 square should be\n\
         approximately equal to pi/4"
    );

    println!("=========== Part A ===========");
    for _ in 0..settings.warmup_darts {
        board.throw_dart(surface, &mut rng);
    }
    snapshot(&*surface, "part_a")?;
    println!("\tPart A Complete...");

    println!("=========== Part B ===========");
    surface.clear();
    board.set_up(surface);
    let outcome = play_darts(&board, surface, &mut rng, settings.darts_rounds);
    println!("Player One: {} points.", outcome.player_one);
    println!("Player Two: {} points.", outcome.player_two);
    match outcome.winner() {
        Winner::PlayerOne => println!("Player One won!"),
        Winner::PlayerTwo => println!("Player Two won!"),
        Winner::Tie => println!("It was a tie!"),
    }
    snapshot(&*surface, "part_b")?;
    println!("\tPart B Complete...");

    println!("=========== Part C ===========");
    surface.clear();
    board.set_up(surface);
    let darts: u64 = prompt(
        input,
        "\nPlease input the number of darts to be thrown in the simulation:  ",
    )?;
    let estimate = monte_pi(&board, surface, &mut rng, darts, settings.refresh_batch)?;
    println!(
        "\nThe estimation of pi using {} virtual darts is {}",
        darts, estimate.pi
    );
    snapshot(&*surface, "part_c")?;
    println!("\tPart C Complete...");

    println!("=========== Part D ===========");
    surface.clear();
    let secs: u64 = prompt(
        input,
        "\nPlease input how many seconds the screensaver should run:  ",
    )?;
    let mut saver = Screensaver::from_settings(&settings.screensaver, &mut rng);
    let half = saver.bounds.half_extents();
    surface.set_world_bounds(-half, half);
    let screensaver = saver.run(surface, clock, secs);
    println!(
        "\nThe ball took {} steps with {} bounces and {} corner hits",
        screensaver.steps, screensaver.bounces, screensaver.corner_hits
    );
    snapshot(&*surface, "part_d")?;
    println!("\tPart D Complete...");

    Ok(Session {
        outcome,
        estimate,
        screensaver,
    })
}

/// Print a prompt and parse one line of input
fn prompt<T, B>(input: &mut B, message: &str) -> Result<T>
where
    T: FromStr,
    B: BufRead,
{
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let text = line.trim();
    text.parse()
        .map_err(|_| DartsError::InvalidInput(format!("expected a whole number, got {:?}", text)))
}
