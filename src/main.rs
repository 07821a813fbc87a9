//! Terminal basketball shootout runner (default binary).
//!
//! The intro and final summary print in cooked mode so they survive in the
//! scrollback; the match itself runs in raw mode on the alternate screen,
//! driven by crossterm events with per-entry deadlines.

use std::io;
use std::path::Path;
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use hoopshot::audio::{self, SoundPlayer};
use hoopshot::core::{compute_trajectory, is_scored, GameConfig, MatchState};
use hoopshot::input::{should_quit, NumberPrompt, PromptOutcome};
use hoopshot::term::{CourtFrame, CourtView, TerminalRenderer, Tone};
use hoopshot::types::{
    Commendation, ANGLE_MAX, ANGLE_MIN, CHEER_SOUND, POWER_MAX, POWER_MIN,
};

const TIMEOUT_MESSAGE: &str = "Time's up! Shot forfeited.";
const INVALID_MESSAGE: &str = "Invalid input. Shot forfeited.";

/// Outcome of one prompt, as the game loop sees it.
enum Entry {
    Value(u32),
    Forfeit(&'static str),
    Quit,
}

fn main() -> Result<()> {
    let config = GameConfig::default();

    print_intro(&config);
    wait_for_enter()?;

    let player = audio::default_player();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        Some(state) => print_summary(&state, &config, player.as_ref()),
        None => println!("Match abandoned."),
    }
    Ok(())
}

/// The match loop: prompt angle, prompt power, animate, resolve — once per
/// remaining shot. Returns `None` when the player quits mid-match.
fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<Option<MatchState>> {
    let view = CourtView::new();
    let mut state = MatchState::new(config, time_seed());

    while !state.is_over() {
        let angle = match prompt_number(
            term,
            &view,
            config,
            &state,
            "Enter shot angle",
            ANGLE_MIN,
            ANGLE_MAX,
        )? {
            Entry::Value(v) => v,
            Entry::Forfeit(message) => {
                forfeit(term, &view, config, &mut state, message)?;
                continue;
            }
            Entry::Quit => return Ok(None),
        };

        let power = match prompt_number(
            term,
            &view,
            config,
            &state,
            "Enter shot power",
            POWER_MIN,
            POWER_MAX,
        )? {
            Entry::Value(v) => v,
            Entry::Forfeit(message) => {
                forfeit(term, &view, config, &mut state, message)?;
                continue;
            }
            Entry::Quit => return Ok(None),
        };

        let scored = run_shot(term, &view, config, &state, angle, power)?;
        state.resolve_shot(scored);
    }

    Ok(Some(state))
}

/// Collect one bounded numeric entry under the shot deadline, echoing typed
/// digits into the frame as they arrive.
fn prompt_number(
    term: &mut TerminalRenderer,
    view: &CourtView,
    config: &GameConfig,
    state: &MatchState,
    label: &str,
    min: u32,
    max: u32,
) -> Result<Entry> {
    let mut prompt = NumberPrompt::new(min, max);
    let deadline = Instant::now() + config.shot_timeout;
    let message = format!(
        "{} ({}-{}): You have {} seconds.",
        label,
        min,
        max,
        config.shot_timeout.as_secs()
    );

    loop {
        let frame = CourtFrame {
            hoop: state.hoop(),
            ball: None,
            score: state.score(),
            shots_left: state.shots_left(),
            timeout_secs: config.shot_timeout.as_secs(),
            message: Some((message.as_str(), Tone::Info)),
            entry: Some(prompt.entry()),
        };
        term.draw(&view.render(&config.court, &frame))?;

        let Some(remaining) = deadline.checked_duration_since(Instant::now()) else {
            return Ok(Entry::Forfeit(TIMEOUT_MESSAGE));
        };
        if !event::poll(remaining)? {
            return Ok(Entry::Forfeit(TIMEOUT_MESSAGE));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(Entry::Quit);
            }
            match prompt.handle_key(key.code) {
                Some(PromptOutcome::Value(v)) => return Ok(Entry::Value(v)),
                Some(PromptOutcome::Invalid) => return Ok(Entry::Forfeit(INVALID_MESSAGE)),
                Some(PromptOutcome::TimedOut) | None => {}
            }
        }
    }
}

/// Show the forfeit message briefly, then consume the attempt.
fn forfeit(
    term: &mut TerminalRenderer,
    view: &CourtView,
    config: &GameConfig,
    state: &mut MatchState,
    message: &str,
) -> Result<()> {
    let frame = CourtFrame {
        hoop: state.hoop(),
        ball: None,
        score: state.score(),
        shots_left: state.shots_left(),
        timeout_secs: config.shot_timeout.as_secs(),
        message: Some((message, Tone::Bad)),
        entry: None,
    };
    term.draw(&view.render(&config.court, &frame))?;
    thread::sleep(config.forfeit_pause);

    state.forfeit_shot();
    Ok(())
}

/// One shot: compute the trajectory once, animate it frame by frame, then
/// show the outcome. The inter-frame delay paces the animation and is not
/// tied to the physics time step.
fn run_shot(
    term: &mut TerminalRenderer,
    view: &CourtView,
    config: &GameConfig,
    state: &MatchState,
    angle: u32,
    power: u32,
) -> Result<bool> {
    let trajectory = compute_trajectory(f64::from(angle), f64::from(power), &config.court);

    for position in trajectory.iter() {
        let frame = CourtFrame {
            hoop: state.hoop(),
            ball: Some(*position),
            score: state.score(),
            shots_left: state.shots_left(),
            timeout_secs: config.shot_timeout.as_secs(),
            message: None,
            entry: None,
        };
        term.draw(&view.render(&config.court, &frame))?;
        thread::sleep(config.frame_delay);
    }

    let scored = is_scored(&trajectory, state.hoop(), &config.court);
    let (text, tone) = if scored {
        ("Nice shot! You scored!", Tone::Good)
    } else {
        ("Missed! Better luck next time.", Tone::Bad)
    };

    let frame = CourtFrame {
        hoop: state.hoop(),
        ball: None,
        score: state.score(),
        shots_left: state.shots_left(),
        timeout_secs: config.shot_timeout.as_secs(),
        message: Some((text, tone)),
        entry: None,
    };
    term.draw(&view.render(&config.court, &frame))?;
    thread::sleep(config.result_pause);

    Ok(scored)
}

fn print_intro(config: &GameConfig) {
    let border = format!("+{}+", "=".repeat(46));
    println!("{border}");
    println!("|{:^46}|", "ASCII Basketball Shootout");
    println!("{border}");
    println!("|{:^46}|", "Welcome to the ultimate ASCII court!");
    println!(
        "|{:^46}|",
        format!("You have {} shots to score points.", config.max_shots)
    );
    println!(
        "|{:^46}|",
        format!("Each shot needs an angle ({ANGLE_MIN}-{ANGLE_MAX})")
    );
    println!(
        "|{:^46}|",
        format!("and power ({POWER_MIN}-{POWER_MAX}).")
    );
    println!(
        "|{:^46}|",
        format!(
            "You have {} seconds to enter each value.",
            config.shot_timeout.as_secs()
        )
    );
    println!("|{:^46}|", "Adjust your shot and aim carefully!");
    println!("{border}");
    println!("|{:^46}|", "Press Enter to start...");
    println!("{border}");
}

fn wait_for_enter() -> Result<()> {
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}

fn print_summary(state: &MatchState, config: &GameConfig, player: &dyn SoundPlayer) {
    let border = format!("+{}+", "*".repeat(48));
    println!("{border}");
    println!("|{:^48}|", "Game over!");
    println!(
        "|{:^48}|",
        format!("Your final score: {} / {}", state.score(), config.max_shots)
    );
    let tier = state.commendation();
    println!("|{:^48}|", tier.message());
    println!("{border}");

    if tier == Commendation::Top {
        if let Err(err) = player.play(Path::new(CHEER_SOUND)) {
            eprintln!("warning: could not play sound: {err:#}");
        }
    }

    println!();
    println!("Thanks for playing ASCII Basketball Shootout!");
}

/// Seed hoop placement from the wall clock; the LCG does the rest.
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
