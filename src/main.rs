//! Worm headless entry point
//!
//! Runs the simulation with a simple autopilot and logs what happens.
//! Usage: `worm [settings.json] [seconds]`

use glam::IVec2;

use worm::sim::{Direction, FrameInput, GameState, step};
use worm::{Settings, playfield_center};

/// Host frame rate for the headless loop
const FRAME_RATE: f64 = 60.0;
/// Default run length in seconds
const DEFAULT_SECONDS: f64 = 60.0;

fn main() {
    env_logger::init();
    log::info!("Worm (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let mut state = GameState::from_settings(&settings);
    log::info!("Game initialized with seed: {}", settings.seed);

    let frames = (seconds * FRAME_RATE) as u64;
    let mut longest = state.worm_len();
    for frame in 1..=frames {
        let now = frame as f64 / FRAME_RATE;
        let input = autopilot(&state);
        let report = step(&mut state, &input, now);
        if !report.events.is_empty() {
            log::debug!("t={:.2}s events {:?}", now, report.events);
        }
        longest = longest.max(state.worm_len());
    }

    log::info!(
        "Done: {} ticks, {} food eaten, {} resets, longest worm {}",
        state.stats.ticks,
        state.stats.foods_eaten,
        state.stats.resets,
        longest
    );
}

/// Steer toward the food one axis at a time, never reversing
fn autopilot(state: &GameState) -> FrameInput {
    let (Some(head), Some(food)) = (state.head_position(), state.food_position()) else {
        return FrameInput::default();
    };

    let delta = food - head;
    let wanted = if delta.x.abs() >= state.playfield.cell_size {
        if delta.x > 0 { Direction::Right } else { Direction::Left }
    } else if delta.y > 0 {
        Direction::Up
    } else {
        Direction::Down
    };

    if is_reverse(state.direction, wanted) || wanted == state.direction {
        return FrameInput::default();
    }

    let center = playfield_center(state.playfield.width, state.playfield.height);
    let reach = wanted.step(state.playfield.cell_size) * 4;
    FrameInput::touch(center + reach.as_vec2())
}

fn is_reverse(a: Direction, b: Direction) -> bool {
    a.step(1) + b.step(1) == IVec2::ZERO
}
