//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for keyboard/mouse input and the framebuffer-based renderer
//! from `tui_2048::term`. The game is turn based, so the loop blocks on input
//! and redraws after every event.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::Env;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_2048::config::AppConfig;
use tui_2048::core::{GameState, SimpleRng, TileRng};
use tui_2048::input::{handle_key_event, should_quit, SwipeTracker};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;
    for w in &config.warnings {
        warn!("{}", w);
    }

    let mut term = TerminalRenderer::new();
    if !config.mouse {
        term = term.without_mouse();
    }
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Send logs to `TUI_2048_LOG_PATH`; without it the TUI owns the screen and nothing is logged.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn new_game(config: &AppConfig) -> GameState<Box<dyn TileRng>> {
    let rng: Box<dyn TileRng> = match config.seed {
        Some(seed) => {
            info!("starting seeded session: seed={}", seed);
            Box::new(SimpleRng::new(seed))
        }
        None => Box::new(StdRng::from_entropy()),
    };
    GameState::with_rng(rng)
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game_state = new_game(config);
    let mut swipe = SwipeTracker::with_threshold(config.swipe_threshold);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game_state.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(
                        "quit: episode={} score={} moves={}",
                        game_state.episode_id(),
                        game_state.score(),
                        game_state.moves()
                    );
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => swipe.handle_mouse_event(mouse).map(GameAction::Move),
            Event::Resize(_, _) => {
                term.invalidate();
                None
            }
            Event::FocusLost => {
                swipe.reset();
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            let changed = game_state.apply_action(action);
            debug!("action {} changed={}", action.as_str(), changed);
        }

        if let Some(ev) = game_state.take_last_event() {
            debug!(
                "feedback: dir={} delta={} spawned={:?} game_over={}",
                ev.direction.as_str(),
                ev.score_delta,
                ev.spawned,
                ev.game_over
            );
        }
    }
}
