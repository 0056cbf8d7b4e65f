//! Terminal egg-catch runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `egg_catch::term`. Logs go to `EGG_CATCH_LOG_PATH` when it is set, since
//! the game owns stdout.

use std::fs::File;

use anyhow::{Context, Result};
use crossterm::terminal;

use egg_catch::engine::settings::clock_seed;
use egg_catch::engine::{IntervalScheduler, Session, SessionEnd, Settings};
use egg_catch::input::{Ack, TerminalInput};
use egg_catch::term::{FrameBuffer, GameView, SceneSurface, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let settings = Settings::from_env()?;
    init_logging(&settings)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("{err:#}");
    }
    result
}

fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, settings: &Settings) -> Result<()> {
    let config = settings.game;
    let view = GameView::new(config.surface_width, config.surface_height)
        .with_catcher_width(config.catcher_width)
        .with_pointer_origin_x(config.pointer_origin_x);

    let mut fb = FrameBuffer::new(0, 0);
    let mut input = TerminalInput::new(config.catch_line);
    let mut seed = settings.seed_or_random();

    loop {
        let mut session = Session::new(config, seed, SceneSurface::new(), input)?;
        let mut scheduler = IntervalScheduler::new(settings.frame_ms);

        let end = session.run(&mut scheduler, |scene, input| {
            present(term, &view, &mut fb, scene, input)
        })?;

        match end {
            SessionEnd::Lost { score, misses } => {
                log::info!("session lost: score {score}, misses {misses}");
                let (_, returned) = session.into_parts();
                input = returned;
                match input.wait_for_ack()? {
                    Ack::Restart => {
                        term.invalidate();
                        seed = match settings.seed {
                            Some(_) => seed.wrapping_add(1),
                            None => clock_seed(),
                        };
                    }
                    Ack::Quit => return Ok(()),
                }
            }
            SessionEnd::Quit { score } | SessionEnd::Stopped { score } => {
                log::info!("session closed: score {score}");
                return Ok(());
            }
        }
    }
}

fn present(
    term: &mut TerminalRenderer,
    view: &GameView,
    fb: &mut FrameBuffer,
    scene: &SceneSurface,
    input: &mut TerminalInput,
) -> Result<()> {
    let (w, h) = terminal::size().unwrap_or((80, 24));
    let viewport = Viewport::new(w, h);

    if let Some(geometry) = view.geometry(viewport) {
        input.set_geometry(geometry);
    }
    if input.take_resized() {
        term.invalidate();
    }

    view.render_into(scene, viewport, fb);
    term.present(fb)
}
