//! Terminal Pong runner (default binary).
//!
//! Two players share one terminal: `W`/`S` and `Up`/`Down` move the paddles,
//! or drag with the mouse in the left/right third of the field. Rendering is
//! a framebuffer diffed onto the terminal through crossterm.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_pong::config::{AppConfig, USAGE};
use tui_pong::core::GameSnapshot;
use tui_pong::event_log::{EventLog, LogRecord};
use tui_pong::input::{handle_key_event, handle_mouse_event, should_quit, PointerKind};
use tui_pong::session::Session;
use tui_pong::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_pong::types::{GameAction, Side};

/// Keep-alive redraw interval on the win screen.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = AppConfig::from_env().apply_args(&args)? else {
        print!("{}", USAGE);
        return Ok(());
    };

    let mut log = EventLog::from_config(&config)?;
    log.record(&LogRecord::Start {
        tick_ms: config.tick_ms,
        mouse: config.mouse,
    });

    let mut term = TerminalRenderer::new();
    term.enter(config.mouse)?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    log.flush();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, log: &mut EventLog) -> Result<()> {
    let mut session = Session::new(config.tick_ms);
    log.record_events(0, session.take_events());

    let view = GameView::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.game.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint(), !session.ticking()) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            log.record(&LogRecord::Quit {
                                tick: session.game.tick_count(),
                                left: session.game.score(Side::Left),
                                right: session.game.score(Side::Right),
                            });
                            return Ok(());
                        }
                        session.key_press(key.code);
                        if let Some(action) = handle_key_event(key) {
                            session.dispatch(action);
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Held keys repeat through the input handler.
                    }
                    KeyEventKind::Release => session.key_release(key.code),
                },
                Event::Mouse(mouse) => {
                    if let Some(pointer) = handle_mouse_event(mouse) {
                        let (col, row) = (pointer.column, pointer.row);
                        if pointer.kind == PointerKind::Press
                            && view.hits_reset(&snap, viewport, col, row)
                        {
                            session.dispatch(GameAction::Restart);
                        } else if let Some(p) = view.pointer_to_field(&snap, viewport, col, row) {
                            session.dispatch(GameAction::Drag { x: p.x, y: p.y });
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
        }

        let tick = session.game.tick_count();
        log.record_events(tick, session.take_events());
    }
}
