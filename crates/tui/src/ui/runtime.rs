//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (raw mode, alternate screen, mouse capture).
//! - Multiplex terminal input, debounce deadlines, finished searches, ticks
//!   and Ctrl+C in a single `select!` loop.
//! - Ask `App` for due searches after every wake-up and spawn them.
//! - Render only when something visible changed.
//!
//! Input is read on a blocking thread that forwards `crossterm` events over a
//! channel and stops once the loop drops its receiver. Ticks are fast (100 ms) while a spinner or banner is showing and
//! slow (1 s) otherwise. The debounce deadline gets its own timer so a search
//! fires on time regardless of tick rate.

use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use futures_util::StreamExt;
use futures_util::future::BoxFuture;
use futures_util::stream::FuturesUnordered;
use moviesearch_api::SearchProvider;
use moviesearch_types::{AutocompleteConfig, Effect, Msg};
use ratatui::Terminal;
use ratatui::prelude::CrosstermBackend;
use tokio::signal;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::cmd;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme;

type Tui = Terminal<CrosstermBackend<Stdout>>;

const FAST_TICK: Duration = Duration::from_millis(100);
const IDLE_TICK: Duration = Duration::from_secs(1);
const INPUT_POLL: Duration = Duration::from_millis(16);

/// Forward terminal events from a blocking reader thread.
///
/// The reader polls with a short timeout so it notices a dropped receiver
/// and lets the runtime shut down without waiting for another keypress.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(256);
    tokio::task::spawn_blocking(move || forward_events(&sender, next_terminal_event));
    receiver
}

fn next_terminal_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? { event::read().map(Some) } else { Ok(None) }
}

/// Pump events from `source` until the receiver is gone or reading fails.
fn forward_events<F>(sender: &mpsc::Sender<Event>, mut source: F)
where
    F: FnMut(Duration) -> std::io::Result<Option<Event>>,
{
    while !sender.is_closed() {
        match source(INPUT_POLL) {
            Ok(Some(event)) => {
                if sender.blocking_send(event).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(error) => {
                warn!(%error, "failed to read terminal event");
                break;
            }
        }
    }
    debug!("input reader stopped");
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn cleanup_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Tui, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn is_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(key) if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    )
}

/// Route a terminal event to the view. Returns whether a redraw is needed.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> bool {
    match input_event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            main_view.handle_key_events(app, key_event);
            true
        }
        Event::Mouse(mouse_event) => {
            main_view.handle_mouse_events(app, mouse_event);
            true
        }
        Event::Resize(width, height) => {
            main_view.handle_message(app, Msg::Resize(width, height));
            true
        }
        _ => false,
    }
}

/// Spawn searches that became due and track their completion futures.
fn dispatch_due(app: &mut App, provider: &Arc<dyn SearchProvider>, pending: &mut FuturesUnordered<BoxFuture<'static, Msg>>) {
    let effects: Vec<Effect> = app.poll_effects(Instant::now());
    if !effects.is_empty() {
        pending.extend(cmd::run_from_effects(provider, effects));
    }
}

/// Entry point for the TUI runtime: set up the terminal, run the loop,
/// restore the terminal on exit.
pub async fn run_app(config: AutocompleteConfig, provider: Arc<dyn SearchProvider>) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut main_view = MainView::new();
    let mut app = App::new(&config, theme::load());
    let mut terminal = setup_terminal()?;
    info!(?config, "movie search started");

    let result = event_loop(&mut terminal, &mut app, &mut main_view, &provider, &mut input_receiver).await;
    drop(input_receiver);
    cleanup_terminal(&mut terminal)?;
    if let Some(selection) = app.autocomplete.selection() {
        info!(%selection, "exiting with selection");
    }
    result
}

async fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    main_view: &mut MainView,
    provider: &Arc<dyn SearchProvider>,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    let mut pending: FuturesUnordered<BoxFuture<'static, Msg>> = FuturesUnordered::new();

    let mut current_interval = IDLE_TICK;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;

    loop {
        let target_interval = if app.needs_animation() { FAST_TICK } else { IDLE_TICK };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }
        let debounce_deadline = app.autocomplete.next_deadline();

        let needs_render = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    debug!("input channel closed");
                    break;
                };
                if is_quit(&event) {
                    break;
                }
                handle_input_event(app, main_view, event)
            }

            _ = time::sleep_until(debounce_deadline.unwrap_or_else(Instant::now).into()), if debounce_deadline.is_some() => {
                // Dispatch happens below for every wake-up.
                false
            }

            Some(msg) = pending.next(), if !pending.is_empty() => {
                main_view.handle_message(app, msg);
                true
            }

            _ = ticker.tick() => app.update(&Msg::Tick, Instant::now()),

            _ = signal::ctrl_c() => break,
        };

        let in_flight_before = pending.len();
        dispatch_due(app, provider, &mut pending);
        if needs_render || pending.len() != in_flight_before {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}
