//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Analyzing**: draws every ~80ms so the spinner animates.
//! - **Idle / Shown**: sleeps up to 500ms, only redraws on events.
//!
//! ## Analysis tasks
//!
//! `Effect::Analyze` spawns a tokio task that runs the analyzer and posts
//! `Action::AnalysisComplete` back over a channel. Spawning a new task aborts
//! the previous one; the ticket check in `update()` covers any completion that
//! was already in the channel.

mod component;
pub mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::analysis::{KeywordAnalyzer, MoodAnalyzer};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{Session, Ticket};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Routes one terminal event. Returns the effect core asked for.
fn dispatch_event(session: &mut Session, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    if matches!(event, TuiEvent::Quit) {
        return update(session, Action::Quit);
    }

    match tui.input_box.handle_event(event) {
        Some(InputEvent::Changed) => {
            update(session, Action::EditInput(tui.input_box.buffer.clone()))
        }
        Some(InputEvent::Submit) => update(session, Action::Submit),
        Some(InputEvent::CursorMoved) | None => Effect::None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let analyzer: Arc<dyn MoodAnalyzer> = Arc::new(KeywordAnalyzer::new(config.analysis_delay));
    let mut session = Session::new(config.history);
    let mut tui = TuiState::new();
    info!("Using {} analyzer", analyzer.name());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handle for the in-flight analysis, if any
    let mut active_analysis: Option<tokio::task::AbortHandle> = None;

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = session.is_analyzing();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &session, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match dispatch_event(&mut session, &mut tui, &event) {
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                Effect::Analyze { ticket, text } => {
                    if let Some(handle) = active_analysis.take() {
                        handle.abort();
                    }
                    active_analysis =
                        Some(spawn_analysis(analyzer.clone(), ticket, text, tx.clone()));
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (analysis results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut session, action) == Effect::Quit {
                should_quit = true;
            }
        }
        if !session.is_analyzing() {
            active_analysis = None;
        }

        if should_quit {
            break;
        }
    }

    if let Some(handle) = active_analysis {
        handle.abort();
    }

    ratatui::restore();
    info!("Mood Mirror shutting down");
    Ok(())
}

fn spawn_analysis(
    analyzer: Arc<dyn MoodAnalyzer>,
    ticket: Ticket,
    text: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning analysis (ticket={}, analyzer={})", ticket, analyzer.name());
    let handle = tokio::spawn(async move {
        let mood = analyzer.analyze(&text).await;
        if tx.send(Action::AnalysisComplete { ticket, mood }).is_err() {
            warn!(
                "Failed to send analysis result (ticket={}): receiver dropped",
                ticket
            );
        }
    });
    handle.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mood::MoodKey;
    use crate::test_support::{FixedAnalyzer, test_session};

    fn type_str(session: &mut Session, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            dispatch_event(session, tui, &TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_mirrors_into_session() {
        let mut session = test_session();
        let mut tui = TuiState::new();

        type_str(&mut session, &mut tui, "calm");
        assert_eq!(session.raw_input, "calm");

        dispatch_event(&mut session, &mut tui, &TuiEvent::Backspace);
        assert_eq!(session.raw_input, "cal");
    }

    #[test]
    fn test_enter_on_blank_input_does_nothing() {
        let mut session = test_session();
        let mut tui = TuiState::new();
        type_str(&mut session, &mut tui, "   ");

        let effect = dispatch_event(&mut session, &mut tui, &TuiEvent::Submit);
        assert_eq!(effect, Effect::None);
        assert!(!session.is_analyzing());
    }

    #[test]
    fn test_enter_requests_analysis() {
        let mut session = test_session();
        let mut tui = TuiState::new();
        type_str(&mut session, &mut tui, "so busy");

        let effect = dispatch_event(&mut session, &mut tui, &TuiEvent::Submit);
        assert_eq!(
            effect,
            Effect::Analyze {
                ticket: 1,
                text: "so busy".to_string()
            }
        );
        assert!(session.is_analyzing());
    }

    #[test]
    fn test_quit_event() {
        let mut session = test_session();
        let mut tui = TuiState::new();
        assert_eq!(
            dispatch_event(&mut session, &mut tui, &TuiEvent::Quit),
            Effect::Quit
        );
    }

    #[tokio::test]
    async fn test_spawn_analysis_posts_completion() {
        let (tx, rx) = mpsc::channel();
        let analyzer: Arc<dyn MoodAnalyzer> = Arc::new(FixedAnalyzer(MoodKey::Happy));

        let handle = spawn_analysis(analyzer, 3, "whatever".to_string(), tx);

        // Wait for the task to finish, then read the posted action
        while !handle.is_finished() {
            tokio::task::yield_now().await;
        }
        assert_eq!(
            rx.try_recv().unwrap(),
            Action::AnalysisComplete {
                ticket: 3,
                mood: MoodKey::Happy
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_aborted_analysis_never_reports() {
        let (tx, rx) = mpsc::channel();
        let analyzer: Arc<dyn MoodAnalyzer> =
            Arc::new(KeywordAnalyzer::new(Duration::from_millis(1500)));

        let handle = spawn_analysis(analyzer, 1, "sad".to_string(), tx);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert!(rx.try_recv().is_err());
    }
}
