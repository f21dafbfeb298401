//! Async event handler for the form TUI.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use tokio::sync::mpsc;

use super::{
    app::{Field, FormApp, StatusChoice},
    events::FormEvent,
    ui::render_ui,
};
use crate::net;

/// Run the form until the user quits.
pub async fn run_form(target: SocketAddr, default_status: &str) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = FormApp::new(StatusChoice::from_name(default_status));
    let (event_tx, event_rx) = mpsc::unbounded_channel::<FormEvent>();

    // Main event loop
    let result = run_app(&mut terminal, &mut app, target, event_tx, event_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut FormApp,
    target: SocketAddr,
    event_tx: mpsc::UnboundedSender<FormEvent>,
    mut event_rx: mpsc::UnboundedReceiver<FormEvent>,
) -> Result<()> {
    // Spawn input handler
    let input_tx = event_tx.clone();
    tokio::task::spawn_blocking(move || {
        loop {
            // Poll for keyboard events
            if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    if input_tx.send(FormEvent::Key(key)).is_err() {
                        break; // Channel closed
                    }
                }
            }
        }
    });

    loop {
        // Render UI
        terminal.draw(|frame| render_ui(frame, app))?;

        // Handle events
        if let Ok(form_event) = event_rx.try_recv() {
            match form_event {
                FormEvent::Key(key) => {
                    if handle_key_event(app, key, &event_tx) {
                        break; // Quit requested
                    }
                }
                FormEvent::Submit(record) => {
                    // Transmit on a spawned task so the UI keeps rendering
                    app.begin_send();
                    let tx = event_tx.clone();
                    tokio::spawn(async move {
                        let outcome = match net::send_json(target, &record).await {
                            Ok(bytes) => FormEvent::Sent(bytes),
                            Err(e) => FormEvent::SendFailed(format!("{e:#}")),
                        };
                        let _ = tx.send(outcome);
                    });
                }
                FormEvent::Sent(_) => {
                    app.finish_send();
                    app.clear_fields();
                    app.show_success("Data has been sent successfully".to_string());
                }
                FormEvent::SendFailed(message) => {
                    app.finish_send();
                    app.show_error(format!("An error occurred: {message}"));
                }
                FormEvent::Quit => break,
            }
        }

        // Small delay to prevent busy waiting
        tokio::time::sleep(Duration::from_millis(16)).await;
    }

    Ok(())
}

/// Handle keyboard events. Returns true when the app should quit.
fn handle_key_event(
    app: &mut FormApp,
    key: KeyEvent,
    event_tx: &mpsc::UnboundedSender<FormEvent>,
) -> bool {
    // Any key closes an open dialog
    if app.is_popup_shown() {
        app.hide_popup();
        return false;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return true; // Quit
        }
        KeyCode::Esc => return true,
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter => match app.focus {
            Field::Submit => submit(app, event_tx),
            _ => app.focus_next(),
        },
        KeyCode::Left => {
            if app.focus == Field::Status {
                app.toggle_status();
            } else {
                app.move_cursor_left();
            }
        }
        KeyCode::Right => {
            if app.focus == Field::Status {
                app.toggle_status();
            } else {
                app.move_cursor_right();
            }
        }
        KeyCode::Home => app.move_cursor_home(),
        KeyCode::End => app.move_cursor_end(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Char(' ') if app.focus == Field::Status => app.toggle_status(),
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }

    false
}

/// Validate and queue the submission; ignored while a send is in flight.
fn submit(app: &mut FormApp, event_tx: &mpsc::UnboundedSender<FormEvent>) {
    if app.sending {
        return;
    }
    match app.validate() {
        Ok(record) => {
            let _ = event_tx.send(FormEvent::Submit(record));
        }
        Err(message) => app.show_warning(message),
    }
}
