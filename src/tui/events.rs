//! Event types for the form TUI.

use crossterm::event::KeyEvent;

use crate::payload::Submission;

/// Events that can occur while the form is running.
#[derive(Debug)]
pub enum FormEvent {
    /// User keyboard input
    Key(KeyEvent),
    /// A validated submission ready to transmit
    Submit(Submission),
    /// The datagram went out (bytes handed to the transport)
    Sent(usize),
    /// Encoding or transmission failed
    SendFailed(String),
    /// Request to quit the application
    Quit,
}
