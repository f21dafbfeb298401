//! Colored console output for the non-interactive modes.

use std::net::SocketAddr;

use owo_colors::OwoColorize;

/// One-line confirmation after a successful send.
pub fn confirm_sent(target: SocketAddr, bytes: usize) {
    println!("{}", format!("Sent {bytes} bytes of JSON to {target}").green());
}

/// Warning line on stderr.
pub fn warn(text: &str) {
    eprintln!("{}", text.yellow());
}
