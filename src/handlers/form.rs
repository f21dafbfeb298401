//! Form mode: interactive submission through the terminal form.

use std::io;
use std::net::SocketAddr;

use anyhow::Result;
use is_terminal::IsTerminal;

use crate::{config::Config, printer, tui};

pub async fn run(target: SocketAddr, cfg: &Config) -> Result<()> {
    // The form needs a real terminal to take over.
    if !io::stdout().is_terminal() {
        printer::warn("The form requires a terminal; run it outside a pipe or redirected output.");
        return Err(anyhow::anyhow!("form mode requires a terminal environment"));
    }

    tui::run_form(target, &cfg.default_status()).await
}
