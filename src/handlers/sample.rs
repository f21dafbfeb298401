//! Flat-object mode: send the record as a single JSON object.

use std::net::SocketAddr;

use anyhow::Result;

use super::build_record;
use crate::{cli::Cli, net, printer};

pub async fn run(target: SocketAddr, args: &Cli) -> Result<()> {
    let record = build_record(args);
    let sent = net::send_json(target, &record).await?;
    printer::confirm_sent(target, sent);
    Ok(())
}
