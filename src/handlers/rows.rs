//! Batch mode: send the record as an array of labeled row groups.

use std::net::SocketAddr;

use anyhow::Result;

use super::build_record;
use crate::{cli::Cli, net, payload::RowGroup, printer};

pub async fn run(target: SocketAddr, args: &Cli) -> Result<()> {
    let record = build_record(args);
    let batch = vec![RowGroup::from_submission(&record)];
    let sent = net::send_json(target, &batch).await?;
    printer::confirm_sent(target, sent);
    Ok(())
}
