//! Table mode: send the record as parallel columns.

use std::net::SocketAddr;

use anyhow::Result;

use super::build_record;
use crate::{cli::Cli, net, payload::ColumnTable, printer};

pub async fn run(target: SocketAddr, args: &Cli) -> Result<()> {
    let record = build_record(args);
    let mut table = ColumnTable::default();
    table.push(&record);
    let sent = net::send_json(target, &table).await?;
    printer::confirm_sent(target, sent);
    Ok(())
}
