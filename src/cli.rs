use clap::{ArgGroup, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "jsend", about = "JSON-over-UDP form sender", version)]
#[command(group(ArgGroup::new("mode").args(["form", "rows", "table"]).multiple(false)))]
pub struct Cli {
    /// Destination address for the datagram.
    #[arg(long)]
    pub address: Option<String>,

    /// Destination port for the datagram.
    #[arg(long)]
    pub port: Option<u16>,

    /// Open the interactive form instead of sending immediately.
    #[arg(short = 'f', long)]
    pub form: bool,

    /// Send the record as a batch of labeled rows.
    ///
    /// The payload becomes `[{"rows": [["cmd_name", ...], ...]}]` instead of
    /// a flat object.
    #[arg(long)]
    pub rows: bool,

    /// Send the record as a table of parallel columns.
    ///
    /// The payload becomes `{"cmd_name": [...], "data": [...], ...}` with one
    /// entry per column.
    #[arg(long)]
    pub table: bool,

    /// Command name field (defaults to the sample value).
    #[arg(long = "cmd-name")]
    pub cmd_name: Option<String>,

    /// Data field (defaults to the sample value).
    #[arg(long)]
    pub data: Option<String>,

    /// Range field (defaults to the sample value).
    #[arg(long)]
    pub range: Option<String>,

    /// Status field, free text (defaults to the sample value).
    #[arg(long)]
    pub status: Option<String>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
