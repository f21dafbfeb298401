use anyhow::Result;
use jsend::{cli, config, config::Config, handlers};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Load config
    let cfg = Config::load();

    // Resolve destination: CLI overrides config; fall back to the loopback default
    let target = config::resolve_target(args.address.as_deref(), args.port, &cfg)?;

    // Route to handler
    if args.form {
        handlers::form::run(target, &cfg).await
    } else if args.rows {
        handlers::rows::run(target, &args).await
    } else if args.table {
        handlers::table::run(target, &args).await
    } else {
        handlers::sample::run(target, &args).await
    }
}
