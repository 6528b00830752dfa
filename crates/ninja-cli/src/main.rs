use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod server;

#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("ncms error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = ninja_config::NinjaConfig::load_with_dotenv().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    if let cli::Commands::Launch(args) = &cli.command {
        return commands::launch::handle(args, &config, &flags);
    }

    let ctx = context::AppContext::init(config).context("failed to initialize ncms application context")?;
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("NINJA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
