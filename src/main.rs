use clap::Parser;
use tracing_subscriber::EnvFilter;

use inheritance_filter::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("inheritance_filter=debug,info")
    } else {
        EnvFilter::new("inheritance_filter=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Filter(args) => {
            cli::filter::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Pedigree(args) => {
            cli::pedigree::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
