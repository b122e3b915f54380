//! Entry point: parse CLI and dispatch to command handlers.

use baseball_triples::{
    cli::{Commands, TriplesCli},
    commands::{
        fetch::handle_fetch,
        triples::{handle_triples, TriplesParams},
    },
    config::Settings,
    core::init_logging,
    Result,
};
use clap::Parser;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = TriplesCli::parse();

    let settings = Settings::load(app.config.as_deref())?;
    init_logging(&settings.log_level);

    match app.command {
        Commands::Triples {
            source,
            min_players,
            sink,
            keep_files,
            json,
            parallel,
        } => {
            handle_triples(
                &settings,
                TriplesParams {
                    from: source.from,
                    to: source.to,
                    tmp_dir: source.tmp_dir,
                    min_players,
                    sink,
                    keep_files,
                    as_json: json,
                    parallel,
                },
            )
            .await?;
        }

        Commands::Fetch { source } => {
            handle_fetch(&settings, source.from, source.to, source.tmp_dir).await?;
        }
    }

    Ok(())
}
