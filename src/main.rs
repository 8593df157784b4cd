use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use hoverdict::{server, Config, LookupService, RecordId};

#[derive(Parser)]
#[command(name = "hoverdict", about = "Mouseover dictionary — related notes for a hovered term")]
struct Cli {
    /// Write debug logs to --log-file (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    #[arg(long, default_value = "/tmp/hoverdict-debug.log")]
    log_file: PathBuf,

    /// Config file to use instead of ~/.config/hoverdict/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tooltip fragment for TERM.
    Lookup {
        #[arg(long)]
        collection: PathBuf,
        /// Id of the note currently on screen; excluded from results.
        #[arg(long, default_value_t = 0)]
        current: i64,
        term: String,
    },
    /// Print the dictionary definition for TERM.
    Define {
        #[arg(long)]
        collection: PathBuf,
        term: String,
    },
    /// Serve lookups over HTTP.
    Serve {
        #[arg(long)]
        collection: PathBuf,
        /// Overrides `[server] bind` from the config.
        #[arg(long)]
        bind: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&cli.log_file)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %cli.log_file.display(), "hoverdict debug log started");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to built-in config");
            Config::defaults()
        }),
    };

    match cli.command {
        Command::Lookup {
            collection,
            current,
            term,
        } => {
            let service = LookupService::new(hoverdict_store::load(&collection)?, &config);
            println!("{}", service.lookup(&term, RecordId(current))?);
        }
        Command::Define { collection, term } => {
            let service = LookupService::new(hoverdict_store::load(&collection)?, &config);
            println!("{}", service.define(&term)?);
        }
        Command::Serve { collection, bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let service = Arc::new(LookupService::new(
                hoverdict_store::load(&collection)?,
                &config,
            ));
            tokio::runtime::Runtime::new()?.block_on(server::serve(service, &bind))?;
        }
    }

    Ok(())
}
