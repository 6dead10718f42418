use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pullroute_cli::commands::{self, ConvertOptions};
use pullroute_cli::{CliContext, logging};

#[derive(Parser)]
#[command(
    version,
    about = "Convert Warcraft Logs report pulls to a Mythic Dungeon Tool import string"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a report fight and convert its pulls
    Convert {
        /// Full report URL, e.g. https://www.warcraftlogs.com/reports/<code>
        #[arg(short, long)]
        url: String,
        /// Fight to analyze: "last" or a fight ID
        #[arg(short, long)]
        fight: Option<String>,
        #[arg(long)]
        client_id: Option<String>,
        #[arg(long)]
        client_secret: Option<String>,
        /// Inactivity in milliseconds that starts a new pull
        #[arg(long)]
        gap_ms: Option<i64>,
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Convert saved event and actor JSON arrays without contacting the API
    ConvertFile {
        #[arg(short, long)]
        events: PathBuf,
        #[arg(short, long)]
        actors: PathBuf,
        #[arg(short, long)]
        dungeon: Option<i64>,
        #[arg(long)]
        gap_ms: Option<i64>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show stored configuration
    Config,
    SetCredentials {
        #[arg(long)]
        client_id: String,
        #[arg(long)]
        client_secret: String,
    },
    SetGap {
        #[arg(long)]
        ms: i64,
    },
    SetOutput {
        #[arg(short, long)]
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_guard = logging::init();
    let cli = Cli::parse();
    let mut ctx = CliContext::new();

    let result = respond(cli.command, &mut ctx).await;
    if let Err(err) = &result {
        tracing::error!("{err}");
    }
    result
}

async fn respond(command: Commands, ctx: &mut CliContext) -> Result<(), String> {
    match command {
        Commands::Convert {
            url,
            fight,
            client_id,
            client_secret,
            gap_ms,
            output_dir,
        } => {
            let options = ConvertOptions {
                url,
                fight,
                client_id,
                client_secret,
                gap_ms,
                output_dir,
            };
            commands::convert(&options, ctx).await
        }
        Commands::ConvertFile {
            events,
            actors,
            dungeon,
            gap_ms,
            output,
        } => commands::convert_file(&events, &actors, dungeon, gap_ms, output.as_deref(), ctx),
        Commands::Config => commands::show_config(ctx),
        Commands::SetCredentials {
            client_id,
            client_secret,
        } => commands::set_credentials(&client_id, &client_secret, ctx),
        Commands::SetGap { ms } => commands::set_gap(ms, ctx),
        Commands::SetOutput { path } => commands::set_output(&path, ctx),
    }
}
