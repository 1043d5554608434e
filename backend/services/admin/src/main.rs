use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use referee_common::error::{RefereeError, RefereeResult};
use referee_config::{init_tracing, AppConfig, LlmSettings};
use referee_db::review::schema::reset_schema;
use referee_llm::GroqClient;

#[derive(Parser)]
#[command(name = "referee-admin", version, about = "Referee maintenance commands")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Drop and recreate the review_results table. Deletes every stored review.
    ResetDb {
        /// Skip the interactive confirmation
        #[arg(long)]
        yes: bool,
    },
    /// List the model ids available to the configured API key
    ListModels,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing("info");

    match run(cli.cmd).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cmd: Cmd) -> RefereeResult<()> {
    match cmd {
        Cmd::ResetDb { yes } => reset_db(yes).await,
        Cmd::ListModels => list_models().await,
    }
}

async fn reset_db(yes: bool) -> RefereeResult<()> {
    let config = AppConfig::from_env()?;

    if !yes {
        let stdin = io::stdin();
        let confirmed = confirm(&mut stdin.lock(), &mut io::stdout())
            .map_err(|e| RefereeError::Internal(format!("reading confirmation: {e}")))?;
        if !confirmed {
            println!("Aborted; nothing was changed.");
            return Ok(());
        }
    }

    let pool = referee_db::create_pool(&config.database_url).await?;
    reset_schema(&pool).await?;
    println!("review_results recreated.");
    Ok(())
}

async fn list_models() -> RefereeResult<()> {
    let settings = LlmSettings::from_env()?;
    let client =
        GroqClient::new(&settings).map_err(|e| RefereeError::Internal(e.to_string()))?;

    let models = client.list_models().await?;
    tracing::info!(count = models.len(), "models listed");
    for id in models {
        let marker = if id == settings.model { " (configured)" } else { "" };
        println!("{id}{marker}");
    }
    Ok(())
}

/// Only an exact `YES` confirms.
fn confirm(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(
        output,
        "This deletes every stored review. Type YES to continue: "
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']) == "YES")
}
