// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use extractive_summarize::utils::logging::{
    format_passthrough_notice, format_stats, format_summary_heading, format_truncation_notice,
};
use extractive_summarize::{Config, SummarizeResponse, Summarizer, Validator};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "extractive_summarize")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Word-frequency extractive text summarizer", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP summarization server
    Serve {
        #[arg(long, env = "EXTRACTIVE_SUMMARIZE_HOST")]
        host: Option<String>,

        #[arg(short, long, env = "EXTRACTIVE_SUMMARIZE_PORT")]
        port: Option<u16>,
    },

    /// Summarize a file, or stdin when no file is given
    Summarize {
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        #[arg(short, long, value_name = "WORDS")]
        max_length: Option<usize>,

        /// Print the same JSON document the HTTP endpoint returns
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    extractive_summarize::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Serve { host, port } => {
            cmd_serve(config, host, port).await?;
        }
        Commands::Summarize {
            file,
            max_length,
            json,
        } => {
            cmd_summarize(&config, file, max_length, json)?;
        }
    }

    Ok(())
}

async fn cmd_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate().context("Invalid server configuration")?;

    info!("Starting summarization server");
    if config.server.legacy_error_summaries {
        warn!("Legacy error summaries enabled: failures are reported as 200 responses");
    }

    extractive_summarize::serve(config)
        .await
        .context("Server terminated with an error")?;

    Ok(())
}

fn cmd_summarize(
    config: &Config,
    file: Option<PathBuf>,
    max_length: Option<usize>,
    json: bool,
) -> Result<()> {
    let text = match &file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    // reported once, by the anyhow handler in main
    Validator::validate_word_count(&text, config.summarizer.min_input_words)?;

    let max_length = max_length.unwrap_or(config.summarizer.default_max_length);
    if max_length == 0 {
        anyhow::bail!("--max-length must be greater than 0");
    }

    let summarizer = Summarizer::new(&config.summarizer);
    let summary = summarizer
        .summarize(&text, max_length)
        .context("Failed to generate summary")?;

    if json {
        let response = SummarizeResponse::from(summary);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{}", format_summary_heading(max_length));
    println!("{}\n", summary.text);
    println!("{}", format_stats(&summary.stats));

    if summary.passthrough {
        println!("{}", format_passthrough_notice());
    }
    if summary.truncated {
        println!("{}", format_truncation_notice(max_length));
    }

    Ok(())
}
